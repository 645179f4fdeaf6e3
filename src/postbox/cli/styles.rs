use console::Style;
use once_cell::sync::Lazy;

pub static PROMPT: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static QUERY: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static CURSOR: Lazy<Style> = Lazy::new(|| Style::new().green().bold());
pub static FAINT: Lazy<Style> = Lazy::new(|| Style::new().dim());
