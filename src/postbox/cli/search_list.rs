use console::{Key, Term};

use super::styles;
use crate::error::{PostboxError, Result};

const MAX_VISIBLE: usize = 8;

/// Filterable choice list over `console` key events.
///
/// The caller supplies the filter that maps the typed query to visible
/// entries. `Esc` dismisses the list, `Ctrl-C` interrupts the session.
pub struct SearchList<'a> {
    message: &'a str,
    labels: &'a [String],
    filter: &'a dyn Fn(&str) -> Vec<usize>,
}

impl<'a> SearchList<'a> {
    pub fn new(
        message: &'a str,
        labels: &'a [String],
        filter: &'a dyn Fn(&str) -> Vec<usize>,
    ) -> Self {
        Self {
            message,
            labels,
            filter,
        }
    }

    pub fn interact(&self) -> Result<Option<usize>> {
        let term = Term::stderr();
        term.hide_cursor()?;
        let outcome = self.event_loop(&term);
        let _ = term.show_cursor();
        outcome
    }

    fn event_loop(&self, term: &Term) -> Result<Option<usize>> {
        let mut query = String::new();
        let mut cursor = 0usize;
        let mut drawn = 0usize;

        loop {
            let matches = (self.filter)(&query);
            if cursor >= matches.len() {
                cursor = matches.len().saturating_sub(1);
            }

            term.clear_last_lines(drawn)?;
            drawn = self.draw(term, &query, &matches, cursor)?;

            match term.read_key()? {
                Key::Char(c) => {
                    query.push(c);
                    cursor = 0;
                }
                Key::Backspace => {
                    query.pop();
                    cursor = 0;
                }
                Key::ArrowUp => cursor = cursor.saturating_sub(1),
                Key::ArrowDown => {
                    if cursor + 1 < matches.len() {
                        cursor += 1;
                    }
                }
                Key::Enter => {
                    if let Some(&index) = matches.get(cursor) {
                        term.clear_last_lines(drawn)?;
                        return Ok(Some(index));
                    }
                }
                Key::Escape => {
                    term.clear_last_lines(drawn)?;
                    return Ok(None);
                }
                Key::CtrlC => {
                    term.clear_last_lines(drawn)?;
                    return Err(PostboxError::Interrupted);
                }
                _ => {}
            }
        }
    }

    fn draw(&self, term: &Term, query: &str, matches: &[usize], cursor: usize) -> Result<usize> {
        let mut lines = 1usize;
        term.write_line(&format!(
            "{} {}",
            styles::PROMPT.apply_to(self.message),
            styles::QUERY.apply_to(query)
        ))?;

        if matches.is_empty() {
            term.write_line(&format!("{}", styles::FAINT.apply_to("  (no matching posts)")))?;
            return Ok(lines + 1);
        }

        // Window the list around the cursor.
        let window_start = cursor.saturating_sub(MAX_VISIBLE - 1);
        for (row, &index) in matches
            .iter()
            .enumerate()
            .skip(window_start)
            .take(MAX_VISIBLE)
        {
            let label = &self.labels[index];
            if row == cursor {
                term.write_line(&format!("{} {}", styles::CURSOR.apply_to(">"), label))?;
            } else {
                term.write_line(&format!("  {}", label))?;
            }
            lines += 1;
        }

        let hidden = matches.len().saturating_sub(window_start + MAX_VISIBLE);
        if hidden > 0 {
            term.write_line(&format!(
                "{}",
                styles::FAINT.apply_to(format!("  ... and {} more", hidden))
            ))?;
            lines += 1;
        }
        Ok(lines)
    }
}
