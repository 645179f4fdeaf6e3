//! Terminal implementation of the prompt provider.
//!
//! The only place that knows about stdout/stderr and real widgets:
//! `dialoguer` for input/select/confirm, a `console`-based searchable
//! list, `colored` for leveled messages.

mod search_list;
mod styles;

use std::io;
use std::thread;
use std::time::Duration;

use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use unicode_width::UnicodeWidthStr;

use crate::error::{PostboxError, Result};
use crate::model::Post;
use crate::prompt::{DisplayMode, Message, MessageLevel, Prompt};
use search_list::SearchList;

const TABLE_PREVIEW_CHARS: usize = 30;

pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

fn convert(err: dialoguer::Error) -> PostboxError {
    match err {
        dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::Interrupted => {
            PostboxError::Interrupted
        }
        dialoguer::Error::IO(io_err) => PostboxError::Io(io_err),
        #[allow(unreachable_patterns)]
        other => PostboxError::Prompt(other.to_string()),
    }
}

impl Prompt for TerminalPrompt {
    fn input(
        &self,
        message: &str,
        default: Option<&str>,
        require_nonempty: bool,
    ) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(message);
        if let Some(value) = default {
            input = input.default(value.to_string());
        } else if !require_nonempty {
            input = input.allow_empty(true);
        }
        if require_nonempty {
            input = input.validate_with(|entry: &String| -> std::result::Result<(), &str> {
                if entry.trim().is_empty() {
                    Err("This cannot be empty")
                } else {
                    Ok(())
                }
            });
        }
        input.interact_text().map_err(convert)
    }

    fn edit_input(&self, message: &str, initial: &str, require_nonempty: bool) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .with_initial_text(initial.to_string());
        if require_nonempty {
            input = input.validate_with(|entry: &String| -> std::result::Result<(), &str> {
                if entry.trim().is_empty() {
                    Err("This cannot be empty")
                } else {
                    Ok(())
                }
            });
        } else {
            input = input.allow_empty(true);
        }
        input.interact_text().map_err(convert)
    }

    fn select(&self, message: &str, items: &[&str]) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact()
            .map_err(convert)
    }

    fn search_select(
        &self,
        message: &str,
        labels: &[String],
        filter: &dyn Fn(&str) -> Vec<usize>,
    ) -> Result<Option<usize>> {
        SearchList::new(message, labels, filter).interact()
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(convert)
    }

    fn report(&self, message: &Message) {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }

    fn show_post(&self, post: &Post, mode: DisplayMode) {
        match mode {
            DisplayMode::Detail => print_detail(post),
            DisplayMode::Table => print_table(post),
        }
    }

    fn pause(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

fn print_detail(post: &Post) {
    println!("{} {}", "Post title:".green(), post.title);
    match &post.date {
        Some(date) => println!("{} {}", "Date:".green(), date),
        None => println!("{} {}", "Date:".green(), "Unknown".italic()),
    }
    println!("\n{} {}", "Content:".green(), post.content);
    if let Some(author) = &post.author {
        println!("{} {}", "Author:".green(), author);
    }
}

fn print_table(post: &Post) {
    let date = post
        .date
        .as_ref()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let author = post.author.clone().unwrap_or_else(|| "-".to_string());
    let preview = post.preview(TABLE_PREVIEW_CHARS);

    let headers = ["Title", "Date", "Author", "Content"];
    let values = [
        post.title.as_str(),
        date.as_str(),
        author.as_str(),
        preview.as_str(),
    ];
    let widths: Vec<usize> = headers
        .iter()
        .zip(values.iter())
        .map(|(header, value)| header.width().max(value.width()))
        .collect();

    let header_row = join_row(&headers, &widths);
    let value_row = join_row(&values, &widths);

    println!("{}", header_row.bold());
    println!("{}", "-".repeat(header_row.width()));
    println!("{}", value_row);
}

fn join_row(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.width());
            format!("{}{}", cell, " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join("  ")
}
