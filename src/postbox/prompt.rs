//! The prompt provider boundary.
//!
//! Everything the session says to or asks of the user goes through the
//! [`Prompt`] trait. The core never touches a terminal directly; the
//! binary wires in the real widgets (see `cli`), tests wire in
//! [`scripted::ScriptedPrompt`].

use std::time::Duration;

use crate::error::Result;
use crate::model::Post;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Leveled user feedback; the terminal side decides how each level looks.
#[derive(Debug, Clone)]
pub struct Message {
    pub level: MessageLevel,
    pub content: String,
}

impl Message {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// How a resolved post should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Detail,
    Table,
}

pub trait Prompt {
    /// Free-text input. An empty entry falls back to `default` when one
    /// is given; `require_nonempty` makes the widget re-ask until the
    /// entry has content.
    fn input(&self, message: &str, default: Option<&str>, require_nonempty: bool)
        -> Result<String>;

    /// Free-text input pre-filled with `initial`; accepting the prefill
    /// unchanged is a valid answer.
    fn edit_input(&self, message: &str, initial: &str, require_nonempty: bool) -> Result<String>;

    /// Single choice out of `items`. Returns the chosen index.
    fn select(&self, message: &str, items: &[&str]) -> Result<usize>;

    /// Searchable choice list. `filter` maps the current query to the
    /// matching indices into `labels`; the widget only renders and picks.
    /// `Ok(None)` means the list was dismissed without a choice.
    fn search_select(
        &self,
        message: &str,
        labels: &[String],
        filter: &dyn Fn(&str) -> Vec<usize>,
    ) -> Result<Option<usize>>;

    /// Yes/no question with a default answer.
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;

    /// Show a leveled message.
    fn report(&self, message: &Message);

    /// Render a full post.
    fn show_post(&self, post: &Post, mode: DisplayMode);

    /// Fixed display delay, so auto-selections stay readable. No-op
    /// outside a terminal.
    fn pause(&self, _duration: Duration) {}
}

#[cfg(any(test, feature = "test_utils"))]
pub mod scripted {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::error::PostboxError;

    /// One queued user reaction.
    #[derive(Debug, Clone)]
    pub enum Answer {
        /// Text typed into an input; empty text takes the default.
        Input(String),
        /// Accept an edit prefill unchanged.
        Keep,
        /// Pick an item by index.
        Select(usize),
        /// Type `query` into the searchable list, then pick the
        /// `pick`-th visible match.
        Search { query: String, pick: usize },
        /// Dismiss the searchable list without choosing.
        Dismiss,
        /// Answer a confirm.
        Confirm(bool),
        /// Hit Ctrl-C.
        Interrupt,
    }

    impl Answer {
        pub fn input(text: &str) -> Self {
            Answer::Input(text.to_string())
        }

        pub fn search(query: &str, pick: usize) -> Self {
            Answer::Search {
                query: query.to_string(),
                pick,
            }
        }
    }

    /// Replays queued answers and records everything shown to the user.
    /// Panics on a script/flow mismatch.
    #[derive(Default)]
    pub struct ScriptedPrompt {
        answers: RefCell<VecDeque<Answer>>,
        reported: RefCell<Vec<Message>>,
        shown: RefCell<Vec<(Post, DisplayMode)>>,
    }

    impl ScriptedPrompt {
        pub fn new(answers: Vec<Answer>) -> Self {
            Self {
                answers: RefCell::new(answers.into()),
                reported: RefCell::new(Vec::new()),
                shown: RefCell::new(Vec::new()),
            }
        }

        pub fn reported(&self) -> Vec<Message> {
            self.reported.borrow().clone()
        }

        pub fn reported_contents(&self) -> Vec<String> {
            self.reported
                .borrow()
                .iter()
                .map(|m| m.content.clone())
                .collect()
        }

        pub fn shown_posts(&self) -> Vec<(Post, DisplayMode)> {
            self.shown.borrow().clone()
        }

        pub fn script_exhausted(&self) -> bool {
            self.answers.borrow().is_empty()
        }

        fn next(&self, expected: &str) -> Answer {
            self.answers
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| panic!("script exhausted, session asked for {expected}"))
        }
    }

    impl Prompt for ScriptedPrompt {
        fn input(
            &self,
            message: &str,
            default: Option<&str>,
            require_nonempty: bool,
        ) -> Result<String> {
            match self.next("an input") {
                Answer::Input(text) => {
                    if text.is_empty() {
                        if let Some(fallback) = default {
                            return Ok(fallback.to_string());
                        }
                        if require_nonempty {
                            panic!("script gave an empty answer to required input {message:?}");
                        }
                    }
                    Ok(text)
                }
                Answer::Interrupt => Err(PostboxError::Interrupted),
                other => panic!("expected Input for {message:?}, script had {other:?}"),
            }
        }

        fn edit_input(
            &self,
            message: &str,
            initial: &str,
            require_nonempty: bool,
        ) -> Result<String> {
            match self.next("an edit input") {
                Answer::Keep => Ok(initial.to_string()),
                Answer::Input(text) => {
                    if text.is_empty() && require_nonempty {
                        panic!("script gave an empty answer to required input {message:?}");
                    }
                    Ok(text)
                }
                Answer::Interrupt => Err(PostboxError::Interrupted),
                other => panic!("expected Input/Keep for {message:?}, script had {other:?}"),
            }
        }

        fn select(&self, message: &str, items: &[&str]) -> Result<usize> {
            match self.next("a selection") {
                Answer::Select(index) => {
                    assert!(
                        index < items.len(),
                        "script picked {index} out of {} items for {message:?}",
                        items.len()
                    );
                    Ok(index)
                }
                Answer::Interrupt => Err(PostboxError::Interrupted),
                other => panic!("expected Select for {message:?}, script had {other:?}"),
            }
        }

        fn search_select(
            &self,
            message: &str,
            _labels: &[String],
            filter: &dyn Fn(&str) -> Vec<usize>,
        ) -> Result<Option<usize>> {
            match self.next("a search selection") {
                Answer::Search { query, pick } => {
                    let matches = filter(&query);
                    Ok(matches.get(pick).copied())
                }
                Answer::Dismiss => Ok(None),
                Answer::Interrupt => Err(PostboxError::Interrupted),
                other => panic!("expected Search/Dismiss for {message:?}, script had {other:?}"),
            }
        }

        fn confirm(&self, message: &str, _default: bool) -> Result<bool> {
            match self.next("a confirmation") {
                Answer::Confirm(answer) => Ok(answer),
                Answer::Interrupt => Err(PostboxError::Interrupted),
                other => panic!("expected Confirm for {message:?}, script had {other:?}"),
            }
        }

        fn report(&self, message: &Message) {
            self.reported.borrow_mut().push(message.clone());
        }

        fn show_post(&self, post: &Post, mode: DisplayMode) {
            self.shown.borrow_mut().push((post.clone(), mode));
        }
    }
}
