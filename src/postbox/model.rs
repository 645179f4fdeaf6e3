use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Title applied when the user leaves the title prompt blank.
pub const DEFAULT_TITLE: &str = "Untitled post";

/// Sentinel the prompts use for "no author". A post whose author prompt
/// comes back as this literal is stored with no author at all.
pub const NO_AUTHOR: &str = "None";

/// Format used when a timestamp is written to the post document,
/// e.g. `Fri Aug  7 2026 14:03:59`. The stored form is for reading,
/// not for parsing back.
pub const DATE_DISPLAY_FORMAT: &str = "%a %b %e %Y %H:%M:%S";

/// Timestamp of the last substantive change to a post.
///
/// A post touched during this run carries a real instant; a post read
/// back from disk only carries the display string it was saved as.
#[derive(Debug, Clone, PartialEq)]
pub enum PostDate {
    Stamped(DateTime<Local>),
    Text(String),
}

impl PostDate {
    pub fn now() -> Self {
        PostDate::Stamped(Local::now())
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostDate::Stamped(at) => write!(f, "{}", at.format(DATE_DISPLAY_FORMAT)),
            PostDate::Text(text) => f.write_str(text),
        }
    }
}

impl Serialize for PostDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PostDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(PostDate::Text(String::deserialize(deserializer)?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<PostDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Post {
    pub fn new(title: String, content: String, author: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            date: Some(PostDate::now()),
            author,
        }
    }

    /// One-line content preview for lists and tables.
    pub fn preview(&self, max_chars: usize) -> String {
        let mut preview: String = self
            .content
            .chars()
            .take(max_chars)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        if self.content.chars().count() > max_chars {
            preview.push('…');
        }
        preview
    }
}

/// Map raw author input to the stored form. Blank input and the literal
/// sentinel both mean "no author".
pub fn normalize_author(raw: &str) -> Option<String> {
    match raw.trim() {
        "" | NO_AUTHOR => None,
        name => Some(name.to_string()),
    }
}
