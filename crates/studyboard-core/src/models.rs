//! Core data models used throughout Studyboard.
//!
//! Rectangles and guide sets flow through the canvas alignment engine;
//! messages and search results flow through the conversation search engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A positioned, sized box on the planning canvas.
///
/// `x`/`y` are the top-left corner. Any unit works as long as every
/// rectangle passed to one computation uses the same one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Alignment guide coordinates to render while an item is being dragged.
///
/// `vertical` holds x-coordinates, `horizontal` holds y-coordinates. Both
/// keep insertion order and contain no exact duplicates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GuideSet {
    pub vertical: Vec<f64>,
    pub horizontal: Vec<f64>,
}

impl GuideSet {
    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }

    pub(crate) fn add_vertical(&mut self, x: f64) {
        push_unique(&mut self.vertical, x);
    }

    pub(crate) fn add_horizontal(&mut self, y: f64) {
        push_unique(&mut self.horizontal, y);
    }
}

fn push_unique(coords: &mut Vec<f64>, value: f64) {
    if !coords.contains(&value) {
        coords.push(value);
    }
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chat message in a study-planning conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Opaque identifier, stable for the lifetime of the conversation.
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Display-only; never consulted when matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Message {
    pub fn new(id: impl Into<String>, role: Role, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role,
            content: content.into(),
            created_at: None,
        }
    }
}

/// One substring match inside a conversation.
///
/// All offsets count chars, not bytes. `match_start`/`match_end` index
/// into `snippet`; `content_offset` indexes into the owning message's
/// original content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub message_id: String,
    /// Position of the owning message in the list that was searched.
    pub message_index: usize,
    pub role: Role,
    /// Excerpt around the match, with `...` markers where it was clipped.
    pub snippet: String,
    pub match_start: usize,
    pub match_end: usize,
    pub content_offset: usize,
}

impl SearchResult {
    /// Split the snippet into `(before, matched, after)` slices.
    pub fn highlight(&self) -> (&str, &str, &str) {
        let start = char_to_byte(&self.snippet, self.match_start);
        let end = char_to_byte(&self.snippet, self.match_end);
        (
            &self.snippet[..start],
            &self.snippet[start..end],
            &self.snippet[end..],
        )
    }
}

fn char_to_byte(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
