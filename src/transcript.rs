//! Conversation transcripts and the `sboard search` command.
//!
//! A transcript file is JSON with a `messages` array. Each entry needs a
//! `role` (`user` or `assistant`) and `content`; `id` and `created_at`
//! are optional. Messages without an id get a fresh UUID on load.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use studyboard_core::{Message, Role, SearchResult, SearchSession};

use crate::config::Config;

#[derive(Debug, Deserialize)]
struct RawTranscript {
    messages: Vec<RawMessage>,
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    #[serde(default)]
    id: Option<String>,
    role: Role,
    content: String,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl From<RawMessage> for Message {
    fn from(raw: RawMessage) -> Self {
        Message {
            id: raw.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            role: raw.role,
            content: raw.content,
            created_at: raw.created_at,
        }
    }
}

/// `--json` output shape.
#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    active_index: usize,
    results: &'a [SearchResult],
}

pub fn parse_transcript(content: &str) -> Result<Vec<Message>> {
    let raw: RawTranscript = serde_json::from_str(content)?;
    Ok(raw.messages.into_iter().map(Message::from).collect())
}

pub fn load_transcript(path: &Path) -> Result<Vec<Message>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript: {}", path.display()))?;
    parse_transcript(&content)
        .with_context(|| format!("Failed to parse transcript: {}", path.display()))
}

pub fn run_search(
    config: &Config,
    transcript_path: &Path,
    query: &str,
    step: i64,
    json: bool,
) -> Result<()> {
    let messages = load_transcript(transcript_path)?;
    tracing::debug!(messages = messages.len(), "transcript loaded");

    let mut session = SearchSession::with_params(config.search.params());
    session.set_messages(messages);
    session.set_query(query);
    session.step(step);

    if json {
        let output = SearchOutput {
            query: session.query(),
            active_index: session.active_index(),
            results: session.results(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let (position, total) = match session.counter() {
        Some(counter) => counter,
        None => {
            println!("No matches.");
            return Ok(());
        }
    };

    println!("{} of {} matches for \"{}\"", position, total, session.query());
    for (i, result) in session.results().iter().enumerate() {
        let marker = if i == session.active_index() { '>' } else { ' ' };
        let stamp = session
            .messages()
            .get(result.message_index)
            .and_then(|m| m.created_at)
            .map(|ts| format!(" {}", ts.format("%Y-%m-%d %H:%M")))
            .unwrap_or_default();
        println!(
            "{} #{} [{}{}] {}",
            marker,
            i + 1,
            result.role,
            stamp,
            render_snippet(result)
        );
    }

    Ok(())
}

/// Snippet on one line with the match wrapped in brackets.
fn render_snippet(result: &SearchResult) -> String {
    let (before, matched, after) = result.highlight();
    format!("{}[{}]{}", before, matched, after).replace('\n', " ")
}
