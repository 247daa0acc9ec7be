//! Caller-owned state for in-conversation search.
//!
//! A [`SearchSession`] is either closed or open. While open it holds the
//! current query, the results computed from it, and a cursor over those
//! results. Results are recomputed in full whenever the query or the
//! message snapshot changes.
//!
//! After every operation `active_index < results.len()` when there are
//! results, and `active_index == 0` when there are none.

use crate::models::{Message, SearchResult};
use crate::search::{search_with, SearchParams};

#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    params: SearchParams,
    messages: Vec<Message>,
    open: bool,
    query: String,
    results: Vec<SearchResult>,
    active_index: usize,
}

impl SearchSession {
    /// A closed session using the default [`SearchParams`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: SearchParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The focused result, if there are any results.
    pub fn active(&self) -> Option<&SearchResult> {
        self.results.get(self.active_index)
    }

    /// `(position, total)` for an "N of M" counter, 1-based.
    pub fn counter(&self) -> Option<(usize, usize)> {
        if self.results.is_empty() {
            None
        } else {
            Some((self.active_index + 1, self.results.len()))
        }
    }

    /// Start searching with a blank query. No-op if already open.
    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.query.clear();
        self.results.clear();
        self.active_index = 0;
    }

    /// Reset to a blank, closed session. The message snapshot is kept.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.results.clear();
        self.active_index = 0;
    }

    /// Replace the query, recompute results and focus the first one.
    ///
    /// Opens the session if it was closed.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.open();
        self.query = query.into();
        self.recompute();
        self.active_index = 0;
        tracing::debug!(
            query = %self.query,
            matches = self.results.len(),
            "search query updated"
        );
    }

    /// Replace the message snapshot and recompute results for the current
    /// query. The cursor stays put if it still addresses a result.
    pub fn set_messages(&mut self, messages: Vec<Message>) {
        self.messages = messages;
        if !self.open {
            return;
        }
        self.recompute();
        if self.active_index >= self.results.len() {
            self.active_index = 0;
        }
    }

    /// Focus the next result, wrapping to the first.
    pub fn next_match(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.active_index = (self.active_index + 1) % self.results.len();
    }

    /// Focus the previous result, wrapping to the last.
    pub fn prev_match(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let len = self.results.len();
        self.active_index = (self.active_index + len - 1) % len;
    }

    /// Move the cursor `steps` places with wrap-around: forward when positive,
    /// back when negative.
    pub fn step(&mut self, steps: i64) {
        if self.results.is_empty() {
            return;
        }
        let len = self.results.len() as i128;
        self.active_index = (self.active_index as i128 + steps as i128).rem_euclid(len) as usize;
    }

    fn recompute(&mut self) {
        self.results = search_with(&self.messages, &self.query, &self.params);
    }
}
