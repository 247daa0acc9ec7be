//! Full-text substring search across an in-memory conversation.
//!
//! The engine scans a caller-supplied message snapshot and returns every
//! match with a short, highlightable excerpt. There is no index and no
//! cache: each call rescans everything, in time linear in the total
//! content length. Callers that search on every keystroke should debounce.
//!
//! # Matching Rules
//!
//! 1. Queries shorter than [`SearchParams::min_query_chars`] after trimming
//!    whitespace return no results. The untrimmed query is what gets matched.
//! 2. Query and content are case-folded per char (see [`fold_case`]), so
//!    folded offsets line up with the original text.
//! 3. Each message is scanned left to right and the cursor advances by one
//!    char after every hit, so overlapping occurrences are all reported
//!    (`"aa"` in `"aaa"` matches at 0 and 1).
//! 4. Each hit gets up to [`SearchParams::context_chars`] chars of original
//!    content on each side. `...` marks a side that was clipped.
//! 5. Results are ordered by message index, then by offset in the message.

use crate::models::{Message, SearchResult};

/// Marker added to a snippet side that does not reach the content boundary.
const ELLIPSIS: &str = "...";
const ELLIPSIS_CHARS: usize = 3;

/// Search tuning, decoupled from application config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Trimmed queries shorter than this return no results.
    pub min_query_chars: usize,
    /// Chars of context kept on each side of a match.
    pub context_chars: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            min_query_chars: 2,
            context_chars: 50,
        }
    }
}

/// Search `messages` for `query` with the default [`SearchParams`].
pub fn search(messages: &[Message], query: &str) -> Vec<SearchResult> {
    search_with(messages, query, &SearchParams::default())
}

/// Search `messages` for `query`.
///
/// Returns a fresh list on every call; `messages` is never modified.
pub fn search_with(messages: &[Message], query: &str, params: &SearchParams) -> Vec<SearchResult> {
    if query.trim().chars().count() < params.min_query_chars {
        return Vec::new();
    }

    let needle: Vec<char> = query.chars().map(fold_case).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();

    for (message_index, message) in messages.iter().enumerate() {
        let original: Vec<char> = message.content.chars().collect();
        let folded: Vec<char> = original.iter().copied().map(fold_case).collect();

        for offset in find_all(&folded, &needle) {
            let (snippet, match_start) =
                build_snippet(&original, offset, needle.len(), params.context_chars);
            results.push(SearchResult {
                message_id: message.id.clone(),
                message_index,
                role: message.role,
                snippet,
                match_start,
                match_end: match_start + needle.len(),
                content_offset: offset,
            });
        }
    }

    tracing::debug!(
        messages = messages.len(),
        matches = results.len(),
        "conversation search"
    );

    results
}

/// Lowercase a single char when its lowercase form is also a single char.
///
/// Chars whose lowercase mapping expands (e.g. `'İ'`) are left untouched,
/// which keeps folded text index-aligned with the original.
pub fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Every start offset of `needle` in `haystack`, advancing one char per hit.
fn find_all(haystack: &[char], needle: &[char]) -> Vec<usize> {
    if needle.len() > haystack.len() {
        return Vec::new();
    }
    haystack
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle)
        .map(|(offset, _)| offset)
        .collect()
}

/// Build the excerpt around a match and return it with the match's
/// start offset inside the excerpt.
fn build_snippet(
    content: &[char],
    offset: usize,
    len: usize,
    context: usize,
) -> (String, usize) {
    let start = offset.saturating_sub(context);
    let end = (offset + len + context).min(content.len());

    let mut snippet = String::new();
    let mut match_start = offset - start;

    if start > 0 {
        snippet.push_str(ELLIPSIS);
        match_start += ELLIPSIS_CHARS;
    }
    snippet.extend(&content[start..end]);
    if end < content.len() {
        snippet.push_str(ELLIPSIS);
    }

    (snippet, match_start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user(id: &str, content: &str) -> Message {
        Message::new(id, Role::User, content)
    }

    fn assistant(id: &str, content: &str) -> Message {
        Message::new(id, Role::Assistant, content)
    }

    #[test]
    fn test_short_queries_return_nothing() {
        let messages = vec![user("1", "a b c aa bb")];
        assert!(search(&messages, "").is_empty());
        assert!(search(&messages, "a").is_empty());
        assert!(search(&messages, "  a  ").is_empty());
        assert!(search(&messages, "   ").is_empty());
    }

    #[test]
    fn test_empty_conversation() {
        assert!(search(&[], "machine").is_empty());
    }

    #[test]
    fn test_finds_every_occurrence() {
        let messages = vec![user("1", "I like machine learning and machine vision")];

        let results = search(&messages, "machine");

        assert_eq!(results.len(), 2);
        for r in &results {
            assert_eq!(r.message_index, 0);
            assert_eq!(r.message_id, "1");
            assert_eq!(r.role, Role::User);
            assert_eq!(r.match_end - r.match_start, 7);
            assert_eq!(r.highlight().1, "machine");
        }
        assert_eq!(results[0].content_offset, 7);
        assert_eq!(results[1].content_offset, 28);
    }

    #[test]
    fn test_overlapping_matches_advance_by_one() {
        let messages = vec![user("1", "aaa")];

        let results = search(&messages, "aa");

        let offsets: Vec<usize> = results.iter().map(|r| r.content_offset).collect();
        assert_eq!(offsets, vec![0, 1]);
        assert_eq!(results[1].snippet, "aaa");
        assert_eq!((results[1].match_start, results[1].match_end), (1, 3));
    }

    #[test]
    fn test_case_insensitive_keeps_original_text() {
        let messages = vec![assistant("a1", "Try MIT or Stanford for Machine Learning.")];

        let results = search(&messages, "machine LEARNING");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].highlight().1, "Machine Learning");
        assert_eq!(results[0].role, Role::Assistant);
    }

    #[test]
    fn test_untrimmed_query_is_matched() {
        let messages = vec![user("1", "lab work, lab")];

        let results = search(&messages, "lab ");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].content_offset, 0);
    }

    #[test]
    fn test_snippet_clipped_on_both_sides() {
        let content = format!("{}needle{}", "x".repeat(60), "y".repeat(70));
        let messages = vec![user("1", &content)];

        let results = search(&messages, "needle");

        let r = &results[0];
        assert!(r.snippet.starts_with("..."));
        assert!(r.snippet.ends_with("..."));
        // 3 + 50 before + 6 + 50 after + 3
        assert_eq!(r.snippet.chars().count(), 112);
        assert_eq!(r.match_start, 53);
        assert_eq!(r.match_end, 59);
        assert_eq!(r.content_offset, 60);
        assert_eq!(r.highlight(), (&r.snippet[..53], "needle", &r.snippet[59..]));
    }

    #[test]
    fn test_snippet_clipped_before_only() {
        let content = format!("{}needle{}", "x".repeat(70), "y".repeat(5));
        let messages = vec![user("1", &content)];

        let results = search(&messages, "needle");

        let r = &results[0];
        assert_eq!(r.snippet, format!("...{}needleyyyyy", "x".repeat(50)));
        assert!(!r.snippet.ends_with("..."));
        assert_eq!((r.match_start, r.match_end), (53, 59));
        assert_eq!(r.content_offset, 70);
    }

    #[test]
    fn test_snippet_clipped_after_only() {
        let content = format!("xxxxxneedle{}", "y".repeat(70));
        let messages = vec![user("1", &content)];

        let results = search(&messages, "needle");

        let r = &results[0];
        assert_eq!(r.snippet, format!("xxxxxneedle{}...", "y".repeat(50)));
        assert!(!r.snippet.starts_with("..."));
        assert_eq!((r.match_start, r.match_end), (5, 11));
        assert_eq!(r.content_offset, 5);
    }

    #[test]
    fn test_snippet_unclipped_when_within_context() {
        let messages = vec![user("1", "short note about labs")];

        let results = search(&messages, "about");

        let r = &results[0];
        assert_eq!(r.snippet, "short note about labs");
        assert_eq!((r.match_start, r.match_end), (11, 16));
    }

    #[test]
    fn test_exact_context_boundary_has_no_ellipsis() {
        let content = format!("{}hit{}", "a".repeat(50), "b".repeat(50));
        let messages = vec![user("1", &content)];

        let results = search(&messages, "hit");

        assert_eq!(results[0].snippet, content);
        assert_eq!(results[0].match_start, 50);
    }

    #[test]
    fn test_offsets_count_chars_not_bytes() {
        let messages = vec![user("1", "Études à Zürich: über Uni")];

        let results = search(&messages, "über");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].content_offset, 17);
        assert_eq!(results[0].match_start, 17);
        assert_eq!(results[0].highlight().1, "über");
    }

    #[test]
    fn test_results_ordered_by_message_then_offset() {
        let messages = vec![
            user("1", "no hits here"),
            assistant("2", "phd and phd"),
            user("3", "phd?"),
        ];

        let results = search(&messages, "phd");

        let order: Vec<(usize, usize)> = results
            .iter()
            .map(|r| (r.message_index, r.content_offset))
            .collect();
        assert_eq!(order, vec![(1, 0), (1, 8), (2, 0)]);
        assert_eq!(results[2].message_id, "3");
    }

    #[test]
    fn test_search_is_deterministic() {
        let messages = vec![user("1", "grant deadline"), assistant("2", "Deadline is May")];
        let before = messages.clone();

        assert_eq!(search(&messages, "deadline"), search(&messages, "deadline"));
        assert_eq!(messages, before);
    }

    #[test]
    fn test_custom_params() {
        let params = SearchParams {
            min_query_chars: 1,
            context_chars: 2,
        };
        let messages = vec![user("1", "abcdefg")];

        let results = search_with(&messages, "d", &params);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].snippet, "...bcdef...");
        assert_eq!((results[0].match_start, results[0].match_end), (5, 6));
    }

    #[test]
    fn test_fold_case_keeps_expanding_chars() {
        assert_eq!(fold_case('A'), 'a');
        assert_eq!(fold_case('Ü'), 'ü');
        assert_eq!(fold_case('İ'), 'İ');
    }
}
