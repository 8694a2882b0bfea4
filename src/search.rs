//! Case-insensitive search within document text.

use serde::{Deserialize, Serialize};

/// Characters of context kept on each side of a match.
pub const DEFAULT_CONTEXT_CHARS: usize = 50;

/// One occurrence of a query in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    /// Character offset of the match
    pub position: usize,

    /// The matched text as written in the document
    pub text: String,

    /// The match with surrounding text
    pub context: String,
}

/// Find every occurrence of `query`, ignoring case.
///
/// Matches may overlap. An empty query matches nothing.
pub fn search(text: &str, query: &str) -> Vec<SearchMatch> {
    search_with_context(text, query, DEFAULT_CONTEXT_CHARS)
}

/// Like [`search`], with a custom context width.
pub fn search_with_context(text: &str, query: &str, context_chars: usize) -> Vec<SearchMatch> {
    let haystack: Vec<char> = text.chars().collect();
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    (0..=haystack.len() - needle.len())
        .filter(|&i| {
            haystack[i..i + needle.len()]
                .iter()
                .zip(&needle)
                .all(|(a, b)| chars_eq_ignore_case(*a, *b))
        })
        .map(|i| {
            let end = i + needle.len();
            let context_start = i.saturating_sub(context_chars);
            let context_end = (end + context_chars).min(haystack.len());
            SearchMatch {
                position: i,
                text: haystack[i..end].iter().collect(),
                context: haystack[context_start..context_end].iter().collect(),
            }
        })
        .collect()
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
