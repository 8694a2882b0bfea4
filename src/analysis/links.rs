//! URL extraction and deduplication.
//!
//! URLs are recognized by a small scanner rather than a regular expression.
//! The accepted grammar is:
//!
//! ```text
//! url    = scheme "://" host [ ":" port ] [ rest ]
//! scheme = "http" | "https"                  ; ASCII case-insensitive
//! host   = 1*( ALPHA / DIGIT / "-" / "." )   ; must contain a letter or digit
//! port   = 1*DIGIT
//! rest   = ( "/" / "?" / "#" ) *urlchar
//! ```
//!
//! `urlchar` is any character other than whitespace, control characters and
//! ``< > " ' ` { } | \ ^``. Trailing `.,;:!?` and unbalanced closing `)` or
//! `]` are treated as surrounding prose and trimmed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A deduplicated link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Normalized URL
    pub url: String,

    /// Host component, lower-cased, without port
    pub domain: String,

    /// "http" or "https"
    pub scheme: String,

    /// Raw matches that normalize to this URL
    pub occurrences: usize,
}

/// A single URL match in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMatch<'a> {
    /// Byte offset of the match
    pub start: usize,

    /// The matched text
    pub raw: &'a str,

    /// Lower-cased scheme
    pub scheme: String,

    /// Lower-cased host
    pub host: String,

    /// Port, if given
    pub port: Option<&'a str>,

    /// Path and query, fragment removed
    pub path: &'a str,
}

impl UrlMatch<'_> {
    /// Canonical form used as the deduplication key.
    ///
    /// Scheme and host are lower-cased, the fragment is dropped, and a bare
    /// `/` path is removed so `http://a.com/` and `http://a.com` coincide.
    pub fn normalized(&self) -> String {
        let mut url = format!("{}://{}", self.scheme, self.host);
        if let Some(port) = self.port {
            url.push(':');
            url.push_str(port);
        }
        if self.path != "/" {
            url.push_str(self.path);
        }
        url
    }
}

/// Extract, normalize and group the links in the text.
///
/// Sorted by descending occurrences; ties keep first-seen order.
pub fn extract(text: &str) -> Vec<Link> {
    let mut links: Vec<Link> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for m in scan(text) {
        let url = m.normalized();
        match index.get(&url) {
            Some(&i) => links[i].occurrences += 1,
            None => {
                index.insert(url.clone(), links.len());
                links.push(Link {
                    url,
                    domain: m.host,
                    scheme: m.scheme,
                    occurrences: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts
    links.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
    links
}

/// Find every URL in the text, in order of appearance.
pub fn scan(text: &str) -> Vec<UrlMatch<'_>> {
    let mut matches = Vec::new();
    let mut pos = 0;

    while let Some(offset) = find_scheme(&text[pos..]) {
        let start = pos + offset;
        match match_url(text, start) {
            Some(m) => {
                pos = start + m.raw.len();
                matches.push(m);
            }
            None => pos = start + 1,
        }
    }

    matches
}

const MAX_PORT_DIGITS: usize = 5;

/// Byte offset of the next `http` that could start a URL.
fn find_scheme(haystack: &str) -> Option<usize> {
    let bytes = haystack.as_bytes();
    (0..bytes.len().saturating_sub(3)).find(|&i| bytes[i..i + 4].eq_ignore_ascii_case(b"http"))
}

fn match_url(text: &str, start: usize) -> Option<UrlMatch<'_>> {
    let rest = &text[start..];
    let (scheme, after_scheme) = if starts_with_ignore_case(rest, "https://") {
        ("https", 8)
    } else if starts_with_ignore_case(rest, "http://") {
        ("http", 7)
    } else {
        return None;
    };

    let authority = &rest[after_scheme..];
    let host_len = authority
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '.'))
        .unwrap_or(authority.len());
    let host = authority[..host_len].trim_end_matches('.');
    if !host.chars().any(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    let mut end = after_scheme + host_len;

    let mut port = None;
    if rest[end..].starts_with(':') {
        let digits = rest[end + 1..]
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len() - end - 1);
        let after_digits = &rest[end + 1 + digits..];
        if (1..=MAX_PORT_DIGITS).contains(&digits) {
            port = Some(&rest[end + 1..end + 1 + digits]);
            end += 1 + digits;
        } else if digits == 0 && after_digits.starts_with(&['/', '?', '#'][..]) {
            // Empty port: the colon is part of the URL
            end += 1;
        }
    }

    let path_start = end;
    if rest[end..].starts_with(&['/', '?', '#'][..]) {
        let tail = &rest[end..];
        let len = tail.find(is_url_delimiter).unwrap_or(tail.len());
        end += trim_trailing(&tail[..len]).len();
    } else if host.len() < host_len {
        // Host ended with a dot that belongs to the sentence
        end = after_scheme + host.len();
    }

    let raw = &rest[..end];
    let path_and_query = &rest[path_start.min(end)..end];
    let path = path_and_query
        .split_once('#')
        .map_or(path_and_query, |(before, _)| before);

    Some(UrlMatch {
        start,
        raw,
        scheme: scheme.to_string(),
        host: host.to_ascii_lowercase(),
        port,
        path,
    })
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len() && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

fn is_url_delimiter(c: char) -> bool {
    c.is_whitespace()
        || c.is_control()
        || matches!(c, '<' | '>' | '"' | '\'' | '`' | '{' | '}' | '|' | '\\' | '^')
}

/// Strip trailing prose punctuation and unbalanced closing brackets.
fn trim_trailing(candidate: &str) -> &str {
    let mut s = candidate;
    loop {
        let Some(last) = s.chars().last() else {
            return s;
        };
        let strip = match last {
            '.' | ',' | ';' | ':' | '!' | '?' => true,
            ')' => s.matches('(').count() < s.matches(')').count(),
            ']' => s.matches('[').count() < s.matches(']').count(),
            _ => false,
        };
        if !strip {
            return s;
        }
        s = &s[..s.len() - last.len_utf8()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_and_host_case_deduplicated() {
        let links = extract("Visit http://Example.com/ or http://example.com for details.");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "http://example.com");
        assert_eq!(links[0].domain, "example.com");
        assert_eq!(links[0].scheme, "http");
        assert_eq!(links[0].occurrences, 2);
    }

    #[test]
    fn test_sorted_by_occurrences_then_first_seen() {
        let text = "https://b.org/x then https://a.org/y and https://a.org/y \
                    plus https://c.net";
        let urls: Vec<_> = extract(text).into_iter().map(|l| l.url).collect();
        assert_eq!(
            urls,
            vec!["https://a.org/y", "https://b.org/x", "https://c.net"]
        );
    }

    #[test]
    fn test_trailing_punctuation_trimmed() {
        let matches = scan("See https://docs.rs/regex/latest. Also (https://x.io/a_(b)).");
        let raws: Vec<_> = matches.iter().map(|m| m.raw).collect();
        assert_eq!(raws, vec!["https://docs.rs/regex/latest", "https://x.io/a_(b)"]);
    }

    #[test]
    fn test_bare_host_followed_by_period() {
        let links = extract("Go to http://rust-lang.org.");
        assert_eq!(links[0].url, "http://rust-lang.org");
    }

    #[test]
    fn test_query_kept_and_fragment_dropped() {
        let links = extract("https://site.com/search?q=rust#top https://site.com/search?q=rust");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "https://site.com/search?q=rust");
        assert_eq!(links[0].occurrences, 2);
    }

    #[test]
    fn test_port_and_scheme_case() {
        let links = extract("HTTPS://LocalHost:8080/API");
        assert_eq!(links[0].url, "https://localhost:8080/API");
        assert_eq!(links[0].domain, "localhost");
        assert_eq!(links[0].scheme, "https");
    }

    #[test]
    fn test_empty_port_keeps_path() {
        let matches = scan("see http://a.com:/x now");
        assert_eq!(matches[0].raw, "http://a.com:/x");
        assert_eq!(matches[0].port, None);
        assert_eq!(matches[0].path, "/x");

        let links = extract("http://a.com:/x and http://a.com/x");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "http://a.com/x");
        assert_eq!(links[0].occurrences, 2);
    }

    #[test]
    fn test_overlong_port_not_consumed() {
        let matches = scan("http://a.com:123456/x");
        assert_eq!(matches[0].raw, "http://a.com");
        assert_eq!(matches[0].port, None);
    }

    #[test]
    fn test_requires_scheme_and_host() {
        assert!(extract("www.example.com and ftp://files.example.com").is_empty());
        assert!(extract("http:// nothing here, https://.").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_match_positions() {
        let matches = scan("a http://x.com b");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].start, 2);
        assert_eq!(matches[0].raw, "http://x.com");
        assert_eq!(matches[0].path, "");
    }
}
