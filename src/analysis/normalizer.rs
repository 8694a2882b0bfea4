//! Sentence splitting and tokenization.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// A word, optionally with inner apostrophes ("don't", "l'homme").
const TOKEN_PATTERN: &str = r"\w+(?:['’]\w+)*";

/// One sentence of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Position among the document's sentences (0-based)
    pub index: usize,

    /// The sentence exactly as written, trimmed of surrounding whitespace
    pub raw: &'a str,

    /// Lower-cased word tokens with punctuation stripped
    pub tokens: Vec<String>,
}

/// The normalized form of a document's text, shared by every stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText<'a> {
    /// Sentences in document order
    pub sentences: Vec<Sentence<'a>>,
}

impl<'a> NormalizedText<'a> {
    /// Number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Total number of tokens across all sentences.
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(|s| s.tokens.len()).sum()
    }

    /// Iterate over every token in document order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.sentences
            .iter()
            .flat_map(|s| s.tokens.iter().map(String::as_str))
    }

    /// Check if no sentence was found.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Splits raw text into sentences of normalized tokens.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    token_regex: Regex,
}

impl TextNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Self {
            token_regex: Regex::new(TOKEN_PATTERN).expect("token pattern is valid"),
        }
    }

    /// Normalize text into sentences.
    ///
    /// Sentences without any word token (stray punctuation, numbering
    /// debris) are dropped.
    pub fn normalize<'a>(&self, text: &'a str) -> NormalizedText<'a> {
        let sentences = split_sentences(text)
            .into_iter()
            .filter_map(|raw| {
                let tokens = self.tokenize(raw);
                (!tokens.is_empty()).then_some((raw, tokens))
            })
            .enumerate()
            .map(|(index, (raw, tokens))| Sentence { index, raw, tokens })
            .collect();

        NormalizedText { sentences }
    }

    /// Tokenize a fragment: NFC-normalize, lower-case, strip punctuation.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized: String = text.nfc().collect();
        self.token_regex
            .find_iter(&normalized)
            .map(|m| {
                m.as_str()
                    .chars()
                    .filter(|c| *c != '\'' && *c != '’')
                    .flat_map(char::to_lowercase)
                    .collect()
            })
            .collect()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Split text at `.`, `!` or `?` followed by whitespace or the end of text.
///
/// Runs such as `?!` end at the last mark. Abbreviations are not special-cased.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
        if at_boundary {
            let end = i + c.len_utf8();
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, fragment: &'a str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("Hello world. How are you? Fine!");
        assert_eq!(sentences, vec!["Hello world.", "How are you?", "Fine!"]);
    }

    #[test]
    fn test_split_requires_whitespace_after_mark() {
        let sentences = split_sentences("Version 1.5 shipped. See example.com today");
        assert_eq!(
            sentences,
            vec!["Version 1.5 shipped.", "See example.com today"]
        );
    }

    #[test]
    fn test_split_mark_runs() {
        let sentences = split_sentences("Really?! Yes... ok");
        assert_eq!(sentences, vec!["Really?!", "Yes...", "ok"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n ").is_empty());
    }

    #[test]
    fn test_tokenize() {
        let normalizer = TextNormalizer::new();
        let tokens = normalizer.tokenize("The QUICK, brown fox -- don't stop!");
        assert_eq!(tokens, vec!["the", "quick", "brown", "fox", "dont", "stop"]);
    }

    #[test]
    fn test_tokenize_unicode() {
        let normalizer = TextNormalizer::new();
        // "é" written as e + combining acute accent
        let tokens = normalizer.tokenize("Être Cafe\u{301}");
        assert_eq!(tokens, vec!["être", "café"]);
    }

    #[test]
    fn test_normalize_keeps_raw_sentences() {
        let normalizer = TextNormalizer::new();
        let text = "First Sentence here.  Second one!\n\n...\nThird";
        let normalized = normalizer.normalize(text);

        assert_eq!(normalized.sentence_count(), 3);
        assert_eq!(normalized.sentences[0].raw, "First Sentence here.");
        assert_eq!(normalized.sentences[0].tokens, vec!["first", "sentence", "here"]);
        assert_eq!(normalized.sentences[2].raw, "Third");
        assert_eq!(normalized.sentences[2].index, 2);
        assert_eq!(normalized.token_count(), 6);
    }

    #[test]
    fn test_normalize_empty() {
        let normalizer = TextNormalizer::new();
        let normalized = normalizer.normalize("");
        assert!(normalized.is_empty());
        assert_eq!(normalized.token_count(), 0);
    }
}
