//! Analyzer configuration: the constant tables and thresholds the stages use.
//!
//! Nothing here is process-global. A configuration is built once, validated,
//! and handed to [`Analyzer::new`](super::Analyzer::new); alternate stop-word
//! sets or language profiles are just different values.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default reading speed in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: f64 = 200.0;

/// Default minimum keyword length in characters.
pub const DEFAULT_MIN_TERM_LENGTH: usize = 3;

/// Default number of keywords reported.
pub const DEFAULT_MAX_KEYWORDS: usize = 20;

/// Default number of sentences in a summary.
pub const DEFAULT_MAX_SUMMARY_SENTENCES: usize = 5;

/// Default minimum token count before a language is guessed.
pub const DEFAULT_MIN_LANGUAGE_TOKENS: usize = 5;

/// Default lead the best language must hold over the runner-up.
pub const DEFAULT_MIN_LANGUAGE_MARGIN: f64 = 0.02;

const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "am", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "being", "but", "by", "can", "could", "did", "do", "does", "doing", "for",
    "from", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how", "i",
    "if", "in", "into", "is", "it", "its", "just", "may", "me", "might", "must", "my", "no", "nor",
    "not", "now", "of", "on", "only", "or", "our", "ours", "out", "over", "shall", "she",
    "should", "so", "some", "than", "that", "the", "their", "them", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up", "upon", "us", "very",
    "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will",
    "with", "would", "you", "your", "yours",
];

const ENGLISH: &[&str] = &[
    "the", "is", "and", "to", "of", "in", "that", "for", "it", "was", "with", "are", "this", "be",
    "on", "as", "have", "not", "by", "at",
];

const SPANISH: &[&str] = &[
    "el", "la", "de", "que", "y", "en", "es", "por", "los", "las", "un", "una", "con", "del",
    "para", "se", "al", "lo", "como", "pero",
];

const FRENCH: &[&str] = &[
    "le", "la", "de", "un", "une", "et", "être", "à", "il", "que", "les", "des", "est", "du",
    "en", "pour", "pas", "qui", "dans", "sur",
];

const GERMAN: &[&str] = &[
    "der", "die", "und", "in", "den", "von", "zu", "das", "ist", "nicht", "mit", "sich", "des",
    "auf", "für", "ein", "eine", "dem", "auch", "es",
];

const ITALIAN: &[&str] = &[
    "il", "di", "che", "e", "la", "per", "un", "una", "non", "sono", "della", "del", "gli", "le",
    "con", "si", "è", "anche", "nel", "questo",
];

const PORTUGUESE: &[&str] = &[
    "o", "a", "de", "que", "e", "do", "da", "em", "um", "uma", "para", "com", "não", "os", "as",
    "no", "na", "se", "mais", "por",
];

/// Function-word profile of one candidate language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageProfile {
    /// Language code reported on a match (e.g. "en")
    pub code: String,

    /// Common function words, lower-cased
    pub words: BTreeSet<String>,
}

impl LanguageProfile {
    /// Create a profile from a code and its function words.
    pub fn new<S: AsRef<str>>(code: impl Into<String>, words: impl IntoIterator<Item = S>) -> Self {
        Self {
            code: code.into(),
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// The built-in candidates: English, Spanish, French, German, Italian, Portuguese.
    pub fn builtin() -> Vec<Self> {
        vec![
            Self::new("en", ENGLISH),
            Self::new("es", SPANISH),
            Self::new("fr", FRENCH),
            Self::new("de", GERMAN),
            Self::new("it", ITALIAN),
            Self::new("pt", PORTUGUESE),
        ]
    }
}

/// Configuration shared by every analysis stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Terms never reported as keywords
    pub stop_words: BTreeSet<String>,

    /// Shortest term (in characters) that can be a keyword
    pub min_term_length: usize,

    /// Reading speed used for the reading-time estimate
    pub words_per_minute: f64,

    /// Maximum number of keywords reported
    pub max_keywords: usize,

    /// Maximum number of sentences in a summary
    pub max_summary_sentences: usize,

    /// Candidate languages for detection
    pub languages: Vec<LanguageProfile>,

    /// Fewer tokens than this yields "unknown"
    pub min_language_tokens: usize,

    /// Required lead of the best language score over the runner-up
    pub min_language_margin: f64,

    /// Run independent stages on the rayon pool
    pub parallel: bool,
}

impl AnalyzerConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stop-word set.
    pub fn with_stop_words<S: AsRef<str>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        self.stop_words = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        self
    }

    /// Set the minimum keyword length.
    pub fn with_min_term_length(mut self, len: usize) -> Self {
        self.min_term_length = len;
        self
    }

    /// Set the reading speed.
    pub fn with_words_per_minute(mut self, wpm: f64) -> Self {
        self.words_per_minute = wpm;
        self
    }

    /// Set the keyword limit.
    pub fn with_max_keywords(mut self, max: usize) -> Self {
        self.max_keywords = max;
        self
    }

    /// Set the summary length in sentences.
    pub fn with_max_summary_sentences(mut self, max: usize) -> Self {
        self.max_summary_sentences = max;
        self
    }

    /// Replace the candidate languages.
    pub fn with_language_profiles(mut self, profiles: Vec<LanguageProfile>) -> Self {
        self.languages = profiles;
        self
    }

    /// Set the language detection thresholds.
    pub fn with_language_thresholds(mut self, min_tokens: usize, min_margin: f64) -> Self {
        self.min_language_tokens = min_tokens;
        self.min_language_margin = min_margin;
        self
    }

    /// Enable or disable parallel stage execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Run all stages on the calling thread.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Parse a configuration from JSON; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can produce a meaningful report.
    pub fn validate(&self) -> Result<()> {
        if !(self.words_per_minute.is_finite() && self.words_per_minute > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "words_per_minute must be positive, got {}",
                self.words_per_minute
            )));
        }
        if !(self.min_language_margin.is_finite() && self.min_language_margin >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "min_language_margin must be non-negative, got {}",
                self.min_language_margin
            )));
        }
        if let Some(profile) = self.languages.iter().find(|p| p.code.trim().is_empty()) {
            return Err(Error::InvalidConfig(format!(
                "language profile with {} words has an empty code",
                profile.words.len()
            )));
        }
        Ok(())
    }

    /// Check whether a term is a stop word.
    pub fn is_stop_word(&self, term: &str) -> bool {
        self.stop_words.contains(term)
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            min_term_length: DEFAULT_MIN_TERM_LENGTH,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            max_keywords: DEFAULT_MAX_KEYWORDS,
            max_summary_sentences: DEFAULT_MAX_SUMMARY_SENTENCES,
            languages: LanguageProfile::builtin(),
            min_language_tokens: DEFAULT_MIN_LANGUAGE_TOKENS,
            min_language_margin: DEFAULT_MIN_LANGUAGE_MARGIN,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.min_term_length, 3);
        assert_eq!(config.words_per_minute, 200.0);
        assert_eq!(config.max_keywords, 20);
        assert_eq!(config.max_summary_sentences, 5);
        assert!(config.is_stop_word("the"));
        assert!(!config.is_stop_word("engine"));
        assert!(config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = AnalyzerConfig::new()
            .with_stop_words(["Foo", "bar"])
            .with_min_term_length(5)
            .with_max_keywords(3)
            .sequential();

        assert!(config.is_stop_word("foo"));
        assert!(!config.is_stop_word("the"));
        assert_eq!(config.min_term_length, 5);
        assert_eq!(config.max_keywords, 3);
        assert!(!config.parallel);
    }

    #[test]
    fn test_validate_rejects_zero_reading_speed() {
        let config = AnalyzerConfig::new().with_words_per_minute(0.0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_empty_language_code() {
        let config =
            AnalyzerConfig::new().with_language_profiles(vec![LanguageProfile::new(" ", ["x"])]);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_from_json_partial() {
        let config = AnalyzerConfig::from_json(r#"{"max_keywords": 5, "parallel": false}"#).unwrap();
        assert_eq!(config.max_keywords, 5);
        assert!(!config.parallel);
        assert_eq!(config.min_term_length, 3);
    }

    #[test]
    fn test_from_json_rejects_unknown_field() {
        let result = AnalyzerConfig::from_json(r#"{"max_keyword": 5}"#);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_builtin_profiles() {
        let profiles = LanguageProfile::builtin();
        let codes: Vec<_> = profiles.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["en", "es", "fr", "de", "it", "pt"]);
        assert!(profiles[0].words.contains("the"));
    }
}
