//! Analysis options: which stages to run.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Option names accepted by [`AnalysisOptions::from_names`].
pub const OPTION_NAMES: [&str; 6] = [
    "wordCount",
    "extractKeywords",
    "summarize",
    "extractLinks",
    "detectLanguage",
    "extractTables",
];

/// Stage selection for a single analysis call.
///
/// Every recognized option is a named field; deserialization rejects any
/// other key with [`Error::InvalidOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct AnalysisOptions {
    /// Compute document statistics
    pub word_count: bool,

    /// Rank keywords
    pub extract_keywords: bool,

    /// Build an extractive summary
    pub summarize: bool,

    /// Extract and deduplicate links
    pub extract_links: bool,

    /// Identify the document language
    pub detect_language: bool,

    /// Parse table elements
    pub extract_tables: bool,
}

impl AnalysisOptions {
    /// Create options with defaults (statistics only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with no stage enabled.
    pub fn none() -> Self {
        Self {
            word_count: false,
            extract_keywords: false,
            summarize: false,
            extract_links: false,
            detect_language: false,
            extract_tables: false,
        }
    }

    /// Options with every stage enabled.
    pub fn all() -> Self {
        Self {
            word_count: true,
            extract_keywords: true,
            summarize: true,
            extract_links: true,
            detect_language: true,
            extract_tables: true,
        }
    }

    /// Parse options from a JSON object such as `{"summarize": true}`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidOptions(e.to_string()))
    }

    /// Build options from a list of enabled option names.
    ///
    /// Starts from [`AnalysisOptions::none`]; an unrecognized name fails
    /// rather than being ignored.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::none();
        for name in names {
            options.enable(name.as_ref())?;
        }
        Ok(options)
    }

    /// Enable a single option by name.
    pub fn enable(&mut self, name: &str) -> Result<()> {
        let flag = match name {
            "wordCount" => &mut self.word_count,
            "extractKeywords" => &mut self.extract_keywords,
            "summarize" => &mut self.summarize,
            "extractLinks" => &mut self.extract_links,
            "detectLanguage" => &mut self.detect_language,
            "extractTables" => &mut self.extract_tables,
            other => {
                return Err(Error::InvalidOptions(format!(
                    "unknown option `{}` (expected one of: {})",
                    other,
                    OPTION_NAMES.join(", ")
                )))
            }
        };
        *flag = true;
        Ok(())
    }

    /// Enable or disable statistics.
    pub fn with_word_count(mut self, enabled: bool) -> Self {
        self.word_count = enabled;
        self
    }

    /// Enable or disable keyword extraction.
    pub fn with_keywords(mut self, enabled: bool) -> Self {
        self.extract_keywords = enabled;
        self
    }

    /// Enable or disable summarization.
    pub fn with_summary(mut self, enabled: bool) -> Self {
        self.summarize = enabled;
        self
    }

    /// Enable or disable link extraction.
    pub fn with_links(mut self, enabled: bool) -> Self {
        self.extract_links = enabled;
        self
    }

    /// Enable or disable language detection.
    pub fn with_language(mut self, enabled: bool) -> Self {
        self.detect_language = enabled;
        self
    }

    /// Enable or disable table extraction.
    pub fn with_tables(mut self, enabled: bool) -> Self {
        self.extract_tables = enabled;
        self
    }

    /// Names of the enabled options, in canonical order.
    pub fn enabled_names(&self) -> Vec<&'static str> {
        let flags = [
            self.word_count,
            self.extract_keywords,
            self.summarize,
            self.extract_links,
            self.detect_language,
            self.extract_tables,
        ];
        OPTION_NAMES
            .iter()
            .zip(flags)
            .filter(|(_, on)| *on)
            .map(|(name, _)| *name)
            .collect()
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            word_count: true,
            ..Self::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = AnalysisOptions::default();
        assert!(options.word_count);
        assert!(!options.extract_keywords);
        assert!(!options.summarize);
        assert!(!options.extract_tables);
    }

    #[test]
    fn test_options_builder() {
        let options = AnalysisOptions::none()
            .with_keywords(true)
            .with_links(true);

        assert!(!options.word_count);
        assert!(options.extract_keywords);
        assert!(options.extract_links);
        assert_eq!(options.enabled_names(), vec!["extractKeywords", "extractLinks"]);
    }

    #[test]
    fn test_from_json() {
        let options =
            AnalysisOptions::from_json(r#"{"summarize": true, "detectLanguage": true}"#).unwrap();
        assert!(options.summarize);
        assert!(options.detect_language);
        // Missing keys fall back to the defaults
        assert!(options.word_count);
    }

    #[test]
    fn test_from_json_rejects_unknown_key() {
        let result = AnalysisOptions::from_json(r#"{"summarize": true, "translate": true}"#);
        assert!(matches!(result, Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_from_json_rejects_wrong_type() {
        let result = AnalysisOptions::from_json(r#"{"summarize": "yes"}"#);
        assert!(matches!(result, Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_from_names() {
        let options = AnalysisOptions::from_names(["wordCount", "extractTables"]).unwrap();
        assert!(options.word_count);
        assert!(options.extract_tables);
        assert!(!options.summarize);

        let err = AnalysisOptions::from_names(["wordcount"]).unwrap_err();
        assert!(err.to_string().contains("unknown option `wordcount`"));
    }

    #[test]
    fn test_all_names_round_trip() {
        let options = AnalysisOptions::from_names(OPTION_NAMES).unwrap();
        assert_eq!(options, AnalysisOptions::all());
    }
}
