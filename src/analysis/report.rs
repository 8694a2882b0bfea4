//! The aggregate analysis report.

use super::keywords::Keyword;
use super::links::Link;
use super::statistics::Statistics;
use super::structure::Structure;
use super::tables::TableData;
use serde::{Deserialize, Serialize};

/// Everything an analysis produced.
///
/// Every field is always present. Fields of stages that were not requested
/// hold their empty value: zeroed statistics, no keywords, an empty summary,
/// no links, an empty language code, and no tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Counts and reading time
    pub statistics: Statistics,

    /// Ranked keywords
    pub keywords: Vec<Keyword>,

    /// Extractive summary
    pub summary: String,

    /// Deduplicated links
    pub links: Vec<Link>,

    /// Detected language code, "unknown", or empty when not requested
    pub language: String,

    /// Headings and list items
    pub structure: Structure,

    /// Parsed tables
    pub tables: Vec<TableData>,
}

impl AnalysisReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the report carries no findings at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Number of sentences in the summary.
    pub fn summary_sentence_count(&self) -> usize {
        crate::analysis::normalizer::split_sentences(&self.summary).len()
    }
}
