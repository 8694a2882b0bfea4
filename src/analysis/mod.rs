//! Document analysis engine.
//!
//! The text is normalized once; every enabled stage then works from that
//! shared normalized form (structure and tables from the element list) and
//! the results are merged into one [`AnalysisReport`]. Stages never read
//! each other's results.

mod config;
mod engine;
pub mod keywords;
pub mod language;
pub mod links;
pub mod normalizer;
mod options;
mod report;
pub mod statistics;
pub mod structure;
pub mod summary;
pub mod tables;

pub use config::{
    AnalyzerConfig, LanguageProfile, DEFAULT_MAX_KEYWORDS, DEFAULT_MAX_SUMMARY_SENTENCES,
    DEFAULT_MIN_LANGUAGE_MARGIN, DEFAULT_MIN_LANGUAGE_TOKENS, DEFAULT_MIN_TERM_LENGTH,
    DEFAULT_WORDS_PER_MINUTE,
};
pub use engine::Analyzer;
pub use keywords::{Keyword, TermScores};
pub use language::UNKNOWN_LANGUAGE;
pub use links::Link;
pub use normalizer::{NormalizedText, Sentence, TextNormalizer};
pub use options::{AnalysisOptions, OPTION_NAMES};
pub use report::AnalysisReport;
pub use statistics::Statistics;
pub use structure::{Heading, ListEntry, Structure};
pub use tables::TableData;
