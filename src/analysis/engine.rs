//! The analysis engine: runs the enabled stages and merges their results.

use super::config::AnalyzerConfig;
use super::keywords::{self, TermScores};
use super::language::{self, UNKNOWN_LANGUAGE};
use super::links;
use super::normalizer::{NormalizedText, TextNormalizer};
use super::options::AnalysisOptions;
use super::report::AnalysisReport;
use super::statistics;
use super::structure;
use super::summary;
use super::tables;
use crate::error::Result;
use crate::model::Document;
use std::time::Instant;

/// Document analyzer.
///
/// Holds only immutable configuration, so one analyzer can serve any number
/// of concurrent calls.
///
/// # Example
///
/// ```
/// use docsight::{AnalysisOptions, Analyzer, AnalyzerConfig, Document};
///
/// let analyzer = Analyzer::new(AnalyzerConfig::new().with_max_keywords(5))?;
/// let doc = Document::from_text("Rust makes systems programming approachable.");
/// let report = analyzer.analyze(&doc, &AnalysisOptions::all());
/// assert!(report.keywords.len() <= 5);
/// # Ok::<(), docsight::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    normalizer: TextNormalizer,
}

impl Analyzer {
    /// Create an analyzer from a validated configuration.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            normalizer: TextNormalizer::new(),
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Normalize a text with this analyzer's tokenizer.
    pub fn normalize<'a>(&self, text: &'a str) -> NormalizedText<'a> {
        self.normalizer.normalize(text)
    }

    /// Analyze a document.
    ///
    /// Never fails: sparse or malformed structure degrades the affected
    /// fields to their empty values.
    pub fn analyze(&self, doc: &Document, options: &AnalysisOptions) -> AnalysisReport {
        let started = Instant::now();
        let config = &self.config;
        let parallel = config.parallel;
        let text = self.normalizer.normalize(&doc.text);

        let scores = if options.extract_keywords || options.summarize {
            TermScores::build(&text, config)
        } else {
            TermScores::default()
        };

        let ((statistics, (keywords, summary)), ((links, language), (structure, tables))) = join(
            parallel,
            || {
                join(
                    parallel,
                    || {
                        options
                            .word_count
                            .then(|| statistics::collect(doc, &text, config.words_per_minute))
                            .unwrap_or_default()
                    },
                    || {
                        join(
                            parallel,
                            || {
                                options
                                    .extract_keywords
                                    .then(|| keywords::extract(&scores, config))
                                    .unwrap_or_default()
                            },
                            || {
                                options
                                    .summarize
                                    .then(|| {
                                        summary::generate(
                                            &text,
                                            &scores,
                                            config.max_summary_sentences,
                                        )
                                    })
                                    .unwrap_or_default()
                            },
                        )
                    },
                )
            },
            || {
                join(
                    parallel,
                    || {
                        join(
                            parallel,
                            || {
                                options
                                    .extract_links
                                    .then(|| links::extract(&doc.text))
                                    .unwrap_or_default()
                            },
                            || {
                                options
                                    .detect_language
                                    .then(|| language::detect(&text, config))
                                    .unwrap_or_default()
                            },
                        )
                    },
                    || {
                        join(
                            parallel,
                            || structure::parse(&doc.elements),
                            || {
                                options
                                    .extract_tables
                                    .then(|| tables::extract(&doc.elements))
                                    .unwrap_or_default()
                            },
                        )
                    },
                )
            },
        );

        log::debug!(
            "analyzed {} sentences, {} tokens, {} elements in {:?} (stages: {})",
            text.sentence_count(),
            text.token_count(),
            doc.elements.len(),
            started.elapsed(),
            options.enabled_names().join(",")
        );
        if options.detect_language && language == UNKNOWN_LANGUAGE {
            log::debug!("language could not be determined");
        }

        AnalysisReport {
            statistics,
            keywords,
            summary,
            links,
            language,
            structure,
            tables,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            normalizer: TextNormalizer::new(),
        }
    }
}

/// Run two stages, on the rayon pool when `parallel` is set.
fn join<A, B, RA, RB>(parallel: bool, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    if parallel {
        rayon::join(a, b)
    } else {
        (a(), b())
    }
}
