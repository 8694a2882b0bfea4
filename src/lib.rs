//! # docsight
//!
//! Deterministic document analysis for Rust.
//!
//! This library turns a document's text and structural elements into an
//! analysis report: statistics, ranked keywords, an extractive summary,
//! deduplicated links, the document language, its heading and list outline,
//! and its tables.
//!
//! ## Quick Start
//!
//! ```
//! use docsight::{analyze, AnalysisOptions, Document};
//!
//! let doc = Document::from_text(
//!     "Rust is a systems language. Visit https://www.rust-lang.org/ to learn more.",
//! );
//! let report = analyze(&doc, &AnalysisOptions::all());
//!
//! assert_eq!(report.statistics.word_count, 14);
//! assert_eq!(report.links[0].domain, "www.rust-lang.org");
//! ```
//!
//! ## Features
//!
//! - **Selective stages**: only the stages enabled in [`AnalysisOptions`] run
//! - **Deterministic output**: the same input always serializes identically
//! - **Structured sources**: plain text, serialized documents, Docs JSON
//! - **Parallel stages**: independent stages run on Rayon workers
//! - **Reports**: JSON and Markdown rendering

pub mod analysis;
pub mod detect;
pub mod error;
pub mod model;
pub mod render;
pub mod search;
pub mod source;

use std::sync::OnceLock;

// Re-export commonly used types
pub use analysis::{
    AnalysisOptions, AnalysisReport, Analyzer, AnalyzerConfig, Heading, Keyword, LanguageProfile,
    Link, ListEntry, Statistics, Structure, TableData,
};
pub use detect::{detect_format_from_bytes, is_supported, InputFormat};
pub use error::{Error, Result};
pub use model::{
    Document, Element, ListInfo, ListKind, NamedStyle, Paragraph, ParagraphStyle, Table,
    TableCell, TableRow, TextRun,
};
pub use render::JsonFormat;
pub use search::{search, SearchMatch};

/// Analyze a document with the default configuration.
///
/// Never fails; stages not enabled in `options` leave their report fields
/// empty.
pub fn analyze(doc: &Document, options: &AnalysisOptions) -> AnalysisReport {
    default_analyzer().analyze(doc, options)
}

/// The default-configured analyzer, built once per process.
fn default_analyzer() -> &'static Analyzer {
    static DEFAULT_ANALYZER: OnceLock<Analyzer> = OnceLock::new();
    DEFAULT_ANALYZER.get_or_init(Analyzer::default)
}

/// Analyze plain text that carries no structural elements.
pub fn analyze_text(text: &str, options: &AnalysisOptions) -> AnalysisReport {
    analyze(&Document::from_text(text), options)
}

/// Decode input bytes and analyze them.
///
/// # Example
///
/// ```
/// use docsight::{analyze_bytes, AnalysisOptions};
///
/// let report = analyze_bytes(br#"{"text": "One. Two."}"#, &AnalysisOptions::default())?;
/// assert_eq!(report.statistics.sentence_count, 2);
/// # Ok::<(), docsight::Error>(())
/// ```
pub fn analyze_bytes(data: &[u8], options: &AnalysisOptions) -> Result<AnalysisReport> {
    let doc = source::from_bytes(data)?;
    Ok(analyze(&doc, options))
}

/// Analyze a document on the blocking thread pool.
///
/// Useful from async services that must not run CPU-bound work on their
/// executor threads.
#[cfg(feature = "async")]
pub async fn analyze_async(
    analyzer: std::sync::Arc<Analyzer>,
    doc: Document,
    options: AnalysisOptions,
) -> Result<AnalysisReport> {
    tokio::task::spawn_blocking(move || analyzer.analyze(&doc, &options))
        .await
        .map_err(|e| Error::Other(format!("analysis task failed: {}", e)))
}

/// Builder for analyzing documents and rendering the results.
///
/// # Example
///
/// ```
/// use docsight::{AnalysisOptions, Docsight};
///
/// let markdown = Docsight::new()
///     .with_options(AnalysisOptions::all())
///     .with_max_keywords(5)
///     .analyze_bytes(b"Ownership makes Rust safe. Ownership is checked early.")?
///     .to_markdown();
/// assert!(markdown.contains("## Keywords"));
/// # Ok::<(), docsight::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Docsight {
    config: AnalyzerConfig,
    options: AnalysisOptions,
}

impl Docsight {
    /// Create a builder with default configuration and options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the analyzer configuration.
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set which stages run.
    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    /// Enable every stage.
    pub fn all(mut self) -> Self {
        self.options = AnalysisOptions::all();
        self
    }

    /// Limit the number of keywords.
    pub fn with_max_keywords(mut self, max: usize) -> Self {
        self.config = self.config.with_max_keywords(max);
        self
    }

    /// Limit the number of summary sentences.
    pub fn with_max_summary_sentences(mut self, max: usize) -> Self {
        self.config = self.config.with_max_summary_sentences(max);
        self
    }

    /// Run stages one after another.
    pub fn sequential(mut self) -> Self {
        self.config = self.config.sequential();
        self
    }

    /// Analyze a document.
    pub fn analyze(self, document: Document) -> Result<DocsightResult> {
        let analyzer = Analyzer::new(self.config)?;
        let report = analyzer.analyze(&document, &self.options);
        Ok(DocsightResult { document, report })
    }

    /// Decode input bytes and analyze them.
    pub fn analyze_bytes(self, data: &[u8]) -> Result<DocsightResult> {
        let document = source::from_bytes(data)?;
        self.analyze(document)
    }
}

/// A document together with its analysis.
#[derive(Debug, Clone)]
pub struct DocsightResult {
    /// The analyzed document
    pub document: Document,
    /// The analysis report
    pub report: AnalysisReport,
}

impl DocsightResult {
    /// Render the report as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.report, format)
    }

    /// Render the report as Markdown, titled after the document.
    pub fn to_markdown(&self) -> String {
        let mut renderer = render::MarkdownRenderer::new();
        if let Some(title) = &self.document.title {
            renderer = renderer.with_title(title.clone());
        }
        renderer.render(&self.report)
    }

    /// Search the document text.
    pub fn search(&self, query: &str) -> Vec<SearchMatch> {
        search::search(&self.document.text, query)
    }

    /// Get the report.
    pub fn report(&self) -> &AnalysisReport {
        &self.report
    }
}
