//! Error types for docsight library.
//!
//! Analysis itself is total: every [`Document`](crate::Document) yields a
//! report. These errors only surface at the boundaries, when decoding input,
//! validating options and configuration, or serializing a report.

use std::io;
use thiserror::Error;

/// Result type alias for docsight operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around document analysis.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An analysis option outside the recognized flag set, or a malformed options value.
    #[error("Invalid analysis options: {0}")]
    InvalidOptions(String),

    /// Analyzer configuration that cannot produce a meaningful report.
    #[error("Invalid analyzer configuration: {0}")]
    InvalidConfig(String),

    /// Input bytes are not valid UTF-8 text.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The input is neither plain text nor a recognized document structure.
    #[error("Unknown input format")]
    UnknownFormat,

    /// A structured document source could not be decoded.
    #[error("Document source error: {0}")]
    Source(String),

    /// Error during rendering (JSON, Markdown).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Source(err.to_string())
    }
}
