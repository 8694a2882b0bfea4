//! Document model types for analysis input.
//!
//! This module defines the representation the analysis engine reads: the
//! document's plain text plus an ordered list of typed structural elements.
//! The model is source-agnostic; [`crate::source`] builds it from raw text or
//! from a Docs-style JSON structure.

mod document;
mod paragraph;
mod table;

pub use document::{Document, Element};
pub use paragraph::{ListInfo, ListKind, NamedStyle, Paragraph, ParagraphStyle, TextRun};
pub use table::{Table, TableCell, TableRow};
