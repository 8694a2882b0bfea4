//! Document-level types.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A document ready for analysis.
///
/// Owned by the caller; the engine only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document title, if the source provided one
    #[serde(default)]
    pub title: Option<String>,

    /// Full plain-text content
    pub text: String,

    /// Ordered structural elements (empty when structure is unavailable)
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from plain text with no structural elements.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            title: None,
            text: text.into(),
            elements: Vec::new(),
        }
    }

    /// Create a document from structural elements, deriving its text.
    ///
    /// Each element contributes its plain text; elements are separated by a
    /// blank line.
    pub fn from_elements(elements: Vec<Element>) -> Self {
        let text = elements
            .iter()
            .map(Element::plain_text)
            .filter(|t| !t.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");
        Self {
            title: None,
            text,
            elements,
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the structural elements, keeping the text as is.
    pub fn with_elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = elements;
        self
    }

    /// Add a structural element.
    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Check if the document has no text and no elements.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.elements.is_empty()
    }

    /// Check if structural information is available.
    pub fn has_structure(&self) -> bool {
        !self.elements.is_empty()
    }

    /// Iterate over the paragraph elements.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.elements.iter().filter_map(|e| match e {
            Element::Paragraph(p) => Some(p),
            Element::Table(_) => None,
        })
    }

    /// Iterate over the table elements.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.elements.iter().filter_map(|e| match e {
            Element::Table(t) => Some(t),
            Element::Paragraph(_) => None,
        })
    }
}

/// A typed structural element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A paragraph, heading or list item (distinguished by its style)
    Paragraph(Paragraph),

    /// A table
    Table(Table),
}

impl Element {
    /// Get plain text content of the element.
    pub fn plain_text(&self) -> String {
        match self {
            Element::Paragraph(p) => p.plain_text(),
            Element::Table(t) => t.plain_text(),
        }
    }
}

impl From<Paragraph> for Element {
    fn from(p: Paragraph) -> Self {
        Element::Paragraph(p)
    }
}

impl From<Table> for Element {
    fn from(t: Table) -> Self {
        Element::Table(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListInfo;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert!(!doc.has_structure());
    }

    #[test]
    fn test_from_elements_derives_text() {
        let doc = Document::from_elements(vec![
            Paragraph::heading("Intro", 1).into(),
            Paragraph::with_text("").into(),
            Paragraph::list_item("first item", ListInfo::bullet(0)).into(),
            Table::from_rows(vec![vec!["a", "b"]]).into(),
        ]);

        assert_eq!(doc.text, "Intro\n\nfirst item\n\na\tb");
        assert_eq!(doc.paragraphs().count(), 3);
        assert_eq!(doc.tables().count(), 1);
    }

    #[test]
    fn test_element_serde_tag() {
        let element: Element = Paragraph::heading("Hi", 2).into();
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "paragraph");
        assert_eq!(json["style"]["named_style"], "HEADING_2");

        let back: Element = serde_json::from_value(json).unwrap();
        assert_eq!(back, element);
    }

    #[test]
    fn test_document_deserialize_without_elements() {
        let doc: Document = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(doc.text, "hello");
        assert!(doc.elements.is_empty());
        assert!(doc.title.is_none());
    }
}
