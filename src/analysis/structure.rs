//! Heading and list classification of structural elements.

use crate::model::{Element, ListKind, Paragraph};
use serde::{Deserialize, Serialize};

/// A heading found among the structural elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading text, trimmed
    pub text: String,

    /// Heading level (1-6)
    pub level: u8,

    /// Index of the element in the document
    pub position: usize,
}

/// A list item found among the structural elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    /// Item text, trimmed
    pub text: String,

    /// Nesting depth (0 = top level)
    pub depth: u8,

    /// Ordered or unordered
    pub kind: ListKind,

    /// Index of the element in the document
    pub position: usize,
}

/// Headings and list items in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Structure {
    /// Headings in document order
    pub headings: Vec<Heading>,

    /// List items in document order
    pub lists: Vec<ListEntry>,

    /// Whether any heading or list item was found
    pub has_structure: bool,
}

/// How a single paragraph participates in the document structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphRole {
    /// Heading at the given level
    Heading(u8),
    /// List item at the given depth
    ListItem(u8, ListKind),
    /// Plain paragraph, including untyped ones
    Plain,
}

/// Classify a paragraph by its declared style.
///
/// A heading style wins over list membership.
pub fn classify(paragraph: &Paragraph) -> ParagraphRole {
    if let Some(level) = paragraph.heading_level() {
        return ParagraphRole::Heading(level);
    }
    match paragraph.style.list_info {
        Some(info) => ParagraphRole::ListItem(info.level, info.kind),
        None => ParagraphRole::Plain,
    }
}

/// Walk the elements and collect headings and list items.
///
/// Tables, plain paragraphs and blank paragraphs are skipped.
pub fn parse(elements: &[Element]) -> Structure {
    let mut structure = Structure::default();

    for (position, element) in elements.iter().enumerate() {
        let Element::Paragraph(paragraph) = element else {
            continue;
        };
        if paragraph.is_empty() {
            continue;
        }
        let text = paragraph.plain_text().trim().to_string();
        match classify(paragraph) {
            ParagraphRole::Heading(level) => structure.headings.push(Heading {
                text,
                level,
                position,
            }),
            ParagraphRole::ListItem(depth, kind) => structure.lists.push(ListEntry {
                text,
                depth,
                kind,
                position,
            }),
            ParagraphRole::Plain => {}
        }
    }

    structure.has_structure = !structure.headings.is_empty() || !structure.lists.is_empty();
    structure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListInfo, NamedStyle, Table};

    #[test]
    fn test_empty_elements() {
        let structure = parse(&[]);
        assert!(structure.headings.is_empty());
        assert!(structure.lists.is_empty());
        assert!(!structure.has_structure);
    }

    #[test]
    fn test_headings_and_lists_in_order() {
        let elements: Vec<Element> = vec![
            Paragraph::heading("Overview\n", 1).into(),
            Paragraph::normal("Intro text.").into(),
            Paragraph::list_item("first", ListInfo::bullet(0)).into(),
            Paragraph::list_item("nested", ListInfo::numbered(1)).into(),
            Table::from_rows(vec![vec!["x"]]).into(),
            Paragraph::heading("Details", 2).into(),
        ];
        let structure = parse(&elements);

        assert_eq!(
            structure.headings,
            vec![
                Heading {
                    text: "Overview".to_string(),
                    level: 1,
                    position: 0
                },
                Heading {
                    text: "Details".to_string(),
                    level: 2,
                    position: 5
                },
            ]
        );
        assert_eq!(structure.lists.len(), 2);
        assert_eq!(structure.lists[1].depth, 1);
        assert_eq!(structure.lists[1].kind, ListKind::Ordered);
        assert_eq!(structure.lists[1].position, 3);
        assert!(structure.has_structure);
    }

    #[test]
    fn test_untyped_and_blank_paragraphs_excluded() {
        let elements: Vec<Element> = vec![
            Paragraph::with_text("no style").into(),
            Paragraph::heading("   ", 1).into(),
        ];
        let structure = parse(&elements);
        assert!(!structure.has_structure);
    }

    #[test]
    fn test_title_and_subtitle_levels() {
        let mut title = Paragraph::with_text("Doc");
        title.style.named_style = Some(NamedStyle::Title);
        let mut subtitle = Paragraph::with_text("Sub");
        subtitle.style.named_style = Some(NamedStyle::Subtitle);

        let structure = parse(&[title.into(), subtitle.into()]);
        let levels: Vec<_> = structure.headings.iter().map(|h| h.level).collect();
        assert_eq!(levels, vec![1, 2]);
    }

    #[test]
    fn test_heading_wins_over_list() {
        let mut p = Paragraph::heading("Both", 3);
        p.style.list_info = Some(ListInfo::bullet(0));
        assert_eq!(classify(&p), ParagraphRole::Heading(3));
    }
}
