//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A paragraph of text content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<TextRun>,

    /// Paragraph style
    #[serde(default)]
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with plain text and no structural typing.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Create a paragraph with the normal text style.
    pub fn normal(text: impl Into<String>) -> Self {
        let mut p = Self::with_text(text);
        p.style.named_style = Some(NamedStyle::NormalText);
        p
    }

    /// Create a heading paragraph.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        let mut p = Self::with_text(text);
        p.style.named_style = Some(NamedStyle::Heading(level.clamp(1, 6)));
        p
    }

    /// Create a list item paragraph.
    pub fn list_item(text: impl Into<String>, info: ListInfo) -> Self {
        let mut p = Self::with_text(text);
        p.style.list_info = Some(info);
        p
    }

    /// Add plain text to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.runs.push(TextRun::new(text));
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.trim().is_empty())
    }

    /// Get the heading level declared by the paragraph's named style.
    pub fn heading_level(&self) -> Option<u8> {
        self.style.named_style.and_then(|s| s.heading_level())
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        self.style.list_info.is_some()
    }
}

/// A run of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,
}

impl TextRun {
    /// Create a new text run.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Paragraph styling properties that carry structural meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Declared named style, or None when the source carried no typing
    pub named_style: Option<NamedStyle>,

    /// List information if this is a list item
    pub list_info: Option<ListInfo>,
}

/// Named paragraph style, as declared by the document source.
///
/// Serialized in the source's spelling: `NORMAL_TEXT`, `TITLE`, `SUBTITLE`,
/// `HEADING_1` .. `HEADING_6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NamedStyle {
    /// Body text
    NormalText,
    /// Document title
    Title,
    /// Document subtitle
    Subtitle,
    /// Heading with level 1-6
    Heading(u8),
}

impl NamedStyle {
    /// Heading level implied by the style.
    ///
    /// `TITLE` ranks as level 1 and `SUBTITLE` as level 2.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            NamedStyle::NormalText => None,
            NamedStyle::Title => Some(1),
            NamedStyle::Subtitle => Some(2),
            NamedStyle::Heading(level) => Some(level),
        }
    }
}

impl FromStr for NamedStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NORMAL_TEXT" => Ok(NamedStyle::NormalText),
            "TITLE" => Ok(NamedStyle::Title),
            "SUBTITLE" => Ok(NamedStyle::Subtitle),
            _ => s
                .strip_prefix("HEADING_")
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|n| (1..=6).contains(n))
                .map(NamedStyle::Heading)
                .ok_or_else(|| format!("unknown named style `{}`", s)),
        }
    }
}

impl TryFrom<String> for NamedStyle {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NamedStyle> for String {
    fn from(style: NamedStyle) -> Self {
        style.to_string()
    }
}

impl fmt::Display for NamedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamedStyle::NormalText => f.write_str("NORMAL_TEXT"),
            NamedStyle::Title => f.write_str("TITLE"),
            NamedStyle::Subtitle => f.write_str("SUBTITLE"),
            NamedStyle::Heading(level) => write!(f, "HEADING_{}", level),
        }
    }
}

/// Information about a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListInfo {
    /// Ordered or unordered list
    pub kind: ListKind,

    /// Nesting level (0 = top level)
    pub level: u8,
}

impl ListInfo {
    /// Create a new bulleted list item.
    pub fn bullet(level: u8) -> Self {
        Self {
            kind: ListKind::Unordered,
            level,
        }
    }

    /// Create a new numbered list item.
    pub fn numbered(level: u8) -> Self {
        Self {
            kind: ListKind::Ordered,
            level,
        }
    }
}

/// List kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Numbered or lettered list
    Ordered,
    /// Bulleted list
    #[default]
    Unordered,
}
