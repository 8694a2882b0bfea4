//! Document statistics.

use super::normalizer::NormalizedText;
use crate::model::{Document, Element};
use serde::{Deserialize, Serialize};

/// Counts and derived metrics for a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Total tokens across all sentences
    pub word_count: usize,

    /// Characters in the raw text
    pub character_count: usize,

    /// Characters in the raw text, excluding whitespace
    pub character_count_no_spaces: usize,

    /// Number of sentences
    pub sentence_count: usize,

    /// Number of paragraphs
    pub paragraph_count: usize,

    /// Number of lines in the raw text
    pub line_count: usize,

    /// Mean token length in characters (2 decimals)
    pub average_word_length: f64,

    /// Mean tokens per sentence (2 decimals)
    pub average_sentence_length: f64,

    /// Estimated reading time in minutes (1 decimal)
    pub reading_time: f64,
}

/// Compute statistics from the document and its normalized text.
pub fn collect(doc: &Document, text: &NormalizedText<'_>, words_per_minute: f64) -> Statistics {
    let word_count = text.token_count();
    let sentence_count = text.sentence_count();
    let token_chars: usize = text.tokens().map(|t| t.chars().count()).sum();

    Statistics {
        word_count,
        character_count: doc.text.chars().count(),
        character_count_no_spaces: doc.text.chars().filter(|c| !c.is_whitespace()).count(),
        sentence_count,
        paragraph_count: paragraph_count(doc, text),
        line_count: doc.text.lines().count(),
        average_word_length: ratio(token_chars, word_count, 2),
        average_sentence_length: ratio(word_count, sentence_count, 2),
        reading_time: reading_time(word_count, words_per_minute),
    }
}

/// Reading time in minutes, rounded to one decimal.
pub fn reading_time(word_count: usize, words_per_minute: f64) -> f64 {
    round_to(word_count as f64 / words_per_minute, 1)
}

/// Plain paragraphs among the structural elements.
///
/// Without structural elements, counts the blank-line separated blocks of
/// the text that hold at least one sentence.
fn paragraph_count(doc: &Document, text: &NormalizedText<'_>) -> usize {
    if doc.has_structure() {
        return doc
            .elements
            .iter()
            .filter(|e| match e {
                Element::Paragraph(p) => !p.is_heading() && !p.is_list_item() && !p.is_empty(),
                Element::Table(_) => false,
            })
            .count();
    }

    if text.is_empty() {
        return 0;
    }
    let mut blocks = 0;
    let mut in_block = false;
    for line in doc.text.lines() {
        if line.trim().is_empty() {
            in_block = false;
        } else if !in_block {
            in_block = true;
            if line.chars().any(char::is_alphanumeric) {
                blocks += 1;
            } else {
                in_block = false;
            }
        }
    }
    blocks.max(1)
}

fn ratio(numerator: usize, denominator: usize, decimals: i32) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    round_to(numerator as f64 / denominator as f64, decimals)
}

/// Round to `decimals` places, ties to even.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::TextNormalizer;
    use crate::model::{ListInfo, Paragraph, Table};

    fn stats_for(doc: &Document) -> Statistics {
        let normalizer = TextNormalizer::new();
        let text = normalizer.normalize(&doc.text);
        collect(doc, &text, 200.0)
    }

    #[test]
    fn test_empty_document() {
        let stats = stats_for(&Document::new());
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn test_basic_counts() {
        let doc = Document::from_text("Hello world. This is a test.\nSecond line here!");
        let stats = stats_for(&doc);

        assert_eq!(stats.word_count, 9);
        assert_eq!(stats.sentence_count, 3);
        assert_eq!(stats.character_count, 46);
        assert_eq!(stats.character_count_no_spaces, 38);
        assert_eq!(stats.line_count, 2);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.average_sentence_length, 3.0);
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time(0, 200.0), 0.0);
        assert_eq!(reading_time(200, 200.0), 1.0);
        assert_eq!(reading_time(1234, 200.0), 6.2);
    }

    #[test]
    fn test_reading_time_ties_round_to_even() {
        assert_eq!(reading_time(50, 200.0), 0.2);
        assert_eq!(reading_time(150, 200.0), 0.8);
        assert_eq!(reading_time(250, 200.0), 1.2);
        assert_eq!(reading_time(450, 200.0), 2.2);
    }

    #[test]
    fn test_average_ties_round_to_even() {
        // 1 / 8 = 0.125 lands exactly on a tie at two decimals
        assert_eq!(ratio(1, 8, 2), 0.12);
        assert_eq!(ratio(3, 8, 2), 0.38);
    }

    #[test]
    fn test_paragraphs_from_blank_lines() {
        let doc = Document::from_text("First block.\nStill first.\n\n\nSecond block.\n\n--\n\nThird.");
        let stats = stats_for(&doc);
        assert_eq!(stats.paragraph_count, 3);
    }

    #[test]
    fn test_paragraphs_from_elements() {
        let doc = Document::from_elements(vec![
            Paragraph::heading("Title", 1).into(),
            Paragraph::normal("Body text.").into(),
            Paragraph::with_text("Untyped text.").into(),
            Paragraph::with_text("   ").into(),
            Paragraph::list_item("item", ListInfo::bullet(0)).into(),
            Table::from_rows(vec![vec!["a"]]).into(),
        ]);
        let stats = stats_for(&doc);
        assert_eq!(stats.paragraph_count, 2);
    }

    #[test]
    fn test_average_word_length() {
        let doc = Document::from_text("ab abcd");
        let stats = stats_for(&doc);
        assert_eq!(stats.average_word_length, 3.0);
    }
}
