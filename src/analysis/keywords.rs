//! Frequency-based keyword ranking.

use super::config::AnalyzerConfig;
use super::normalizer::NormalizedText;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A ranked keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    /// Normalized (lower-cased) term
    pub term: String,

    /// Occurrences in the document
    pub frequency: usize,

    /// `frequency * ln(1 + document_length / term_length)`
    pub relevance_score: f64,
}

/// Relevance scores for every qualifying term of a document.
///
/// Built once per analysis and shared by keyword ranking and
/// summarization. Backed by an ordered map so iteration never depends on
/// hashing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermScores {
    terms: BTreeMap<String, (usize, f64)>,
}

impl TermScores {
    /// Score the qualifying terms of the normalized text.
    ///
    /// Stop words and terms shorter than the configured minimum are skipped.
    pub fn build(text: &NormalizedText<'_>, config: &AnalyzerConfig) -> Self {
        let mut frequencies: BTreeMap<String, usize> = BTreeMap::new();
        for token in text.tokens() {
            if token.chars().count() < config.min_term_length || config.is_stop_word(token) {
                continue;
            }
            *frequencies.entry(token.to_string()).or_default() += 1;
        }

        let document_length = text.token_count() as f64;
        let terms = frequencies
            .into_iter()
            .map(|(term, frequency)| {
                let score = relevance(frequency, document_length, term.chars().count());
                (term, (frequency, score))
            })
            .collect();

        Self { terms }
    }

    /// Score of a term, or 0 for stop words and unknown terms.
    pub fn score(&self, term: &str) -> f64 {
        self.terms.get(term).map_or(0.0, |(_, score)| *score)
    }

    /// Number of distinct qualifying terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if no term qualified.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The top `limit` keywords, by descending score then ascending term.
    pub fn top(&self, limit: usize) -> Vec<Keyword> {
        let mut keywords: Vec<Keyword> = self
            .terms
            .iter()
            .map(|(term, (frequency, score))| Keyword {
                term: term.clone(),
                frequency: *frequency,
                relevance_score: *score,
            })
            .collect();

        keywords.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.term.cmp(&b.term))
        });
        keywords.truncate(limit);
        keywords
    }
}

/// Rank the document's keywords.
pub fn extract(scores: &TermScores, config: &AnalyzerConfig) -> Vec<Keyword> {
    scores.top(config.max_keywords)
}

fn relevance(frequency: usize, document_length: f64, term_length: usize) -> f64 {
    frequency as f64 * (1.0 + document_length / term_length as f64).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::TextNormalizer;

    fn scores_for(text: &str, config: &AnalyzerConfig) -> TermScores {
        let normalizer = TextNormalizer::new();
        TermScores::build(&normalizer.normalize(text), config)
    }

    #[test]
    fn test_stop_words_and_short_terms_excluded() {
        let config = AnalyzerConfig::default();
        let scores = scores_for("The cat and the dog are in a big house.", &config);

        assert_eq!(scores.score("the"), 0.0);
        assert_eq!(scores.score("in"), 0.0);
        assert!(scores.score("cat") > 0.0);
        assert!(scores.score("house") > 0.0);
        // "big" has 3 characters and qualifies
        assert!(scores.score("big") > 0.0);
        assert_eq!(scores.len(), 4);
    }

    #[test]
    fn test_relevance_formula() {
        let config = AnalyzerConfig::default();
        let scores = scores_for("engine engine rust", &config);
        let keywords = scores.top(20);

        // document length 3, "engine" has 6 characters and appears twice
        let expected = 2.0 * (1.0 + 3.0 / 6.0f64).ln();
        assert_eq!(keywords[0].term, "engine");
        assert_eq!(keywords[0].frequency, 2);
        assert!((keywords[0].relevance_score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_ties_broken_alphabetically() {
        let config = AnalyzerConfig::default();
        let scores = scores_for("zeta beta alfa", &config);
        let terms: Vec<_> = scores.top(20).into_iter().map(|k| k.term).collect();
        assert_eq!(terms, vec!["alfa", "beta", "zeta"]);
    }

    #[test]
    fn test_truncated_to_limit() {
        let config = AnalyzerConfig::default();
        let text: String = (0..30)
            .map(|i| format!("term{:02}", i))
            .collect::<Vec<_>>()
            .join(" ");
        let keywords = extract(&scores_for(&text, &config), &config);
        assert_eq!(keywords.len(), 20);
        for pair in keywords.windows(2) {
            assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
    }

    #[test]
    fn test_custom_stop_words() {
        let config = AnalyzerConfig::new().with_stop_words(["rust"]);
        let scores = scores_for("rust the engine", &config);
        assert_eq!(scores.score("rust"), 0.0);
        // "the" is no longer a stop word with the replaced set
        assert!(scores.score("the") > 0.0);
    }

    #[test]
    fn test_empty_text() {
        let config = AnalyzerConfig::default();
        let scores = scores_for("", &config);
        assert!(scores.is_empty());
        assert!(extract(&scores, &config).is_empty());
    }
}
