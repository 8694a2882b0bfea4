//! Extractive summarization.

use super::keywords::TermScores;
use super::normalizer::{NormalizedText, Sentence};
use std::cmp::Ordering;

/// Select the most informative sentences and join them in document order.
///
/// A sentence scores the mean relevance of its tokens. The best
/// `max_sentences` win (earlier sentences win ties), then are re-ordered by
/// position so the summary reads in the source's order.
pub fn generate(text: &NormalizedText<'_>, scores: &TermScores, max_sentences: usize) -> String {
    select(text, scores, max_sentences)
        .iter()
        .map(|s| s.raw)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The selected sentences, in document order.
pub fn select<'t, 'a>(
    text: &'t NormalizedText<'a>,
    scores: &TermScores,
    max_sentences: usize,
) -> Vec<&'t Sentence<'a>> {
    if text.sentence_count() <= max_sentences {
        return text.sentences.iter().collect();
    }

    let mut ranked: Vec<(f64, &Sentence<'a>)> = text
        .sentences
        .iter()
        .map(|s| (sentence_score(s, scores), s))
        .collect();

    ranked.sort_by(|(score_a, a), (score_b, b)| {
        score_b
            .partial_cmp(score_a)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.index.cmp(&b.index))
    });
    ranked.truncate(max_sentences);

    let mut selected: Vec<&Sentence<'a>> = ranked.into_iter().map(|(_, s)| s).collect();
    selected.sort_by_key(|s| s.index);
    selected
}

/// Mean token relevance of a sentence.
pub fn sentence_score(sentence: &Sentence<'_>, scores: &TermScores) -> f64 {
    if sentence.tokens.is_empty() {
        return 0.0;
    }
    let total: f64 = sentence.tokens.iter().map(|t| scores.score(t)).sum();
    total / sentence.tokens.len() as f64
}
