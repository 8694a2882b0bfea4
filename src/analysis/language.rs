//! Heuristic language identification from function-word coverage.

use super::config::AnalyzerConfig;
use super::normalizer::NormalizedText;
use std::collections::BTreeSet;

/// Code reported when no language can be identified with confidence.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// How much of a text's vocabulary one candidate's function words cover.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageScore {
    /// Language code
    pub code: String,

    /// Distinct matching words divided by distinct words in the text
    pub score: f64,
}

/// Score every configured candidate, best first.
///
/// Each distinct word counts once, so a single short word repeated many
/// times (an article shared by several languages) cannot outweigh a wider
/// spread of function words. Candidates with equal scores keep their
/// configured order.
pub fn scores(text: &NormalizedText<'_>, config: &AnalyzerConfig) -> Vec<LanguageScore> {
    let vocabulary: BTreeSet<&str> = text.tokens().collect();
    let total = vocabulary.len();
    let mut scores: Vec<LanguageScore> = config
        .languages
        .iter()
        .map(|profile| {
            let hits = vocabulary
                .iter()
                .filter(|t| profile.words.contains(**t))
                .count();
            let score = if total == 0 {
                0.0
            } else {
                hits as f64 / total as f64
            };
            LanguageScore {
                code: profile.code.clone(),
                score,
            }
        })
        .collect();

    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores
}

/// Detect the document language, or [`UNKNOWN_LANGUAGE`].
///
/// Refuses to guess when the text is shorter than the configured token
/// threshold or when the best candidate does not lead the runner-up by the
/// configured margin.
pub fn detect(text: &NormalizedText<'_>, config: &AnalyzerConfig) -> String {
    if text.token_count() < config.min_language_tokens {
        log::trace!(
            "language: {} tokens below threshold {}",
            text.token_count(),
            config.min_language_tokens
        );
        return UNKNOWN_LANGUAGE.to_string();
    }

    let ranked = scores(text, config);
    let Some(best) = ranked.first() else {
        return UNKNOWN_LANGUAGE.to_string();
    };
    let runner_up = ranked.get(1).map_or(0.0, |s| s.score);

    if best.score <= 0.0 || best.score - runner_up < config.min_language_margin {
        log::trace!(
            "language: best {} ({:.3}) too close to runner-up ({:.3})",
            best.code,
            best.score,
            runner_up
        );
        return UNKNOWN_LANGUAGE.to_string();
    }

    best.code.clone()
}
