//! Polarity scoring for text.
//!
//! Two independent lexicon-based scorers are combined by unweighted
//! arithmetic mean: the VADER compound score, which favors punctuation,
//! emphasis, and slang cues, and an AFINN word-valence score, which leans on
//! plain word weights. Averaging smooths their idiosyncratic disagreement
//! without a training step.
//!
//! Scorers are injected at construction time so tests can substitute
//! deterministic implementations.

use crate::error::{MoodMeterError, Result};
use tracing::debug;

/// A single sentiment scorer producing a polarity value in [-1.0, 1.0].
#[cfg_attr(test, mockall::automock)]
pub trait PolarityScorer: Send + Sync {
    /// Short identifier for logs and error messages
    fn name(&self) -> &'static str;

    /// Score a non-empty, pre-trimmed text
    fn polarity(&self, text: &str) -> Result<f64>;
}

/// Rule-based lexicon scorer tuned for short, informal text.
///
/// Wraps the VADER intensity analyzer and reports its normalized "compound"
/// score. The underlying lexicon is in-memory data with no teardown, so one
/// instance can be reused for all calls.
pub struct VaderScorer {
    analyzer: vader_sentiment::SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    /// Create a scorer backed by the built-in VADER lexicon
    #[must_use]
    pub fn new() -> Self {
        Self {
            analyzer: vader_sentiment::SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for VaderScorer {
    fn name(&self) -> &'static str {
        "vader"
    }

    fn polarity(&self, text: &str) -> Result<f64> {
        let scores = self.analyzer.polarity_scores(text);
        scores
            .get("compound")
            .copied()
            .ok_or_else(|| MoodMeterError::Scorer {
                scorer: "vader".to_string(),
                message: "No compound score in analyzer output".to_string(),
            })
    }
}

/// Word-valence polarity scorer backed by the AFINN-165 lexicon.
///
/// The comparative score (total valence over token count) is clamped to
/// [-1.0, 1.0] so both scorers report on the same scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct AfinnScorer;

impl AfinnScorer {
    /// Create a scorer backed by the AFINN-165 lexicon
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PolarityScorer for AfinnScorer {
    fn name(&self) -> &'static str {
        "afinn"
    }

    fn polarity(&self, text: &str) -> Result<f64> {
        let analysis = sentiment::analyze(text.to_string());
        Ok(f64::from(analysis.comparative).clamp(-1.0, 1.0))
    }
}

/// Averages the outputs of two independent polarity scorers.
pub struct ScoreAggregator {
    first: Box<dyn PolarityScorer>,
    second: Box<dyn PolarityScorer>,
}

impl ScoreAggregator {
    /// Create an aggregator over two injected scorers
    #[must_use]
    pub fn new(first: Box<dyn PolarityScorer>, second: Box<dyn PolarityScorer>) -> Self {
        Self { first, second }
    }

    /// Create an aggregator over the standard VADER and AFINN scorers
    #[must_use]
    pub fn with_default_scorers() -> Self {
        Self::new(Box::new(VaderScorer::new()), Box::new(AfinnScorer::new()))
    }

    /// Score a text, returning the mean of the two scorer outputs.
    ///
    /// Empty or whitespace-only input short-circuits to 0.0 without invoking
    /// either scorer; the underlying tools are not defined on empty input.
    /// Surrounding whitespace is trimmed first, so whitespace-equivalent
    /// inputs score identically.
    pub fn score(&self, text: &str) -> Result<f64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(0.0);
        }

        let first = self.first.polarity(trimmed)?;
        let second = self.second.polarity(trimmed)?;
        let score = (first + second) / 2.0;

        debug!(
            scorer_a = self.first.name(),
            score_a = first,
            scorer_b = self.second.name(),
            score_b = second,
            combined = score,
            "Scored text"
        );

        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_scorer(name: &'static str, value: f64) -> Box<MockPolarityScorer> {
        let mut mock = MockPolarityScorer::new();
        mock.expect_name().return_const(name);
        mock.expect_polarity().returning(move |_| Ok(value));
        Box::new(mock)
    }

    #[test]
    fn test_averages_two_scorers() {
        let aggregator = ScoreAggregator::new(fixed_scorer("a", 0.8), fixed_scorer("b", 0.2));
        let score = aggregator.score("some text").expect("scoring failed");
        assert!((score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input_skips_scorers() {
        let mut first = MockPolarityScorer::new();
        first.expect_polarity().times(0);
        let mut second = MockPolarityScorer::new();
        second.expect_polarity().times(0);

        let aggregator = ScoreAggregator::new(Box::new(first), Box::new(second));
        assert_eq!(aggregator.score("").expect("scoring failed"), 0.0);
        assert_eq!(aggregator.score("   \t\n").expect("scoring failed"), 0.0);
    }

    #[test]
    fn test_input_is_trimmed_before_scoring() {
        let mut mock = MockPolarityScorer::new();
        mock.expect_name().return_const("a");
        mock.expect_polarity()
            .withf(|text| text == "good")
            .times(1)
            .returning(|_| Ok(0.4));

        let aggregator = ScoreAggregator::new(Box::new(mock), fixed_scorer("b", 0.4));
        let score = aggregator.score("  good  ").expect("scoring failed");
        assert!((score - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_scorer_error_propagates() {
        let mut failing = MockPolarityScorer::new();
        failing.expect_polarity().returning(|_| {
            Err(MoodMeterError::Scorer {
                scorer: "broken".to_string(),
                message: "boom".to_string(),
            })
        });

        let aggregator = ScoreAggregator::new(Box::new(failing), fixed_scorer("b", 0.0));
        assert!(aggregator.score("anything").is_err());
    }

    #[test]
    fn test_default_scorers_positive_text() {
        let aggregator = ScoreAggregator::with_default_scorers();
        let score = aggregator
            .score("I love this, it is wonderful!")
            .expect("scoring failed");
        assert!(score > 0.0);
        assert!(score <= 1.0);
    }

    #[test]
    fn test_default_scorers_negative_text() {
        let aggregator = ScoreAggregator::with_default_scorers();
        let score = aggregator
            .score("This is terrible and I hate it.")
            .expect("scoring failed");
        assert!(score < 0.0);
        assert!(score >= -1.0);
    }
}
