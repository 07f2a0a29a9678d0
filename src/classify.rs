//! Threshold-based classification of polarity scores.
//!
//! Two strategies exist because the reference behavior differs between the
//! single-text flow (seven tiers) and the quick-look flow (three tiers). The
//! caller selects one explicitly via [`Granularity`]; nothing picks silently.

use crate::models::{Classification, ScoredText, SentimentClass, SentimentLabel};

/// Maps a continuous polarity score to a label and class.
///
/// Implementations must be total over the real line: every float maps to
/// exactly one label.
pub trait Classifier: Send + Sync {
    /// Classify a polarity score
    fn classify(&self, score: f64) -> Classification;
}

/// Which classification strategy to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    /// Seven-tier classification
    #[default]
    Fine,
    /// Three-tier classification with a narrow +/-0.05 neutral band
    Coarse,
}

impl std::str::FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fine" => Ok(Self::Fine),
            "coarse" => Ok(Self::Coarse),
            other => Err(format!(
                "Unknown granularity: {other}. Must be one of: fine, coarse"
            )),
        }
    }
}

impl Granularity {
    /// Get the classifier implementing this strategy
    #[must_use]
    pub fn classifier(self) -> Box<dyn Classifier> {
        match self {
            Self::Fine => Box::new(FineGrainedClassifier),
            Self::Coarse => Box::new(CoarseClassifier),
        }
    }

    /// Mood string shown to users: the tier label in fine mode, the
    /// capitalized class in coarse mode (coarse defines no tiers).
    #[must_use]
    pub const fn display_mood(self, result: &ScoredText) -> &'static str {
        match self {
            Self::Fine => result.label.as_str(),
            Self::Coarse => result.class.title(),
        }
    }
}

/// Seven-tier classifier used by the single-text flow and batch processing.
///
/// Bands overlap by construction (0.6 also satisfies >= 0.3 and >= 0.1), so
/// the arms are evaluated in precedence order and the first match wins.
/// Boundary values belong to the more extreme tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct FineGrainedClassifier;

impl Classifier for FineGrainedClassifier {
    fn classify(&self, score: f64) -> Classification {
        let (label, class) = if score >= 0.6 {
            (SentimentLabel::ExtremelyPositive, SentimentClass::Positive)
        } else if score >= 0.3 {
            (SentimentLabel::VeryPositive, SentimentClass::Positive)
        } else if score >= 0.1 {
            (SentimentLabel::SlightlyPositive, SentimentClass::Positive)
        } else if score <= -0.6 {
            (SentimentLabel::ExtremelyNegative, SentimentClass::Negative)
        } else if score <= -0.3 {
            (SentimentLabel::VeryNegative, SentimentClass::Negative)
        } else if score <= -0.1 {
            (SentimentLabel::SlightlyNegative, SentimentClass::Negative)
        } else {
            (SentimentLabel::Neutral, SentimentClass::Neutral)
        };
        Classification { label, class }
    }
}

/// Three-tier classifier used by the quick-look flow.
///
/// The authoritative output is the class; the label is pinned to the mildest
/// tier of that class so both strategies share one return type.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoarseClassifier;

impl Classifier for CoarseClassifier {
    fn classify(&self, score: f64) -> Classification {
        let (label, class) = if score >= 0.05 {
            (SentimentLabel::SlightlyPositive, SentimentClass::Positive)
        } else if score <= -0.05 {
            (SentimentLabel::SlightlyNegative, SentimentClass::Negative)
        } else {
            (SentimentLabel::Neutral, SentimentClass::Neutral)
        };
        Classification { label, class }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fine_boundaries_positive() {
        let c = FineGrainedClassifier;
        assert_eq!(c.classify(0.6).label, SentimentLabel::ExtremelyPositive);
        assert_eq!(c.classify(0.5999).label, SentimentLabel::VeryPositive);
        assert_eq!(c.classify(0.3).label, SentimentLabel::VeryPositive);
        assert_eq!(c.classify(0.1).label, SentimentLabel::SlightlyPositive);
        assert_eq!(c.classify(0.09).label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_fine_boundaries_negative() {
        let c = FineGrainedClassifier;
        assert_eq!(c.classify(-0.6).label, SentimentLabel::ExtremelyNegative);
        assert_eq!(c.classify(-0.3).label, SentimentLabel::VeryNegative);
        assert_eq!(c.classify(-0.1).label, SentimentLabel::SlightlyNegative);
        assert_eq!(c.classify(-0.09).label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_zero_is_neutral() {
        let result = FineGrainedClassifier.classify(0.0);
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.class, SentimentClass::Neutral);
    }

    #[test]
    fn test_coarse_thresholds() {
        let c = CoarseClassifier;
        assert_eq!(c.classify(0.05).class, SentimentClass::Positive);
        assert_eq!(c.classify(-0.05).class, SentimentClass::Negative);
        assert_eq!(c.classify(0.049).class, SentimentClass::Neutral);
        assert_eq!(c.classify(-0.049).class, SentimentClass::Neutral);
    }

    #[test]
    fn test_granularity_parsing() {
        assert_eq!("fine".parse::<Granularity>(), Ok(Granularity::Fine));
        assert_eq!(" Coarse ".parse::<Granularity>(), Ok(Granularity::Coarse));
        assert!("medium".parse::<Granularity>().is_err());
    }
}
