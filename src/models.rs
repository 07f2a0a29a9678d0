//! Data models for sentiment analysis
//!
//! This module contains all data structures used throughout the application,
//! including sentiment labels, classification results, and batch summaries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fine-grained qualitative sentiment tier for a scored text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Score >= 0.6
    #[serde(rename = "Extremely Positive")]
    ExtremelyPositive,
    /// Score >= 0.3
    #[serde(rename = "Very Positive")]
    VeryPositive,
    /// Score >= 0.1
    #[serde(rename = "Slightly Positive")]
    SlightlyPositive,
    /// Score strictly between -0.1 and 0.1
    Neutral,
    /// Score <= -0.1
    #[serde(rename = "Slightly Negative")]
    SlightlyNegative,
    /// Score <= -0.3
    #[serde(rename = "Very Negative")]
    VeryNegative,
    /// Score <= -0.6
    #[serde(rename = "Extremely Negative")]
    ExtremelyNegative,
}

impl SentimentLabel {
    /// Human-readable form of the label, as written to exported files
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExtremelyPositive => "Extremely Positive",
            Self::VeryPositive => "Very Positive",
            Self::SlightlyPositive => "Slightly Positive",
            Self::Neutral => "Neutral",
            Self::SlightlyNegative => "Slightly Negative",
            Self::VeryNegative => "Very Negative",
            Self::ExtremelyNegative => "Extremely Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse positive/neutral/negative bucket derived from the label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentClass {
    /// Any of the positive tiers
    Positive,
    /// The neutral band
    Neutral,
    /// Any of the negative tiers
    Negative,
}

impl SentimentClass {
    /// Lowercase form of the class, as written to exported files
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    /// Capitalized form of the class, used for display
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SentimentClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            other => Err(format!("Unknown sentiment class: {other}")),
        }
    }
}

/// Label and class pair produced by a classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Qualitative sentiment tier
    pub label: SentimentLabel,
    /// Coarse sentiment bucket
    pub class: SentimentClass,
}

/// Full result of scoring and classifying a single text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredText {
    /// Qualitative sentiment tier
    pub label: SentimentLabel,
    /// Averaged polarity score, conventionally in [-1.0, 1.0]
    pub score: f64,
    /// Coarse sentiment bucket
    pub class: SentimentClass,
}

/// Summary statistics over a processed dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Per-class counts in first-seen insertion order
    pub class_counts: Vec<(SentimentClass, usize)>,
    /// Class with the highest count; ties broken by first-seen order.
    /// `None` when no rows survived filtering.
    pub modal_class: Option<SentimentClass>,
    /// Arithmetic mean of scores across analyzed rows (0.0 when empty)
    pub mean_score: f64,
    /// Number of rows that were scored
    pub rows_analyzed: usize,
    /// Number of rows dropped by the minimum-length filter
    pub rows_dropped: usize,
}

impl DatasetSummary {
    /// Get the count for a specific class, 0 if absent
    #[must_use]
    pub fn count(&self, class: SentimentClass) -> usize {
        self.class_counts
            .iter()
            .find(|(c, _)| *c == class)
            .map_or(0, |(_, n)| *n)
    }
}

/// Input format for uploaded datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// JSON array of flat objects
    Json,
}

impl InputFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Infer the format from a file extension, if recognized
    #[must_use]
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("csv") => Some(Self::Csv),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}
