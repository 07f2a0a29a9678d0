//! Mood Meter - Sentiment Scoring and Classification
//!
//! A Rust library for scoring the emotional valence of text, either for a
//! single snippet or across an entire CSV/JSON dataset.
//!
//! # Features
//!
//! - Dual lexicon scoring (VADER compound + AFINN word valence), averaged
//! - Seven-tier and three-tier threshold classification
//! - Batch processing of tabular datasets with derived sentiment columns
//! - Summary statistics (class histogram, modal class, mean score)
//! - CSV export of processed datasets

/// Batch application of the scoring pipeline
pub mod batch;
/// Threshold classification strategies
pub mod classify;
/// Configuration management
pub mod config;
/// Error types
pub mod error;
/// Dataset export
pub mod file_writer;
/// Logging setup and utilities
pub mod logging;
/// Metrics collection
pub mod metrics;
/// Data models and structures
pub mod models;
/// Polarity scoring
pub mod scorer;
/// Analysis entry points
pub mod service;
/// Tabular data parsing
pub mod table;
/// Input validation and sanitization
pub mod validation;

// Re-export key components for easier access
pub use classify::{Classifier, CoarseClassifier, FineGrainedClassifier, Granularity};
pub use error::{MoodMeterError, Result};
pub use models::{DatasetSummary, ScoredText, SentimentClass, SentimentLabel};
pub use scorer::{PolarityScorer, ScoreAggregator};
pub use service::AnalysisService;
pub use table::Table;
