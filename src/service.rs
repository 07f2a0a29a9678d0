//! The two entry points the front ends consume.
//!
//! No UI event model is assumed here; callers pass explicit values and get
//! explicit results back. Batch runs always use the fine-grained classifier,
//! matching the reference behavior; single-text calls pick a granularity.

use crate::batch::BatchRunner;
use crate::classify::Granularity;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{DatasetSummary, ScoredText};
use crate::scorer::ScoreAggregator;
use crate::table::Table;
use std::time::Instant;
use tracing::info;

/// Sentiment analysis facade over the aggregator, classifiers, and runner
pub struct AnalysisService {
    aggregator: ScoreAggregator,
    metrics: MetricsCollector,
    min_text_length: usize,
}

impl AnalysisService {
    /// Create a service around an injected aggregator
    #[must_use]
    pub fn new(aggregator: ScoreAggregator) -> Self {
        Self {
            aggregator,
            metrics: MetricsCollector::default(),
            min_text_length: crate::batch::DEFAULT_MIN_TEXT_LENGTH,
        }
    }

    /// Create a service with the standard VADER and AFINN scorers
    #[must_use]
    pub fn with_default_scorers() -> Self {
        Self::new(ScoreAggregator::with_default_scorers())
    }

    /// Override the batch minimum trimmed text length
    #[must_use]
    pub const fn with_min_text_length(mut self, min_text_length: usize) -> Self {
        self.min_text_length = min_text_length;
        self
    }

    /// Score a single text and classify it at the requested granularity.
    ///
    /// Empty or whitespace-only text yields the neutral default rather than
    /// an error.
    pub fn score_and_classify(&self, text: &str, granularity: Granularity) -> Result<ScoredText> {
        let score = match self.aggregator.score(text) {
            Ok(score) => score,
            Err(err) => {
                self.metrics
                    .record_error("score_and_classify", &err.to_string());
                return Err(err);
            }
        };
        let classification = granularity.classifier().classify(score);
        self.metrics.record_text_scored(score, text.len());

        Ok(ScoredText {
            label: classification.label,
            score,
            class: classification.class,
        })
    }

    /// Run the batch pipeline over a table's text column.
    ///
    /// Uses the fine-grained classifier for every row and returns the
    /// augmented table plus summary statistics.
    pub fn run_batch(&self, table: &Table, text_column: &str) -> Result<(Table, DatasetSummary)> {
        info!(
            column = text_column,
            rows = table.len(),
            "Starting batch analysis"
        );
        let started = Instant::now();

        let classifier = Granularity::Fine.classifier();
        let runner = BatchRunner::new(&self.aggregator, classifier.as_ref())
            .with_min_text_length(self.min_text_length);
        let result = runner.run(table, text_column);

        match &result {
            Ok((_, summary)) => {
                self.metrics
                    .record_batch(summary.rows_analyzed, summary.rows_dropped, started.elapsed());
            }
            Err(err) => self.metrics.record_error("batch", &err.to_string()),
        }

        result
    }
}
