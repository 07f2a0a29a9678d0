//! Metrics collection for scoring and batch operations.

use anyhow::Result;
use metrics::{counter, histogram};
use std::time::Duration;

/// Metric names used across the application
pub struct MetricsCollector {
    /// Counter: texts scored through the single-text entry point
    pub texts_scored_total: &'static str,
    /// Histogram: polarity scores produced
    pub sentiment_scores: &'static str,
    /// Histogram: input text lengths in bytes
    pub text_length_bytes: &'static str,
    /// Counter: rows scored during batch runs
    pub batch_rows_total: &'static str,
    /// Counter: rows dropped by the length filter
    pub batch_rows_dropped_total: &'static str,
    /// Histogram: batch run duration
    pub batch_duration_seconds: &'static str,
    /// Counter: rows written during export
    pub export_rows_total: &'static str,
    /// Counter: operation errors
    pub errors_total: &'static str,
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self {
            texts_scored_total: "mood_meter_texts_scored_total",
            sentiment_scores: "mood_meter_sentiment_scores",
            text_length_bytes: "mood_meter_text_length_bytes",
            batch_rows_total: "mood_meter_batch_rows_total",
            batch_rows_dropped_total: "mood_meter_batch_rows_dropped_total",
            batch_duration_seconds: "mood_meter_batch_duration_seconds",
            export_rows_total: "mood_meter_export_rows_total",
            errors_total: "mood_meter_errors_total",
        }
    }
}

impl MetricsCollector {
    /// Install the global recorder; a no-op recorder until an exporter is
    /// wired in.
    pub fn init() -> Result<()> {
        metrics::set_global_recorder(metrics::NoopRecorder)
            .map_err(|e| anyhow::anyhow!("Failed to initialize metrics recorder: {e}"))?;
        Ok(())
    }

    /// Record a single-text scoring call
    pub fn record_text_scored(&self, score: f64, text_length: usize) {
        counter!(self.texts_scored_total).increment(1);
        histogram!(self.sentiment_scores).record(score);
        histogram!(self.text_length_bytes).record(text_length as f64);
    }

    /// Record a completed batch run
    pub fn record_batch(&self, rows_analyzed: usize, rows_dropped: usize, duration: Duration) {
        counter!(self.batch_rows_total).increment(rows_analyzed as u64);
        counter!(self.batch_rows_dropped_total).increment(rows_dropped as u64);
        histogram!(self.batch_duration_seconds).record(duration.as_secs_f64());
    }

    /// Record rows written to an export file
    pub fn record_export(&self, rows: usize, format: &'static str) {
        counter!(self.export_rows_total, "format" => format).increment(rows as u64);
    }

    /// Record an operation error
    pub fn record_error(&self, operation: &'static str, _message: &str) {
        counter!(self.errors_total, "operation" => operation).increment(1);
    }
}
