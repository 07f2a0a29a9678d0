//! Batch application of the scoring pipeline over tabular data.
//!
//! Rows are normalized and length-filtered before scoring, so filtered rows
//! never appear in the output. The whole run fails as one error when the
//! selected column is missing or a scorer fails; there are no partial
//! results.

use crate::classify::Classifier;
use crate::error::Result;
use crate::models::{DatasetSummary, SentimentClass};
use crate::scorer::ScoreAggregator;
use crate::table::Table;
use tracing::info;

/// Derived column holding the sentiment label
pub const COL_MOOD: &str = "Mood";
/// Derived column holding the averaged polarity score
pub const COL_SCORE: &str = "Sentiment_Score";
/// Derived column holding the coarse sentiment class
pub const COL_CLASS: &str = "Sentiment_Class";

/// Rows whose trimmed text is at most this many characters are dropped
/// before scoring; they are too short to score meaningfully.
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 3;

/// Applies the per-text pipeline across every row of a table.
pub struct BatchRunner<'a> {
    aggregator: &'a ScoreAggregator,
    classifier: &'a dyn Classifier,
    min_text_length: usize,
}

impl<'a> BatchRunner<'a> {
    /// Create a runner over the given aggregator and classifier
    #[must_use]
    pub const fn new(aggregator: &'a ScoreAggregator, classifier: &'a dyn Classifier) -> Self {
        Self {
            aggregator,
            classifier,
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
        }
    }

    /// Override the minimum trimmed text length (inclusive drop threshold)
    #[must_use]
    pub const fn with_min_text_length(mut self, min_text_length: usize) -> Self {
        self.min_text_length = min_text_length;
        self
    }

    /// Score every row's text column, producing an augmented table and a
    /// summary.
    ///
    /// The output table carries the original columns (text column trimmed)
    /// plus `Mood`, `Sentiment_Score`, and `Sentiment_Class`. Output row
    /// order matches input order after filtering.
    pub fn run(&self, table: &Table, text_column: &str) -> Result<(Table, DatasetSummary)> {
        let column = table.require_column(text_column)?;

        let mut headers = table.headers().to_vec();
        headers.push(COL_MOOD.to_string());
        headers.push(COL_SCORE.to_string());
        headers.push(COL_CLASS.to_string());
        let mut output = Table::new(headers);

        let mut class_counts: Vec<(SentimentClass, usize)> = Vec::new();
        let mut score_total = 0.0;
        let mut rows_dropped = 0;

        for row in table.rows() {
            let text = row[column].trim();
            if text.chars().count() <= self.min_text_length {
                rows_dropped += 1;
                continue;
            }

            let score = self.aggregator.score(text)?;
            let classification = self.classifier.classify(score);

            let mut out_row = row.clone();
            out_row[column] = text.to_string();
            out_row.push(classification.label.as_str().to_string());
            out_row.push(score.to_string());
            out_row.push(classification.class.as_str().to_string());
            output.push_row(out_row)?;

            score_total += score;
            count_class(&mut class_counts, classification.class);
        }

        let rows_analyzed = output.len();
        let mean_score = if rows_analyzed == 0 {
            0.0
        } else {
            score_total / rows_analyzed as f64
        };
        let modal_class = modal(&class_counts);

        info!(
            rows_analyzed,
            rows_dropped,
            mean_score,
            modal_class = modal_class.map(|c| c.as_str()),
            "Batch analysis complete"
        );

        let summary = DatasetSummary {
            class_counts,
            modal_class,
            mean_score,
            rows_analyzed,
            rows_dropped,
        };
        Ok((output, summary))
    }
}

/// Bump the count for a class, inserting it on first sight
fn count_class(counts: &mut Vec<(SentimentClass, usize)>, class: SentimentClass) {
    if let Some(entry) = counts.iter_mut().find(|(c, _)| *c == class) {
        entry.1 += 1;
    } else {
        counts.push((class, 1));
    }
}

/// Class with the highest count; ties resolve to the first-seen class
fn modal(counts: &[(SentimentClass, usize)]) -> Option<SentimentClass> {
    let mut best: Option<(SentimentClass, usize)> = None;
    for &(class, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((class, count));
        }
    }
    best.map(|(class, _)| class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::FineGrainedClassifier;
    use crate::scorer::{MockPolarityScorer, PolarityScorer};

    fn scripted_scorer(scores: Vec<(&'static str, f64)>) -> Box<dyn PolarityScorer> {
        let mut mock = MockPolarityScorer::new();
        mock.expect_name().return_const("scripted");
        mock.expect_polarity().returning(move |text| {
            scores
                .iter()
                .find(|(t, _)| *t == text)
                .map(|(_, s)| *s)
                .ok_or_else(|| crate::error::MoodMeterError::Other(format!("Unexpected text: {text}")))
        });
        Box::new(mock)
    }

    fn aggregator_for(scores: Vec<(&'static str, f64)>) -> ScoreAggregator {
        ScoreAggregator::new(scripted_scorer(scores.clone()), scripted_scorer(scores))
    }

    fn review_table(rows: &[&str]) -> Table {
        let mut table = Table::new(vec!["review".to_string()]);
        for row in rows {
            table.push_row(vec![(*row).to_string()]).expect("push failed");
        }
        table
    }

    #[test]
    fn test_short_rows_filtered_before_scoring() {
        let aggregator = aggregator_for(vec![("good", 0.5)]);
        let classifier = FineGrainedClassifier;
        let runner = BatchRunner::new(&aggregator, &classifier);

        // "ok" and "  hi " never reach the scorers; the mock would error
        let table = review_table(&["ok", "  hi ", "good"]);
        let (output, summary) = runner.run(&table, "review").expect("run failed");

        assert_eq!(output.len(), 1);
        assert_eq!(summary.rows_dropped, 2);
        assert_eq!(summary.rows_analyzed, 1);
        assert_eq!(output.rows()[0][0], "good");
    }

    #[test]
    fn test_derived_columns_appended() {
        let aggregator = aggregator_for(vec![("lovely day", 0.7)]);
        let classifier = FineGrainedClassifier;
        let runner = BatchRunner::new(&aggregator, &classifier);

        let table = review_table(&["lovely day"]);
        let (output, _) = runner.run(&table, "review").expect("run failed");

        assert_eq!(
            output.headers(),
            vec!["review", "Mood", "Sentiment_Score", "Sentiment_Class"]
        );
        assert_eq!(output.rows()[0][1], "Extremely Positive");
        assert_eq!(output.rows()[0][2], "0.7");
        assert_eq!(output.rows()[0][3], "positive");
    }

    #[test]
    fn test_missing_column_fails_whole_batch() {
        let aggregator = aggregator_for(vec![]);
        let classifier = FineGrainedClassifier;
        let runner = BatchRunner::new(&aggregator, &classifier);

        let table = review_table(&["anything at all"]);
        assert!(runner.run(&table, "body").is_err());
    }

    #[test]
    fn test_modal_tie_breaks_first_seen() {
        let aggregator = aggregator_for(vec![("really great", 0.5), ("truly awful", -0.5)]);
        let classifier = FineGrainedClassifier;
        let runner = BatchRunner::new(&aggregator, &classifier);

        let table = review_table(&["really great", "truly awful"]);
        let (_, summary) = runner.run(&table, "review").expect("run failed");

        // One positive, one negative; positive was seen first
        assert_eq!(summary.modal_class, Some(SentimentClass::Positive));
        assert_eq!(summary.count(SentimentClass::Positive), 1);
        assert_eq!(summary.count(SentimentClass::Negative), 1);
    }

    #[test]
    fn test_mean_score() {
        let aggregator = aggregator_for(vec![("really great", 0.8), ("just fine", 0.2)]);
        let classifier = FineGrainedClassifier;
        let runner = BatchRunner::new(&aggregator, &classifier);

        let table = review_table(&["really great", "just fine"]);
        let (_, summary) = runner.run(&table, "review").expect("run failed");
        assert!((summary.mean_score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_after_filter() {
        let aggregator = aggregator_for(vec![]);
        let classifier = FineGrainedClassifier;
        let runner = BatchRunner::new(&aggregator, &classifier);

        let table = review_table(&["ok", "no"]);
        let (output, summary) = runner.run(&table, "review").expect("run failed");
        assert!(output.is_empty());
        assert_eq!(summary.modal_class, None);
        assert_eq!(summary.mean_score, 0.0);
    }

    #[test]
    fn test_text_column_written_back_trimmed() {
        let aggregator = aggregator_for(vec![("good stuff", 0.4)]);
        let classifier = FineGrainedClassifier;
        let runner = BatchRunner::new(&aggregator, &classifier);

        let table = review_table(&["  good stuff  "]);
        let (output, _) = runner.run(&table, "review").expect("run failed");
        assert_eq!(output.rows()[0][0], "good stuff");
    }
}
