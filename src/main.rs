#![allow(clippy::print_stdout)] // Analysis results are the program's output

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mood_meter::config::AppConfig;
use mood_meter::file_writer;
use mood_meter::logging::{init_logging, OperationTimer};
use mood_meter::metrics::MetricsCollector;
use mood_meter::models::InputFormat;
use mood_meter::validation::InputValidator;
use mood_meter::{AnalysisService, Granularity, Table};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single text snippet
    Text {
        /// The text to analyze
        text: String,

        /// Classification granularity (fine or coarse)
        #[arg(short, long)]
        granularity: Option<String>,
    },
    /// Score every row of a CSV or JSON dataset
    Batch {
        /// Path to the input file
        input: PathBuf,

        /// Name of the column holding the text to analyze
        #[arg(short, long)]
        column: String,

        /// Input format override (csv or json); inferred from the
        /// extension when omitted
        #[arg(short, long)]
        format: Option<String>,

        /// Path for the output CSV; defaults to a timestamped directory
        /// under the configured output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the minimum trimmed text length filter
        #[arg(long)]
        min_length: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging and metrics
    let _logging_guard = init_logging(&config.logging, None)?;
    MetricsCollector::init()?;

    info!("Starting mood-meter");

    // Parse command line arguments
    let cli = Cli::parse();

    match &cli.command {
        Commands::Text { text, granularity } => analyze_text(&config, text, granularity.as_deref()),
        Commands::Batch {
            input,
            column,
            format,
            output,
            min_length,
        } => analyze_batch(
            &config,
            input,
            column,
            format.as_deref(),
            output.as_deref(),
            *min_length,
        ),
    }
}

/// Score and classify a single text snippet
fn analyze_text(config: &AppConfig, text: &str, granularity: Option<&str>) -> Result<()> {
    let granularity = match granularity {
        Some(value) => {
            InputValidator::validate_granularity(value)?;
            value.parse::<Granularity>().map_err(anyhow::Error::msg)?
        }
        None => config.get_granularity(),
    };

    let text = InputValidator::sanitize_text(text);
    let service = AnalysisService::with_default_scorers();

    let timer = OperationTimer::new("analyze_text");
    let result = service.score_and_classify(&text, granularity)?;
    timer.finish();

    let decimals = config.analysis.display_decimals;
    println!("Mood: {}", granularity.display_mood(&result));
    println!("Score: {:.decimals$}", result.score);
    println!("Sentiment Type: {}", result.class.title());

    Ok(())
}

/// Score every row of a dataset and export the augmented table
fn analyze_batch(
    config: &AppConfig,
    input: &std::path::Path,
    column: &str,
    format: Option<&str>,
    output: Option<&std::path::Path>,
    min_length: Option<usize>,
) -> Result<()> {
    InputValidator::validate_input_file(input)?;
    InputValidator::validate_column_name(column)?;

    let format = match format {
        Some("csv") => Some(InputFormat::Csv),
        Some("json") => Some(InputFormat::Json),
        Some(other) => {
            return Err(anyhow::anyhow!(
                "Unsupported format: {other}. Must be one of: csv, json"
            ))
        }
        None => None,
    };

    let min_length = min_length.unwrap_or(config.analysis.min_text_length);
    InputValidator::validate_min_text_length(min_length)?;

    let table = Table::from_path(input, format)
        .with_context(|| format!("Failed to read dataset from {}", input.display()))?;
    info!(
        rows = table.len(),
        columns = table.headers().len(),
        "Loaded dataset"
    );

    let service = AnalysisService::with_default_scorers().with_min_text_length(min_length);

    let timer = OperationTimer::new("analyze_batch");
    let (processed, summary) = service.run_batch(&table, column)?;
    timer.finish();

    // Write the augmented table
    let output_path = if let Some(path) = output {
        InputValidator::validate_file_path(path)?;
        file_writer::write_table_csv(&processed, path)?;
        path.to_path_buf()
    } else {
        let timestamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
        file_writer::write_table_to_timestamped_dir(
            &processed,
            std::path::Path::new(&config.export.output_directory),
            &timestamp,
            &config.export.default_output_file,
        )?
    };
    MetricsCollector::default().record_export(processed.len(), "csv");

    // Print the summary
    let decimals = config.analysis.display_decimals;
    println!("Analyzed {} rows ({} dropped as too short)", summary.rows_analyzed, summary.rows_dropped);
    println!();
    println!("Overall feelings:");
    for (class, count) in &summary.class_counts {
        println!("  {}: {count}", class.as_str());
    }
    if let Some(modal) = summary.modal_class {
        println!("Most common mood: {}", modal.title());
    }
    println!("Average score: {:.decimals$}", summary.mean_score);

    // A short sample of the results
    let text_index = processed.require_column(column)?;
    if !processed.is_empty() {
        println!();
        println!("Sample:");
        for row in processed.rows().iter().take(5) {
            let mood = &row[processed.headers().len() - 3];
            println!("  {:?} -> {mood}", row[text_index]);
        }
    }

    println!();
    println!("Results written to {}", output_path.display());

    Ok(())
}
