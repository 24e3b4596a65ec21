//! Batch command - parse multiple statement text files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use cardstmt_core::error::ExtractionError;
use cardstmt_core::models::config::CardstmtConfig;
use cardstmt_core::statement::{BatchOutcome, StatementParser};

use super::extract::{OutputFormat, format_record};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory (default: print records to stdout)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue when a file cannot be read
    #[arg(long)]
    continue_on_error: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        CardstmtConfig::from_file(std::path::Path::new(path))?
    } else {
        CardstmtConfig::default()
    };

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "text")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // Read every file up front; a read failure becomes a per-item
    // unreadable-input error so siblings are never affected.
    let mut items = Vec::with_capacity(files.len());
    for path in &files {
        let id = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("statement")
            .to_string();

        let text = fs::read_to_string(path).map_err(|e| {
            ExtractionError::InputUnreadable(format!("{}: {}", path.display(), e))
        });

        if let Err(ref e) = text {
            if !args.continue_on_error {
                anyhow::bail!("Processing failed: {}", e);
            }
            warn!("Failed to read {}: {}", path.display(), e);
        }

        items.push((id, text));
        pb.inc(1);
    }

    let parser = StatementParser::from_config(&config.extraction);
    let outcomes = parser.parse_batch(items);

    pb.finish_with_message("Complete");

    // Write outputs
    for outcome in &outcomes {
        if let Ok(record) = &outcome.result {
            let content = format_record(record, args.format)?;

            if let Some(ref output_dir) = args.output_dir {
                let stem = outcome.id.trim_end_matches(".txt").trim_end_matches(".text");
                let extension = match args.format {
                    OutputFormat::Json => "json",
                    OutputFormat::Text => "txt",
                };
                let output_path = output_dir.join(format!("{}.{}", stem, extension));
                fs::write(&output_path, content)?;
                debug!("Wrote output to {}", output_path.display());
            } else {
                println!("{}", content);
            }
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &outcomes)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    // Print summary counts
    let successful = outcomes.iter().filter(|o| o.result.is_ok()).count();
    let failed: Vec<_> = outcomes.iter().filter(|o| o.result.is_err()).collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        outcomes.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for outcome in &failed {
            let error = outcome
                .result
                .as_ref()
                .err()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown error".to_string());
            println!("  - {}: {}", outcome.id, error);
        }
    }

    Ok(())
}

fn write_summary(path: &PathBuf, outcomes: &[BatchOutcome]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "issuer",
        "card_last_four_digits",
        "card_variant",
        "payment_due_date",
        "transactions",
        "error",
    ])?;

    for outcome in outcomes {
        match &outcome.result {
            Ok(record) => {
                wtr.write_record([
                    outcome.id.as_str(),
                    "success",
                    record.issuer.as_str(),
                    record.card_last_four_digits.as_deref().unwrap_or(""),
                    record.card_variant.as_deref().unwrap_or(""),
                    record.payment_due_date.as_deref().unwrap_or(""),
                    &record.transactions.len().to_string(),
                    "",
                ])?;
            }
            Err(e) => {
                wtr.write_record([
                    outcome.id.as_str(),
                    "error",
                    "",
                    "",
                    "",
                    "",
                    "",
                    &e.to_string(),
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
