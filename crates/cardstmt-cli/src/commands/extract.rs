//! Extract command - parse a single statement text file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use cardstmt_core::models::config::CardstmtConfig;
use cardstmt_core::models::statement::{BillingCycle, StatementRecord};
use cardstmt_core::statement::{StatementExtractor, StatementParser};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (plain-text statement rendering)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// List the fields that could not be extracted
    #[arg(long)]
    show_misses: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    // Load configuration
    let config = if let Some(path) = config_path {
        CardstmtConfig::from_file(std::path::Path::new(path))?
    } else {
        CardstmtConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = fs::read_to_string(&args.input)?;
    if text.trim().is_empty() {
        anyhow::bail!("Statement text is empty: {}", args.input.display());
    }

    let parser = StatementParser::from_config(&config.extraction);
    let record = parser.parse(&text);

    debug!("Extracted statement for issuer {}", record.issuer);

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_misses {
        let missing = record.missing_fields();
        if missing.is_empty() {
            println!("{} All fields extracted", style("✓").green());
        } else {
            println!(
                "{} Missing fields: {}",
                style("ℹ").blue(),
                missing.join(", ")
            );
        }
    }

    Ok(())
}

pub fn format_record(record: &StatementRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_text(record: &StatementRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Issuer: {}\n", record.issuer));

    if let Some(variant) = &record.card_variant {
        output.push_str(&format!("Card: {}\n", variant));
    }
    if let Some(last_four) = &record.card_last_four_digits {
        output.push_str(&format!("Card number: ending {}\n", last_four));
    }

    match &record.billing_cycle {
        Some(BillingCycle::Range {
            start_date,
            end_date,
        }) => {
            output.push_str(&format!("Billing cycle: {} - {}\n", start_date, end_date));
        }
        Some(BillingCycle::Closing { closing_date }) => {
            output.push_str(&format!("Closing date: {}\n", closing_date));
        }
        None => {}
    }

    if let Some(due_date) = &record.payment_due_date {
        output.push_str(&format!("Payment due: {}\n", due_date));
    }

    if let Some(balances) = &record.total_balance {
        output.push_str("Balances:\n");
        for (label, amount) in balances {
            output.push_str(&format!("  {}: {}\n", label, amount));
        }
    }

    if !record.transactions.is_empty() {
        output.push_str(&format!("Transactions ({}):\n", record.transactions.len()));
        for transaction in &record.transactions {
            output.push_str(&format!(
                "  {} {}\n",
                transaction.description(),
                transaction.amount()
            ));
        }
    }

    output
}
