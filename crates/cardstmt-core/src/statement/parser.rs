//! Statement parse orchestrator composing the field extractors.

use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::statement::StatementRecord;

use super::rules::{
    balances::extract_balances,
    card::{extract_card_last_four, extract_card_variant},
    dates::{extract_billing_cycle, extract_due_date},
    issuer::detect_issuer,
    transactions::extract_transactions,
};

/// Trait for statement parsers.
pub trait StatementExtractor {
    /// Parse one statement text into a structured record.
    fn parse(&self, text: &str) -> StatementRecord;
}

/// Rule-based statement parser.
///
/// Every field is extracted independently from the full text; no
/// extractor's outcome affects another. Parsing never fails: a field
/// whose rules do not match is simply absent from the record, and a
/// text with no matches at all still yields a record with issuer
/// `"Unknown"`. The computation is pure and deterministic, so parsing
/// many documents needs no coordination.
pub struct StatementParser {
    /// Maximum number of transactions returned per record.
    max_transactions: usize,
    /// Kept-candidate count at which the transaction line scan stops.
    transaction_scan_limit: usize,
}

impl StatementParser {
    /// Create a parser with the default limits.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from an extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            max_transactions: config.max_transactions,
            transaction_scan_limit: config.transaction_scan_limit,
        }
    }

    /// Set the transaction cap.
    pub fn with_max_transactions(mut self, max: usize) -> Self {
        self.max_transactions = max;
        self
    }

    /// Set the kept-candidate count that stops the transaction scan.
    pub fn with_transaction_scan_limit(mut self, limit: usize) -> Self {
        self.transaction_scan_limit = limit;
        self
    }

    /// Parse a batch of statements, isolating per-item failure.
    ///
    /// Items arrive as `(id, text-or-error)` pairs: an `Err` input
    /// models a document whose text could not be obtained upstream.
    /// Output order follows input order and a failed item never
    /// affects its siblings.
    pub fn parse_batch<I>(&self, items: I) -> Vec<BatchOutcome>
    where
        I: IntoIterator<Item = (String, Result<String, ExtractionError>)>,
    {
        items
            .into_iter()
            .map(|(id, text)| BatchOutcome {
                id,
                result: text.map(|t| self.parse(&t)),
            })
            .collect()
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementExtractor for StatementParser {
    fn parse(&self, text: &str) -> StatementRecord {
        info!("Parsing statement from {} characters of text", text.len());

        let record = StatementRecord {
            issuer: detect_issuer(text),
            card_last_four_digits: extract_card_last_four(text),
            card_variant: extract_card_variant(text),
            billing_cycle: extract_billing_cycle(text),
            payment_due_date: extract_due_date(text),
            total_balance: extract_balances(text),
            transactions: extract_transactions(
                text,
                self.transaction_scan_limit,
                self.max_transactions,
            ),
        };

        debug!(
            "Extracted {} statement with {} transactions, missing: {:?}",
            record.issuer,
            record.transactions.len(),
            record.missing_fields()
        );

        record
    }
}

/// Parse one statement text with the default limits.
///
/// The single-document entry point: given a text string it always
/// produces a record. Obtaining the text is the caller's concern.
pub fn extract(text: &str) -> StatementRecord {
    StatementParser::new().parse(text)
}

/// Outcome of one batch item.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Caller-assigned document id.
    pub id: String,
    /// The extracted record, or the per-document failure.
    pub result: Result<StatementRecord, ExtractionError>,
}

/// Parse a batch of statements with the default limits.
pub fn extract_batch<I>(items: I) -> Vec<BatchOutcome>
where
    I: IntoIterator<Item = (String, Result<String, ExtractionError>)>,
{
    StatementParser::new().parse_batch(items)
}
