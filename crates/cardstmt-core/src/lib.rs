//! Core library for credit-card statement parsing.
//!
//! This crate provides:
//! - Heuristic field extraction from the plain-text rendering of a
//!   statement (issuer, card identifiers, billing dates, balances)
//! - Line-oriented transaction scanning with a bounded result size
//! - Statement data models with a stable JSON wire shape
//!
//! Extraction is a pure computation over one text string: no I/O, no
//! shared state, deterministic for identical input. Obtaining the text
//! (PDF conversion, uploads, storage) is the caller's concern.

pub mod error;
pub mod models;
pub mod statement;

pub use error::{CardstmtError, ExtractionError, Result};
pub use models::config::{CardstmtConfig, ExtractionConfig};
pub use models::statement::{BillingCycle, StatementRecord, Transaction};
pub use statement::{BatchOutcome, StatementExtractor, StatementParser, extract, extract_batch};
