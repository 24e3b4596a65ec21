//! Rule-based field extractors for credit-card statements.
//!
//! Each extractor is an independent pure function over the statement
//! text; no extractor's outcome affects another. Rule chains are tried
//! first-to-last and the first rule that matches anywhere in the text
//! wins, so chain order is part of each extractor's contract.

pub mod balances;
pub mod card;
pub mod dates;
pub mod issuer;
pub mod patterns;
pub mod transactions;

pub use balances::extract_balances;
pub use card::{extract_card_last_four, extract_card_variant};
pub use dates::{extract_billing_cycle, extract_due_date};
pub use issuer::detect_issuer;
pub use transactions::extract_transactions;

use regex::Regex;

/// Apply an ordered rule chain and return the first rule's first
/// capture group, trimmed.
///
/// An earlier rule wins even when a later rule would match earlier in
/// the text.
pub(crate) fn first_capture<'t>(rules: &[Regex], text: &'t str) -> Option<&'t str> {
    rules
        .iter()
        .find_map(|rule| rule.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}
