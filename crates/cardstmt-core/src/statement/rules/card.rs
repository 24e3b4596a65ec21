//! Card identifier and product-name extraction.

use super::first_capture;
use super::patterns::{CARD_LAST_FOUR_RULES, CARD_VARIANT_RULES};

/// Extract the last four digits of the card number.
///
/// Only the captured four digits are retained, even when the statement
/// prints a longer run.
pub fn extract_card_last_four(text: &str) -> Option<String> {
    first_capture(&CARD_LAST_FOUR_RULES, text).map(str::to_string)
}

/// Extract the card product name (network and tier), trimmed.
pub fn extract_card_variant(text: &str) -> Option<String> {
    first_capture(&CARD_VARIANT_RULES, text).map(str::to_string)
}
