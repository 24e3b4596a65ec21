//! Issuer detection via the alias lookup table.

use super::patterns::ISSUER_ALIASES;

/// Canonical issuer value for statements no alias matched.
pub const UNKNOWN_ISSUER: &str = "Unknown";

/// Detect the card issuer with a case-insensitive substring scan.
///
/// The text is uppercased once and the alias table is walked in
/// declaration order; the first alias present anywhere in the text
/// wins, so detection stays stable even when a statement mentions more
/// than one institution. Always returns a value.
pub fn detect_issuer(text: &str) -> String {
    let haystack = text.to_uppercase();

    ISSUER_ALIASES
        .iter()
        .find(|(alias, _)| haystack.contains(alias))
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or_else(|| UNKNOWN_ISSUER.to_string())
}
