//! Regex rule tables for statement field extraction.
//!
//! Every chain is an ordered table tried first-to-last. Order is
//! load-bearing and covered by tests; append new rules with care.

use lazy_static::lazy_static;
use regex::Regex;

/// Known issuer aliases mapped to canonical display names.
///
/// Declaration order is the tie-break: the first alias found as a
/// substring of the (uppercased) text wins. Broader aliases must come
/// before their abbreviations, so "AMERICAN EXPRESS" is checked before
/// "AMEX" even though both map to the same canonical name.
pub static ISSUER_ALIASES: &[(&str, &str)] = &[
    ("CHASE", "Chase"),
    ("AMERICAN EXPRESS", "American Express"),
    ("AMEX", "American Express"),
    ("CITI", "Citibank"),
    ("CAPITAL ONE", "Capital One"),
    ("DISCOVER", "Discover"),
    ("BANK OF AMERICA", "Bank of America"),
    ("WELLS FARGO", "Wells Fargo"),
];

lazy_static! {
    /// Card number rules, most explicit phrasing first. Each captures
    /// exactly four digits; mask runs are never retained.
    pub static ref CARD_LAST_FOUR_RULES: Vec<Regex> = vec![
        // "Card Number: xxxx1234", "Account ending 1234"
        Regex::new(
            r"(?i)(?:CARD|ACCOUNT)(?:\s+(?:NUMBER|ENDING|NO\.?))?\s*[:\-]?\s*(?:x+|\*+)?(\d{4})"
        )
        .unwrap(),
        // "ending in 1234"
        Regex::new(r"(?i)(?:ending|ends)\s+(?:in\s+)?(\d{4})").unwrap(),
        // bare mask runs
        Regex::new(r"(?i)x+(\d{4})").unwrap(),
        Regex::new(r"(?i)\*+(\d{4})").unwrap(),
        // generic account number, keep the last four digits
        Regex::new(r"(?i)Account\s+Number[:\s]+\d*(\d{4})").unwrap(),
    ];

    /// Card product rules: network plus optional tier, then bare tier
    /// followed by "Card"/"Credit".
    pub static ref CARD_VARIANT_RULES: Vec<Regex> = vec![
        Regex::new(
            r"(?i)((?:Visa|Mastercard|Master Card|Discover|American Express)\s+(?:Platinum|Gold|Silver|Classic|Signature|Infinite|World Elite|Preferred|Reserve|Sapphire|Freedom|Cash Back|Rewards|Premier)?)"
        )
        .unwrap(),
        Regex::new(
            r"(?i)(Platinum|Gold|Silver|Classic|Signature|Infinite|World Elite|Preferred|Reserve|Sapphire|Freedom)\s+(?:Card|Credit)"
        )
        .unwrap(),
    ];

    /// Billing cycle rules. The first and third capture two dates, the
    /// second captures one; a present second group selects the range
    /// shape when the cycle is built.
    pub static ref BILLING_CYCLE_RULES: Vec<Regex> = vec![
        Regex::new(
            r"(?i)(?:Billing|Statement)\s+(?:Period|Cycle|Date)[:\s]+(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})\s+(?:to|through|-)\s+(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})"
        )
        .unwrap(),
        Regex::new(
            r"(?i)(?:Statement|Billing)\s+(?:Closing|Period)\s+Date[:\s]+(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})"
        )
        .unwrap(),
        // long-form range anywhere: "January 1, 2024 to January 31, 2024"
        Regex::new(r"(?i)(\w+\s+\d{1,2},?\s+\d{4})\s+(?:to|through|-)\s+(\w+\s+\d{1,2},?\s+\d{4})")
            .unwrap(),
    ];

    /// Payment due date rules; the captured date is returned verbatim.
    pub static ref DUE_DATE_RULES: Vec<Regex> = vec![
        Regex::new(
            r"(?i)(?:Payment|Pay)\s+Due\s+(?:Date|By)[:\s]+(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})"
        )
        .unwrap(),
        Regex::new(r"(?i)(?:Payment|Pay)\s+Due[:\s]+(\w+\s+\d{1,2},?\s+\d{4})").unwrap(),
        Regex::new(r"(?i)Due\s+Date[:\s]+(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})").unwrap(),
    ];

    /// Labeled balance rules. Unlike the chains above, every rule is
    /// scanned globally for all non-overlapping occurrences.
    pub static ref BALANCE_RULES: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:New|Total|Current)\s+Balance[:\s]+\$?([\d,]+\.\d{2})").unwrap(),
        Regex::new(r"(?i)(?:Balance|Amount)\s+Due[:\s]+\$?([\d,]+\.\d{2})").unwrap(),
        Regex::new(r"(?i)(?:Total|Outstanding)\s+(?:Amount|Balance)[:\s]+\$?([\d,]+\.\d{2})")
            .unwrap(),
        Regex::new(r"(?i)Minimum\s+Payment(?:\s+Due)?[:\s]+\$?([\d,]+\.\d{2})").unwrap(),
    ];

    /// Transaction line with a transaction date, an optional post date,
    /// a description, and an amount.
    pub static ref TRANSACTION_TWO_DATE: Regex = Regex::new(
        r"(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})\s+(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4})?\s*([A-Za-z][A-Za-z0-9\s.\-*#]{3,}?)\s+\$?([\d,]+\.\d{2})"
    )
    .unwrap();

    /// Transaction line with a single short `MM/DD` date.
    pub static ref TRANSACTION_SINGLE_DATE: Regex = Regex::new(
        r"(\d{1,2}/\d{1,2})\s+([A-Za-z][A-Za-z0-9\s.\-*#]{3,}?)\s+\$?([\d,]+\.\d{2})"
    )
    .unwrap();
}
