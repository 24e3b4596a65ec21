//! Statement data models with a stable JSON wire shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A structured record extracted from one statement document.
///
/// The JSON shape is an external contract: field names are fixed and
/// absent optional fields are omitted from the output, never serialized
/// as `null`. The record is immutable once constructed; the engine
/// produces it once per input text and hands ownership to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRecord {
    /// Canonical issuer name, or `"Unknown"` when no alias matched.
    pub issuer: String,

    /// Last four digits of the card number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_last_four_digits: Option<String>,

    /// Card product name (network and tier), trimmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_variant: Option<String>,

    /// Statement period, either a date range or a single closing date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<BillingCycle>,

    /// Payment due date, verbatim as printed in the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_due_date: Option<String>,

    /// Labeled monetary amounts (new balance, minimum payment, ...).
    /// Absent when no label matched, never an empty map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_balance: Option<BTreeMap<String, String>>,

    /// Transactions in document line order, at most ten.
    pub transactions: Vec<Transaction>,
}

impl StatementRecord {
    /// Names of the optional fields that were not extracted.
    ///
    /// The issuer counts as missing when it fell back to `"Unknown"`.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.issuer == "Unknown" {
            missing.push("issuer");
        }
        if self.card_last_four_digits.is_none() {
            missing.push("card_last_four_digits");
        }
        if self.card_variant.is_none() {
            missing.push("card_variant");
        }
        if self.billing_cycle.is_none() {
            missing.push("billing_cycle");
        }
        if self.payment_due_date.is_none() {
            missing.push("payment_due_date");
        }
        if self.total_balance.is_none() {
            missing.push("total_balance");
        }
        if self.transactions.is_empty() {
            missing.push("transactions");
        }

        missing
    }
}

/// The statement period.
///
/// The two shapes are mutually exclusive and chosen structurally when
/// the cycle is extracted: a captured second date selects the range
/// form, otherwise the single closing date form. Serialized untagged so
/// the wire shape is exactly `{start_date, end_date}` or
/// `{closing_date}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BillingCycle {
    /// Start/end date pair.
    Range {
        start_date: String,
        end_date: String,
    },
    /// Single closing date.
    Closing { closing_date: String },
}

/// One transaction line, in one of two shapes depending on which line
/// pattern matched.
///
/// `description` is trimmed and always longer than three characters;
/// `amount` is always `$`-prefixed with comma separators preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Transaction {
    /// Line carrying a transaction date and a post date. When the line
    /// printed only one date, `post_date` repeats `transaction_date`.
    TwoDate {
        transaction_date: String,
        post_date: String,
        description: String,
        amount: String,
    },
    /// Line carrying a single short `MM/DD` date.
    SingleDate {
        date: String,
        description: String,
        amount: String,
    },
}

impl Transaction {
    /// Merchant or payment description.
    pub fn description(&self) -> &str {
        match self {
            Transaction::TwoDate { description, .. } => description,
            Transaction::SingleDate { description, .. } => description,
        }
    }

    /// Dollar-prefixed amount text.
    pub fn amount(&self) -> &str {
        match self {
            Transaction::TwoDate { amount, .. } => amount,
            Transaction::SingleDate { amount, .. } => amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sparse_record() -> StatementRecord {
        StatementRecord {
            issuer: "Chase".to_string(),
            card_last_four_digits: Some("4242".to_string()),
            card_variant: None,
            billing_cycle: None,
            payment_due_date: None,
            total_balance: None,
            transactions: Vec::new(),
        }
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let json = serde_json::to_string(&sparse_record()).unwrap();

        assert_eq!(
            json,
            r#"{"issuer":"Chase","card_last_four_digits":"4242","transactions":[]}"#
        );
    }

    #[test]
    fn billing_cycle_range_wire_shape() {
        let cycle = BillingCycle::Range {
            start_date: "01/01/2024".to_string(),
            end_date: "01/31/2024".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&cycle).unwrap(),
            r#"{"start_date":"01/01/2024","end_date":"01/31/2024"}"#
        );
    }

    #[test]
    fn billing_cycle_closing_wire_shape() {
        let cycle = BillingCycle::Closing {
            closing_date: "02/15/2024".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&cycle).unwrap(),
            r#"{"closing_date":"02/15/2024"}"#
        );
    }

    #[test]
    fn transaction_wire_shapes() {
        let two_date = Transaction::TwoDate {
            transaction_date: "01/05/2024".to_string(),
            post_date: "01/06/2024".to_string(),
            description: "AMAZON MKTP".to_string(),
            amount: "$43.10".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&two_date).unwrap(),
            r#"{"transaction_date":"01/05/2024","post_date":"01/06/2024","description":"AMAZON MKTP","amount":"$43.10"}"#
        );

        let single_date = Transaction::SingleDate {
            date: "01/05".to_string(),
            description: "COFFEE SHOP".to_string(),
            amount: "$4.50".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&single_date).unwrap(),
            r#"{"date":"01/05","description":"COFFEE SHOP","amount":"$4.50"}"#
        );
    }

    #[test]
    fn round_trip_preserves_absent_fields() {
        let record = sparse_record();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: StatementRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, record);
        assert!(parsed.card_variant.is_none());
        assert!(parsed.total_balance.is_none());
    }

    #[test]
    fn round_trip_preserves_both_transaction_shapes() {
        let record = StatementRecord {
            issuer: "Discover".to_string(),
            card_last_four_digits: None,
            card_variant: Some("Discover Cash Back".to_string()),
            billing_cycle: Some(BillingCycle::Closing {
                closing_date: "03/01/2024".to_string(),
            }),
            payment_due_date: Some("03/25/2024".to_string()),
            total_balance: Some(BTreeMap::from([(
                "New Balance".to_string(),
                "$1,204.50".to_string(),
            )])),
            transactions: vec![
                Transaction::TwoDate {
                    transaction_date: "02/01/2024".to_string(),
                    post_date: "02/01/2024".to_string(),
                    description: "GROCERY STORE".to_string(),
                    amount: "$88.12".to_string(),
                },
                Transaction::SingleDate {
                    date: "2/3".to_string(),
                    description: "GAS STATION".to_string(),
                    amount: "$35.00".to_string(),
                },
            ],
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: StatementRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn missing_fields_lists_unknown_issuer_and_absent_fields() {
        let record = StatementRecord {
            issuer: "Unknown".to_string(),
            card_last_four_digits: None,
            card_variant: None,
            billing_cycle: None,
            payment_due_date: None,
            total_balance: None,
            transactions: Vec::new(),
        };

        assert_eq!(
            record.missing_fields(),
            vec![
                "issuer",
                "card_last_four_digits",
                "card_variant",
                "billing_cycle",
                "payment_due_date",
                "total_balance",
                "transactions",
            ]
        );
    }
}
