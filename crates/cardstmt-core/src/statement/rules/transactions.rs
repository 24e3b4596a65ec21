//! Line-oriented transaction extraction.

use tracing::debug;

use crate::models::statement::Transaction;

use super::patterns::{TRANSACTION_SINGLE_DATE, TRANSACTION_TWO_DATE};

/// A candidate is kept only when its trimmed description is longer
/// than this.
const MIN_DESCRIPTION_LEN: usize = 3;

/// Scan the text line by line, top to bottom, collecting transactions.
///
/// Each line is tried against the two-date pattern first, then the
/// single-date pattern; the first pattern that matches decides the
/// line's shape. Scanning stops once `scan_limit` candidates have been
/// kept and the result is truncated to `max_transactions`, so long
/// statements yield a deterministic sample of their first lines rather
/// than the full history.
pub fn extract_transactions(
    text: &str,
    scan_limit: usize,
    max_transactions: usize,
) -> Vec<Transaction> {
    let mut transactions = Vec::new();

    for line in text.lines() {
        if let Some(caps) = TRANSACTION_TWO_DATE.captures(line) {
            let description = caps[3].trim().to_string();
            if description.len() > MIN_DESCRIPTION_LEN {
                let transaction_date = caps[1].to_string();
                // A missing second date means the line printed only one;
                // the post date repeats the transaction date.
                let post_date = caps
                    .get(2)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_else(|| transaction_date.clone());

                transactions.push(Transaction::TwoDate {
                    transaction_date,
                    post_date,
                    description,
                    amount: format!("${}", &caps[4]),
                });
            }
        } else if let Some(caps) = TRANSACTION_SINGLE_DATE.captures(line) {
            let description = caps[2].trim().to_string();
            if description.len() > MIN_DESCRIPTION_LEN {
                transactions.push(Transaction::SingleDate {
                    date: caps[1].to_string(),
                    description,
                    amount: format!("${}", &caps[3]),
                });
            }
        }

        if transactions.len() >= scan_limit {
            break;
        }
    }

    debug!(
        "kept {} transaction candidates, returning at most {}",
        transactions.len(),
        max_transactions
    );

    transactions.truncate(max_transactions);
    transactions
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SCAN_LIMIT: usize = 15;
    const MAX: usize = 10;

    #[test]
    fn two_date_line_keeps_both_dates() {
        let got = extract_transactions(
            "01/05/2024 01/06/2024 AMAZON MKTP US 43.10",
            SCAN_LIMIT,
            MAX,
        );

        assert_eq!(
            got,
            vec![Transaction::TwoDate {
                transaction_date: "01/05/2024".to_string(),
                post_date: "01/06/2024".to_string(),
                description: "AMAZON MKTP US".to_string(),
                amount: "$43.10".to_string(),
            }]
        );
    }

    #[test]
    fn single_long_date_repeats_as_post_date() {
        let got = extract_transactions("01/05/2024 GROCERY OUTLET $12.99", SCAN_LIMIT, MAX);

        assert_eq!(
            got,
            vec![Transaction::TwoDate {
                transaction_date: "01/05/2024".to_string(),
                post_date: "01/05/2024".to_string(),
                description: "GROCERY OUTLET".to_string(),
                amount: "$12.99".to_string(),
            }]
        );
    }

    #[test]
    fn short_date_line_yields_single_date_shape() {
        let got = extract_transactions("1/5 COFFEE SHOP 4.50", SCAN_LIMIT, MAX);

        assert_eq!(
            got,
            vec![Transaction::SingleDate {
                date: "1/5".to_string(),
                description: "COFFEE SHOP".to_string(),
                amount: "$4.50".to_string(),
            }]
        );
    }

    #[test]
    fn short_descriptions_are_discarded() {
        // "ATM " matches the line pattern but trims to three characters,
        // below the keep threshold.
        let got = extract_transactions("1/5 ATM  4.50", SCAN_LIMIT, MAX);
        assert!(got.is_empty());
    }

    #[test]
    fn non_matching_lines_are_skipped() {
        let text = "Account Activity\n01/05/2024 GROCERY OUTLET 12.99\nThank you for your payment";
        let got = extract_transactions(text, SCAN_LIMIT, MAX);
        assert_eq!(got.len(), 1);
    }

    #[test]
    fn order_follows_document_lines() {
        let text = "1/5 FIRST MERCHANT 1.00\n1/6 SECOND MERCHANT 2.00";
        let got = extract_transactions(text, SCAN_LIMIT, MAX);

        assert_eq!(got.len(), 2);
        assert_eq!(got[0].description(), "FIRST MERCHANT");
        assert_eq!(got[1].description(), "SECOND MERCHANT");
    }

    #[test]
    fn twenty_lines_return_first_ten() {
        let text: String = (1..=20)
            .map(|i| format!("1/{} MERCHANT NUMBER {} {}.00\n", i, i, i))
            .collect();
        let got = extract_transactions(&text, SCAN_LIMIT, MAX);

        assert_eq!(got.len(), 10);
        assert_eq!(got[0].description(), "MERCHANT NUMBER 1");
        assert_eq!(got[9].description(), "MERCHANT NUMBER 10");
    }

    #[test]
    fn scan_stops_at_limit_before_truncation() {
        // Lines 1-15 are kept and stop the scan; line 16 is never
        // reached even though it would match.
        let mut text: String = (1..=15)
            .map(|i| format!("1/{} EARLY MERCHANT {} 1.00\n", i, i))
            .collect();
        text.push_str("1/16 LATE MERCHANT 99.00\n");

        let got = extract_transactions(&text, SCAN_LIMIT, MAX);
        assert_eq!(got.len(), 10);
        assert!(got.iter().all(|t| t.description().starts_with("EARLY")));
    }

    #[test]
    fn caps_are_tunable() {
        let text = "1/1 ALPHA STORE 1.00\n1/2 BRAVO STORE 2.00\n1/3 DELTA STORE 3.00";
        let got = extract_transactions(text, 2, 1);

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].description(), "ALPHA STORE");
    }
}
