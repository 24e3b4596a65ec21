//! Billing cycle and payment due date extraction.
//!
//! Date strings are returned verbatim as printed; the source formats
//! vary too much (`MM/DD/YYYY`, `Month DD, YYYY`) to re-parse them into
//! calendar types without losing the original text.

use crate::models::statement::BillingCycle;

use super::first_capture;
use super::patterns::{BILLING_CYCLE_RULES, DUE_DATE_RULES};

/// Extract the statement period.
///
/// The shape is decided structurally: when the matching rule captured a
/// second date the result is the start/end range form, otherwise the
/// single closing date form.
pub fn extract_billing_cycle(text: &str) -> Option<BillingCycle> {
    BILLING_CYCLE_RULES
        .iter()
        .find_map(|rule| rule.captures(text))
        .map(|caps| match caps.get(2) {
            Some(end) => BillingCycle::Range {
                start_date: caps[1].to_string(),
                end_date: end.as_str().to_string(),
            },
            None => BillingCycle::Closing {
                closing_date: caps[1].to_string(),
            },
        })
}

/// Extract the payment due date, verbatim as printed.
pub fn extract_due_date(text: &str) -> Option<String> {
    first_capture(&DUE_DATE_RULES, text).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn labeled_period_yields_range_shape() {
        let cycle = extract_billing_cycle("Billing Period: 01/01/2024 to 01/31/2024");
        assert_eq!(
            cycle,
            Some(BillingCycle::Range {
                start_date: "01/01/2024".to_string(),
                end_date: "01/31/2024".to_string(),
            })
        );
    }

    #[test]
    fn closing_date_yields_closing_shape() {
        let cycle = extract_billing_cycle("Statement Closing Date: 02/15/2024");
        assert_eq!(
            cycle,
            Some(BillingCycle::Closing {
                closing_date: "02/15/2024".to_string(),
            })
        );
    }

    #[test]
    fn long_form_range_anywhere_in_text() {
        let cycle = extract_billing_cycle("Activity from January 1, 2024 through January 31, 2024");
        assert_eq!(
            cycle,
            Some(BillingCycle::Range {
                start_date: "January 1, 2024".to_string(),
                end_date: "January 31, 2024".to_string(),
            })
        );
    }

    #[test]
    fn labeled_rule_outranks_long_form_rule() {
        let text = "Statement Closing Date: 02/15/2024\nJanuary 1, 2024 to January 31, 2024";
        assert_eq!(
            extract_billing_cycle(text),
            Some(BillingCycle::Closing {
                closing_date: "02/15/2024".to_string(),
            })
        );
    }

    #[test]
    fn cycle_absent_without_a_match() {
        assert_eq!(extract_billing_cycle("no dates here"), None);
    }

    #[test]
    fn numeric_due_date() {
        assert_eq!(
            extract_due_date("Payment Due Date: 03/15/2024"),
            Some("03/15/2024".to_string())
        );
        assert_eq!(
            extract_due_date("Pay Due By: 3-15-24"),
            Some("3-15-24".to_string())
        );
    }

    #[test]
    fn long_form_due_date() {
        assert_eq!(
            extract_due_date("Payment Due: March 15, 2024"),
            Some("March 15, 2024".to_string())
        );
    }

    #[test]
    fn generic_due_date_label() {
        assert_eq!(
            extract_due_date("Due Date: 04/01/2024"),
            Some("04/01/2024".to_string())
        );
    }

    #[test]
    fn due_date_absent_without_a_match() {
        assert_eq!(extract_due_date("nothing due"), None);
    }
}
