//! Labeled balance extraction (new balance, amount due, minimum payment).

use std::collections::BTreeMap;

use super::patterns::BALANCE_RULES;

/// Extract every labeled amount found in the text.
///
/// Unlike the first-match chains, every rule here is scanned globally
/// for all non-overlapping occurrences. The label is the matched text
/// up to the first `:` (the whole match when no colon is present);
/// when the same derived label occurs more than once the later amount
/// wins. Amounts keep their comma separators and gain a `$` prefix.
/// Zero matches yield `None`, never an empty map.
pub fn extract_balances(text: &str) -> Option<BTreeMap<String, String>> {
    let mut balances = BTreeMap::new();

    for rule in BALANCE_RULES.iter() {
        for caps in rule.captures_iter(text) {
            let full = &caps[0];
            let label = full.split(':').next().unwrap_or(full).trim();
            balances.insert(label.to_string(), format!("${}", &caps[1]));
        }
    }

    if balances.is_empty() { None } else { Some(balances) }
}
