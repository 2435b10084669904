//! Property-based tests for totals and currency formatting.

use proptest::prelude::*;
use serde_json::{json, Value};

use finexus_core::{format_currency, total, CategoryRecord, DEFAULT_MONETARY_KEYS};

/// A `value` attribute that is a number, a string, null, or missing.
fn value_strategy() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        (-1_000_000i64..1_000_000).prop_map(|n| Some(json!(n))),
        "[a-z]{0,6}".prop_map(|s| Some(json!(s))),
        Just(Some(Value::Null)),
        Just(None),
    ]
}

fn to_record(value: &Option<Value>) -> CategoryRecord {
    let mut fields = serde_json::Map::new();
    fields.insert("name".into(), json!("item"));
    if let Some(v) = value {
        fields.insert("value".into(), v.clone());
    }
    CategoryRecord::new(fields)
}

proptest! {
    #[test]
    fn total_is_sum_of_numeric_values(values in prop::collection::vec(value_strategy(), 0..40)) {
        let records: Vec<CategoryRecord> = values.iter().map(to_record).collect();
        let expected: i64 = values
            .iter()
            .filter_map(|v| v.as_ref().and_then(Value::as_i64))
            .sum();

        prop_assert_eq!(total(&records, DEFAULT_MONETARY_KEYS), expected as f64);
    }

    #[test]
    fn currency_digits_survive_grouping(n in 0u64..10_000_000_000) {
        let formatted = format_currency(n as f64);
        prop_assert!(formatted.starts_with('$'));
        let digits: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
        prop_assert_eq!(digits, n.to_string());
    }
}
