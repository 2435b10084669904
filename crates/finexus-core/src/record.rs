//! Records returned by the finance API and the per-section total.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::format::format_number;

/// Keys tried for a record's amount when a section declares no monetary column.
pub const DEFAULT_MONETARY_KEYS: &[&str] = &["value", "value_usd"];

/// One entry of a category, exactly as the server sent it.
///
/// Records carry no client-side identity; they are keyed by position only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryRecord(Map<String, Value>);

impl CategoryRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Finite numeric value of `key`, if it holds a JSON number.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.0
            .get(key)
            .and_then(Value::as_f64)
            .filter(|n| n.is_finite())
    }

    /// Stringified attribute for a card row; missing and null render blank.
    pub fn display(&self, key: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(value) => display_value(value),
        }
    }

    /// Amount that counts toward the section total.
    ///
    /// The first key holding a non-zero number wins; anything else counts as 0.
    pub fn monetary_amount(&self, keys: &[&str]) -> f64 {
        keys.iter()
            .filter_map(|key| self.number(key))
            .find(|n| *n != 0.0)
            .unwrap_or(0.0)
    }
}

impl From<Map<String, Value>> for CategoryRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format_number(f),
            _ => n.to_string(),
        },
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Sum of every record's monetary amount.
pub fn total(records: &[CategoryRecord], keys: &[&str]) -> f64 {
    records.iter().map(|r| r.monetary_amount(keys)).sum()
}

/// Parse a response body: it must be a JSON array of objects.
pub fn parse_records(body: &[u8]) -> serde_json::Result<Vec<CategoryRecord>> {
    serde_json::from_slice(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> CategoryRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn total_ignores_missing_and_non_numeric() {
        let records = vec![
            record(json!({"value": 100})),
            record(json!({"value": "x"})),
            record(json!({})),
        ];
        assert_eq!(total(&records, DEFAULT_MONETARY_KEYS), 100.0);
    }

    #[test]
    fn falls_back_to_value_usd() {
        let records = vec![
            record(json!({"symbol": "BTC", "value_usd": 15000})),
            record(json!({"value": 0, "value_usd": 20})),
            record(json!({"value": 5, "value_usd": 20})),
        ];
        assert_eq!(total(&records, DEFAULT_MONETARY_KEYS), 15025.0);
    }

    #[test]
    fn explicit_monetary_keys() {
        let records = vec![record(json!({"amount": 0.5, "value_usd": 15000.5}))];
        assert_eq!(total(&records, &["value_usd"]), 15000.5);
        assert_eq!(total(&records, &[]), 0.0);
    }

    #[test]
    fn empty_collection_totals_zero() {
        assert_eq!(total(&[], DEFAULT_MONETARY_KEYS), 0.0);
    }

    #[test]
    fn display_rules() {
        let r = record(json!({
            "name": "MacBook",
            "value": 1800,
            "ratio": 1800.0,
            "amount": 0.5,
            "notes": null,
            "tags": ["a", "b"],
            "done": true,
        }));
        assert_eq!(r.display("name"), "MacBook");
        assert_eq!(r.display("value"), "1800");
        assert_eq!(r.display("ratio"), "1800");
        assert_eq!(r.display("amount"), "0.5");
        assert_eq!(r.display("notes"), "");
        assert_eq!(r.display("missing"), "");
        assert_eq!(r.display("tags"), "a,b");
        assert_eq!(r.display("done"), "true");
    }

    #[test]
    fn parse_records_requires_array_of_objects() {
        assert_eq!(parse_records(br#"[{"name":"a"}]"#).unwrap().len(), 1);
        assert!(parse_records(b"[]").unwrap().is_empty());
        assert!(parse_records(br#"{"name":"a"}"#).is_err());
        assert!(parse_records(b"[1, 2]").is_err());
        assert!(parse_records(b"<html>").is_err());
    }
}
