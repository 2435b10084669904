//! In-progress form state and numeric coercion.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{FinexusError, FinexusResult};
use crate::schema::{FieldKind, FieldSchema};

/// Largest integer an f64 holds exactly (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// A coerced form value.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftValue {
    Text(String),
    Number(f64),
    /// Text typed into a number field that does not parse as a finite number
    Invalid(String),
}

impl DraftValue {
    /// Interpret `raw` according to the field kind.
    ///
    /// Returns `None` for an empty number field, which leaves the key out of
    /// the draft entirely.
    pub fn coerce(kind: FieldKind, raw: &str) -> Option<Self> {
        match kind {
            FieldKind::Text => Some(DraftValue::Text(raw.to_string())),
            FieldKind::Number => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return None;
                }
                match trimmed.parse::<f64>() {
                    Ok(n) if n.is_finite() => Some(DraftValue::Number(n)),
                    _ => Some(DraftValue::Invalid(raw.to_string())),
                }
            }
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            DraftValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn to_json(&self, field: &str) -> FinexusResult<Value> {
        match self {
            DraftValue::Text(s) => Ok(Value::String(s.clone())),
            DraftValue::Number(n) => Ok(number_to_json(*n)),
            DraftValue::Invalid(input) => Err(FinexusError::Coercion {
                field: field.to_string(),
                input: input.clone(),
            }),
        }
    }
}

/// Integral values go out as JSON integers so `15000` is not sent as `15000.0`.
pub(crate) fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < MAX_EXACT_INT {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// Mapping from field name to value for one unsaved submission.
///
/// Keys only ever come from a [`FieldSchema`], so they are always a subset of
/// the form's field names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    values: BTreeMap<&'static str, DraftValue>,
    raw: BTreeMap<&'static str, String>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keystroke: replaces exactly the entry for `field`.
    pub fn set(&mut self, field: &FieldSchema, raw: &str) {
        match DraftValue::coerce(field.kind, raw) {
            Some(value) => {
                self.values.insert(field.name, value);
                self.raw.insert(field.name, raw.to_string());
            }
            None => {
                self.values.remove(field.name);
                self.raw.remove(field.name);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&DraftValue> {
        self.values.get(name)
    }

    /// Text to show in the input for `name` (blank when unset).
    pub fn input_text(&self, name: &str) -> &str {
        self.raw.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.raw.clear();
    }

    /// Fields whose text could not be read as a number.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        self.values
            .iter()
            .filter(|(_, v)| matches!(v, DraftValue::Invalid(_)))
            .map(|(k, _)| *k)
            .collect()
    }

    /// JSON body for the add request.
    ///
    /// Fails on the first field holding non-numeric text in a number field.
    pub fn to_payload(&self) -> FinexusResult<Map<String, Value>> {
        let mut payload = Map::new();
        for (name, value) in &self.values {
            payload.insert((*name).to_string(), value.to_json(name)?);
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const VALUE: FieldSchema = FieldSchema::number("value", "Value", "1800");
    const NAME: FieldSchema = FieldSchema::text("name", "Name", "MacBook Pro");

    #[test]
    fn number_field_coerces_to_number() {
        let mut draft = Draft::new();
        draft.set(&VALUE, "15000");
        assert_eq!(draft.get("value"), Some(&DraftValue::Number(15000.0)));
        assert_eq!(draft.to_payload().unwrap()["value"], json!(15000));
    }

    #[test]
    fn fractional_numbers_stay_fractional() {
        let mut draft = Draft::new();
        draft.set(&VALUE, " 0.5 ");
        assert_eq!(draft.get("value").and_then(DraftValue::as_number), Some(0.5));
        assert_eq!(draft.to_payload().unwrap()["value"], json!(0.5));
        // raw text is kept for the input
        assert_eq!(draft.input_text("value"), " 0.5 ");
    }

    #[test]
    fn unparsable_number_is_invalid() {
        let mut draft = Draft::new();
        draft.set(&VALUE, "12abc");
        assert_eq!(draft.get("value"), Some(&DraftValue::Invalid("12abc".into())));
        assert_eq!(draft.invalid_fields(), vec!["value"]);
        assert_eq!(
            draft.to_payload(),
            Err(FinexusError::Coercion {
                field: "value".into(),
                input: "12abc".into()
            })
        );
    }

    #[test]
    fn non_finite_numbers_are_invalid() {
        for input in ["NaN", "inf", "-infinity", "1e999"] {
            let value = DraftValue::coerce(FieldKind::Number, input);
            assert_eq!(value, Some(DraftValue::Invalid(input.to_string())), "{input}");
        }
    }

    #[test]
    fn clearing_a_number_field_removes_the_key() {
        let mut draft = Draft::new();
        draft.set(&VALUE, "10");
        draft.set(&VALUE, "");
        assert!(draft.is_empty());
        assert_eq!(draft.input_text("value"), "");
    }

    #[test]
    fn empty_text_is_kept_as_empty_string() {
        let mut draft = Draft::new();
        draft.set(&NAME, "");
        assert_eq!(draft.to_payload().unwrap()["name"], json!(""));
    }

    #[test]
    fn set_updates_only_one_key() {
        let mut draft = Draft::new();
        draft.set(&NAME, "AAPL");
        draft.set(&VALUE, "5000");
        draft.set(&NAME, "MSFT");
        assert_eq!(draft.len(), 2);
        assert_eq!(draft.get("name"), Some(&DraftValue::Text("MSFT".into())));
        assert_eq!(draft.get("value"), Some(&DraftValue::Number(5000.0)));
    }

    #[test]
    fn huge_integers_fall_back_to_float() {
        assert_eq!(number_to_json(1e20), json!(1e20));
        assert_eq!(number_to_json(-3.0), json!(-3));
    }
}
