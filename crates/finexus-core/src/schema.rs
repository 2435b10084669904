//! Declarative field and column descriptions.
//!
//! These are configured once per category and never mutated.

/// How a form input's text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    /// Coerced to a JSON number before submission
    Number,
}

impl FieldKind {
    /// HTML input `type` attribute for this kind.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
        }
    }
}

/// One input of a category's add form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Key in the submitted JSON object; must match the server schema
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

impl FieldSchema {
    pub const fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            placeholder,
        }
    }

    pub const fn number(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Number,
            placeholder,
        }
    }
}

/// How a record attribute is rendered on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnKind {
    /// Summed into the section total and shown as a currency headline
    Monetary,
    #[default]
    Generic,
}

/// Display order and label for one record attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSchema {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
}

impl ColumnSchema {
    pub const fn generic(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: ColumnKind::Generic,
        }
    }

    pub const fn monetary(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: ColumnKind::Monetary,
        }
    }

    pub fn is_monetary(&self) -> bool {
        self.kind == ColumnKind::Monetary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_constructors() {
        let name = FieldSchema::text("name", "Name", "MacBook Pro");
        assert_eq!(name.kind, FieldKind::Text);
        assert_eq!(name.kind.input_type(), "text");

        let value = FieldSchema::number("value", "Value", "1800");
        assert_eq!(value.kind, FieldKind::Number);
        assert_eq!(value.kind.input_type(), "number");
    }

    #[test]
    fn column_kinds() {
        assert!(ColumnSchema::monetary("value_usd", "Value (USD)").is_monetary());
        assert!(!ColumnSchema::generic("amount", "Amount").is_monetary());
        assert_eq!(ColumnKind::default(), ColumnKind::Generic);
    }
}
