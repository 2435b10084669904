//! View model for one record card.

use crate::format::format_currency;
use crate::record::CategoryRecord;
use crate::schema::ColumnSchema;

/// What a card shows for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordCard {
    /// `"<label>: $<amount>"` for each monetary column holding a number
    pub headline: Option<String>,
    /// `(label, value)` for every generic column, in column order
    pub rows: Vec<(&'static str, String)>,
}

impl RecordCard {
    pub fn build(record: &CategoryRecord, columns: &[ColumnSchema]) -> Self {
        let headline = columns
            .iter()
            .filter(|c| c.is_monetary())
            .filter_map(|c| {
                record
                    .number(c.key)
                    .map(|n| format!("{}: {}", c.label, format_currency(n)))
            })
            .reduce(|a, b| format!("{a} · {b}"));

        let rows = columns
            .iter()
            .filter(|c| !c.is_monetary())
            .map(|c| (c.label, record.display(c.key)))
            .collect();

        Self { headline, rows }
    }

    /// Plain-text lines, headline first; used by the CLI.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        if let Some(headline) = &self.headline {
            lines.push(headline.clone());
        }
        lines.extend(self.rows.iter().map(|(label, value)| format!("{label}: {value}")));
        lines
    }
}
