//! Dynamic form model: a field list, a draft, and submit-then-reset.

use serde_json::{Map, Value};

use crate::draft::Draft;
use crate::error::{FinexusError, FinexusResult};
use crate::schema::FieldSchema;

/// State behind a schema-driven add form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormModel {
    fields: Vec<FieldSchema>,
    draft: Draft,
}

impl FormModel {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self {
            fields,
            draft: Draft::new(),
        }
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Apply the text of one edited input.
    pub fn set(&mut self, name: &str, raw: &str) -> FinexusResult<()> {
        let field = *self
            .field(name)
            .ok_or_else(|| FinexusError::UnknownField(name.to_string()))?;
        self.draft.set(&field, raw);
        Ok(())
    }

    /// Produce the payload for the submission callback and reset the draft.
    ///
    /// An empty or partial draft is a valid submission. A number field holding
    /// non-numeric text blocks submission and leaves the draft untouched.
    pub fn submit(&mut self) -> FinexusResult<Map<String, Value>> {
        let payload = self.draft.to_payload()?;
        self.draft.clear();
        Ok(payload)
    }
}
