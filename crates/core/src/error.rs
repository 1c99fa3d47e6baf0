use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Validation failed: {0}")]
    InvalidFields(FieldErrors),
}

/// Field-level validation failures, keyed by field name.
///
/// Serializes as `{"title": ["This field is required."], ...}`. Keys are kept
/// sorted so error bodies are stable across requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`. Multiple messages per field are kept in order.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    /// Record the error from `result` under `field`, if any.
    pub fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for one field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// `Ok(())` when nothing was recorded, otherwise [`CoreError::InvalidFields`].
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_field_errors_are_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn collected_errors_become_invalid_fields() {
        let mut errors = FieldErrors::new();
        errors.add("title", "This field is required.");
        errors.check("tags", Err("too long".to_string()));
        errors.check("status", Ok(()));

        let err = errors.into_result().unwrap_err();
        assert_matches!(err, CoreError::InvalidFields(ref fields) if fields.get("tags").is_some());
        assert_eq!(
            err.to_string(),
            "Validation failed: tags: too long; title: This field is required."
        );
    }

    #[test]
    fn field_errors_serialize_as_map_of_lists() {
        let mut errors = FieldErrors::new();
        errors.add("title", "a");
        errors.add("title", "b");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"title": ["a", "b"]}));
    }
}
