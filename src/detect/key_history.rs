//! Validation of key-history records.

use serde_json::Value;

use crate::document::Document;

use super::{Halt, Kind, KindValidator, ValidationResult};

/// Accepted list fields, in check order. Only the first present one is checked.
const LIST_FIELDS: &[&str] = &["keys", "history"];

pub struct KeyHistoryValidator;

impl KindValidator for KeyHistoryValidator {
    fn kind(&self) -> Kind {
        Kind::KeyHistory
    }

    fn validate(&self, doc: &Document, result: &mut ValidationResult) -> Result<(), Halt> {
        let kind = self.kind();

        if let Some((field, value)) = LIST_FIELDS
            .iter()
            .find_map(|f| doc.get(f).map(|v| (*f, v)))
        {
            if !matches!(value, Value::Array(_)) {
                return Err(result.fail(format!("{}: '{}' must be a list", kind, field), &[]));
            }
            result.ok(format!("Valid {} ({} list)", kind, field));
            return Ok(());
        }

        // Permissive: neither list present is only worth a warning.
        result.warn(format!("{}: expected 'keys' or 'history' list (permissive)", kind));
        result.suggest(
            kind,
            "add either 'keys': [] or 'history': [] at the top level",
        );
        result.ok(format!("Valid (permissive) {}", kind));
        Ok(())
    }
}
