//! Validation of ai-trust-hub descriptors.
//!
//! Trust hubs come in many shapes, so almost nothing here is fatal: a missing
//! payload anchor is a warning and the optional field checks accept any JSON
//! value.

use serde_json::Value;

use crate::document::Document;

use super::kind::TRUST_HUB_ANCHORS;
use super::{Halt, Kind, KindValidator, ValidationResult};

/// Optional descriptor fields whose value type is checked when present.
const OPTIONAL_FIELDS: &[&str] = &[
    "contact",
    "notes",
    "repo",
    "public_key",
    "generated_by",
    "timestamp",
];

pub struct TrustHubValidator;

impl KindValidator for TrustHubValidator {
    fn kind(&self) -> Kind {
        Kind::AiTrustHub
    }

    fn validate(&self, doc: &Document, result: &mut ValidationResult) -> Result<(), Halt> {
        let kind = self.kind();

        if !doc.keys().any(|k| TRUST_HUB_ANCHORS.contains(k)) {
            result.warn(format!(
                "{}: expected at least one of fields: signals/endpoints/resources/hub/links (permissive)",
                kind
            ));
        }

        for field in OPTIONAL_FIELDS {
            if let Some(value) = doc.get(field) {
                if !is_plain_json(value) {
                    return Err(result.fail(
                        format!("{}: field '{}' has unexpected type", kind, field),
                        &[],
                    ));
                }
            }
        }

        result.ok(format!("Valid (permissive) {}", kind));
        Ok(())
    }
}

/// Accepts every JSON value type. Kept as an explicit check so the optional
/// fields keep a place to tighten later.
fn is_plain_json(value: &Value) -> bool {
    match value {
        Value::String(_)
        | Value::Number(_)
        | Value::Bool(_)
        | Value::Null
        | Value::Object(_)
        | Value::Array(_) => true,
    }
}
