//! Validation of tfws-adoption manifests.
//!
//! An adoption manifest must declare an `adoption` object carrying two boolean
//! flags. Top-level `version`, `domain` and `contact` are recommended and only
//! produce warnings when absent.

use serde_json::Value;

use crate::document::Document;

use super::{Halt, Kind, KindValidator, ValidationResult};

/// Fixes suggested when the `adoption` object itself is unusable.
const ADOPTION_FIXES: &[&str] = &[
    "Add 'version': '1.0' (recommended)",
    "Add 'domain': '<your-domain>' (recommended)",
    "Add 'adoption': { 'self_declared': true, 'no_central_authority': true }",
    "Add 'contact': 'security@your-domain' (recommended)",
];

/// Boolean flags required inside `adoption`, in check order.
const REQUIRED_FLAGS: &[&str] = &["self_declared", "no_central_authority"];

/// Recommended top-level fields and the example value suggested for each.
const RECOMMENDED_FIELDS: &[(&str, &str)] = &[
    ("version", "1.0"),
    ("domain", "<your-domain>"),
    ("contact", "security@your-domain"),
];

pub struct AdoptionValidator;

impl KindValidator for AdoptionValidator {
    fn kind(&self) -> Kind {
        Kind::TfwsAdoption
    }

    fn validate(&self, doc: &Document, result: &mut ValidationResult) -> Result<(), Halt> {
        let adoption = match doc.get("adoption") {
            Some(Value::Object(map)) => map,
            _ => {
                return Err(result.fail(
                    "Missing required field: 'adoption' (object)",
                    ADOPTION_FIXES,
                ))
            }
        };

        for flag in REQUIRED_FLAGS {
            if !matches!(adoption.get(*flag), Some(Value::Bool(_))) {
                let fix = format!("set adoption.{} to true/false", flag);
                return Err(result.fail(
                    format!("adoption.{} must be boolean", flag),
                    &[fix.as_str()],
                ));
            }
        }

        for (field, example) in RECOMMENDED_FIELDS {
            if !doc.contains_key(field) {
                result.warn(format!("{}: missing '{}' (recommended)", self.kind(), field));
                result.suggest(
                    self.kind(),
                    &format!("add top-level '{}': '{}'", field, example),
                );
            }
        }

        result.ok("Valid tfws-adoption");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::Severity;
    use serde_json::json;

    fn run(value: serde_json::Value) -> ValidationResult {
        let doc = Document::from_value(value, "tfws-adoption.json").unwrap();
        let mut result = ValidationResult::new(Kind::TfwsAdoption);
        let _ = AdoptionValidator.validate(&doc, &mut result);
        result
    }

    fn lines(result: &ValidationResult) -> Vec<String> {
        result.diagnostics.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_complete_manifest() {
        let result = run(json!({
            "adoption": {"self_declared": true, "no_central_authority": false},
            "version": "1.0",
            "domain": "x",
            "contact": "y"
        }));
        assert!(result.passed());
        assert_eq!(lines(&result), vec!["OK: Valid tfws-adoption"]);
    }

    #[test]
    fn test_missing_adoption_object() {
        let result = run(json!({"adoption": []}));
        assert!(!result.passed());
        assert_eq!(
            lines(&result),
            vec![
                "ERROR: Missing required field: 'adoption' (object)",
                "WARNING: [suggestion] tfws-adoption: Add 'version': '1.0' (recommended)",
                "WARNING: [suggestion] tfws-adoption: Add 'domain': '<your-domain>' (recommended)",
                "WARNING: [suggestion] tfws-adoption: Add 'adoption': { 'self_declared': true, 'no_central_authority': true }",
                "WARNING: [suggestion] tfws-adoption: Add 'contact': 'security@your-domain' (recommended)",
            ]
        );
    }

    #[test]
    fn test_self_declared_checked_first() {
        let result = run(json!({"adoption": {"self_declared": "yes"}}));
        assert_eq!(
            lines(&result),
            vec![
                "ERROR: adoption.self_declared must be boolean",
                "WARNING: [suggestion] tfws-adoption: set adoption.self_declared to true/false",
            ]
        );
    }

    #[test]
    fn test_no_central_authority_required() {
        let result = run(json!({"adoption": {"self_declared": false, "no_central_authority": 1}}));
        assert!(!result.passed());
        assert_eq!(
            lines(&result)[0],
            "ERROR: adoption.no_central_authority must be boolean"
        );
        assert_eq!(result.count(Severity::Ok), 0);
    }

    #[test]
    fn test_recommendations_are_warnings_only() {
        let result = run(json!({"adoption": {"self_declared": true, "no_central_authority": true}}));
        assert!(result.passed());
        assert_eq!(
            lines(&result),
            vec![
                "WARNING: tfws-adoption: missing 'version' (recommended)",
                "WARNING: [suggestion] tfws-adoption: add top-level 'version': '1.0'",
                "WARNING: tfws-adoption: missing 'domain' (recommended)",
                "WARNING: [suggestion] tfws-adoption: add top-level 'domain': '<your-domain>'",
                "WARNING: tfws-adoption: missing 'contact' (recommended)",
                "WARNING: [suggestion] tfws-adoption: add top-level 'contact': 'security@your-domain'",
                "OK: Valid tfws-adoption",
            ]
        );
    }

    #[test]
    fn test_null_recommended_field_counts_as_present() {
        let result = run(json!({
            "adoption": {"self_declared": true, "no_central_authority": true},
            "version": null,
            "domain": null,
            "contact": null
        }));
        assert_eq!(lines(&result), vec!["OK: Valid tfws-adoption"]);
    }
}
