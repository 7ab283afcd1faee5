//! Validation runner: detects the kind and dispatches to its validator.

use tracing::{debug, info};

use crate::document::Document;

use super::{detect_kind, Kind, ValidationResult};

/// Validates documents, optionally with a fixed kind instead of detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner {
    forced_kind: Option<Kind>,
}

impl Runner {
    /// Create a new runner that detects the kind of every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip detection and always run the validator for `kind`.
    pub fn force_kind(mut self, kind: Option<Kind>) -> Self {
        self.forced_kind = kind;
        self
    }

    /// Resolve the kind for `doc` without validating it.
    pub fn resolve_kind(&self, doc: &Document, file_name: &str) -> Kind {
        match self.forced_kind {
            Some(kind) => {
                debug!(kind = %kind, "kind forced, skipping detection");
                kind
            }
            None => detect_kind(doc, file_name),
        }
    }

    /// Validate one document. Never panics and never exits the process.
    pub fn run(&self, doc: &Document, file_name: &str) -> ValidationResult {
        let kind = self.resolve_kind(doc, file_name);
        let mut result = ValidationResult::new(kind);

        match kind.validator().validate(doc, &mut result) {
            Ok(()) => debug!(kind = %kind, "validation completed"),
            Err(_) => info!(kind = %kind, "validation halted on first error"),
        }

        result
    }
}

/// Detect the kind of `doc` and validate it.
pub fn validate(doc: &Document, file_name: &str) -> ValidationResult {
    Runner::new().run(doc, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        Document::from_value(value, "doc.json").unwrap()
    }

    #[test]
    fn test_runner_detects_and_validates() {
        let result = validate(&doc(json!({"keys": "not-a-list"})), "doc.json");
        assert_eq!(result.kind, Kind::KeyHistory);
        assert!(!result.passed());
    }

    #[test]
    fn test_priority_conflict_goes_to_adoption() {
        let result = validate(&doc(json!({"adoption": {}, "keys": []})), "doc.json");
        assert_eq!(result.kind, Kind::TfwsAdoption);
        assert_eq!(
            result.diagnostics[0].message,
            "adoption.self_declared must be boolean"
        );
        assert!(!result.passed());
    }

    #[test]
    fn test_empty_object_is_unknown() {
        let result = validate(&doc(json!({})), "doc.json");
        assert_eq!(result.kind, Kind::Unknown);
        assert!(result.passed());
    }

    #[test]
    fn test_forced_kind_overrides_detection() {
        let runner = Runner::new().force_kind(Some(Kind::KeyHistory));
        let result = runner.run(&doc(json!({"adoption": {}})), "tfws-adoption.json");
        assert_eq!(result.kind, Kind::KeyHistory);
        assert!(result.passed());
        assert_eq!(
            result.diagnostics.last().unwrap().message,
            "Valid (permissive) key-history"
        );
    }

    #[test]
    fn test_runs_are_deterministic() {
        let d = doc(json!({"signals": [], "timestamp": 1}));
        let a = validate(&d, "doc.json");
        let b = validate(&d, "doc.json");
        assert_eq!(a.diagnostics, b.diagnostics);
    }
}
