//! Kind detection and per-kind validation rules.
//!
//! # Architecture
//!
//! ```text
//! detect_kind (ordered rule table)
//!     └── KindValidator trait
//!           ├── AdoptionValidator    (tfws-adoption)
//!           ├── KeyHistoryValidator  (key-history)
//!           ├── TrustHubValidator    (ai-trust-hub)
//!           └── UnknownValidator     (fallback)
//! ```

mod adoption;
mod key_history;
mod kind;
mod runner;
mod trust_hub;
mod types;
mod unknown;

pub use adoption::AdoptionValidator;
pub use key_history::KeyHistoryValidator;
pub use kind::{detect_kind, DetectionRule, DETECTION_RULES, TRUST_HUB_ANCHORS};
pub use runner::{validate, Runner};
pub use trust_hub::TrustHubValidator;
pub use types::{Diagnostic, Halt, Kind, Severity, ValidationResult};
pub use unknown::UnknownValidator;

use crate::document::Document;

/// Rule set for one document kind.
///
/// Implementations append diagnostics to `result` in emission order. The first
/// fatal problem is recorded with [`ValidationResult::fail`] and returned as
/// `Err(Halt)`; no further checks run after that.
pub trait KindValidator: Send + Sync {
    /// The kind this validator handles.
    fn kind(&self) -> Kind;

    fn validate(&self, doc: &Document, result: &mut ValidationResult) -> Result<(), Halt>;
}

impl Kind {
    /// The validator responsible for this kind.
    pub fn validator(&self) -> &'static dyn KindValidator {
        match self {
            Kind::AiTrustHub => &TrustHubValidator,
            Kind::KeyHistory => &KeyHistoryValidator,
            Kind::TfwsAdoption => &AdoptionValidator,
            Kind::Unknown => &UnknownValidator,
        }
    }
}
