//! Fallback for documents no detection rule recognised.

use crate::document::Document;

use super::{Halt, Kind, KindValidator, ValidationResult};

/// Applies no field checks; the object check already happened at load time.
pub struct UnknownValidator;

impl KindValidator for UnknownValidator {
    fn kind(&self) -> Kind {
        Kind::Unknown
    }

    fn validate(&self, _doc: &Document, result: &mut ValidationResult) -> Result<(), Halt> {
        result.warn("Unknown doc type; only basic JSON checks applied");
        result.ok("Basic validation passed");
        Ok(())
    }
}
