//! tfws-validate - validator for TFWS trust manifests.
//!
//! Reads one JSON document, infers which manifest kind it is, and runs
//! permissive structural checks for that kind:
//!
//! - `ai-trust-hub`: trust-hub descriptors (signals, endpoints, links, ...)
//! - `key-history`: key-history records (`keys` or `history` lists)
//! - `tfws-adoption`: adoption manifests (`adoption` object with boolean flags)
//!
//! # Architecture
//!
//! - `document`: loading a file into a top-level JSON object
//! - `detect`: kind detection table and one validator per kind
//! - `report`: output formatting (text, JSON)
//! - `cli`: argument parsing and exit codes
//!
//! The core is pure: [`validate`] maps a document and its file name to a
//! [`ValidationResult`] without printing or exiting.

pub mod cli;
pub mod detect;
pub mod document;
pub mod report;

pub use detect::{
    detect_kind, validate, Diagnostic, Kind, KindValidator, Runner, Severity, ValidationResult,
};
pub use document::{Document, LoadError};
