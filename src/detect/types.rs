//! Core types for validation results.

use serde::{Deserialize, Serialize};

/// Severity levels for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warning,
    Error,
}

impl Severity {
    /// Line prefix used in text output, without the trailing space.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Ok => "OK:",
            Severity::Warning => "WARNING:",
            Severity::Error => "ERROR:",
        }
    }
}

/// Manifest kinds the validator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    #[serde(rename = "ai-trust-hub")]
    AiTrustHub,
    #[serde(rename = "key-history")]
    KeyHistory,
    #[serde(rename = "tfws-adoption")]
    TfwsAdoption,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Kind {
    pub const ALL: [Kind; 4] = [
        Kind::AiTrustHub,
        Kind::KeyHistory,
        Kind::TfwsAdoption,
        Kind::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::AiTrustHub => "ai-trust-hub",
            Kind::KeyHistory => "key-history",
            Kind::TfwsAdoption => "tfws-adoption",
            Kind::Unknown => "unknown",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Kind::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::parse(&s.to_lowercase()).ok_or_else(|| {
            let known: Vec<&str> = Kind::ALL.iter().map(Kind::as_str).collect();
            format!("unknown kind: {} (expected one of: {})", s, known.join(", "))
        })
    }
}

/// A single severity-tagged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.severity.label(), self.message)
    }
}

/// Marker returned by a validator that stopped on a fatal diagnostic.
///
/// Only [`ValidationResult::fail`] constructs one, so a halted validator has
/// always recorded an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halt(());

/// Results of validating one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub kind: Kind,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            diagnostics: Vec::new(),
        }
    }

    pub fn ok(&mut self, message: impl Into<String>) {
        self.push(Severity::Ok, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message);
    }

    /// Record a `[suggestion]` warning attributed to `kind`.
    pub fn suggest(&mut self, kind: Kind, fix: &str) {
        self.warn(format!("[suggestion] {}: {}", kind, fix));
    }

    /// Record a fatal error followed by its suggestions and stop the validator.
    pub fn fail(&mut self, message: impl Into<String>, suggestions: &[&str]) -> Halt {
        let kind = self.kind;
        self.push(Severity::Error, message);
        for fix in suggestions {
            self.suggest(kind, fix);
        }
        Halt(())
    }

    fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(severity, message));
    }

    /// Check if there are any error-severity diagnostics.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Warnings never affect the verdict.
    pub fn passed(&self) -> bool {
        !self.has_errors()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}
