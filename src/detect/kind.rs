//! Document kind detection.
//!
//! Rules are tried in table order and the first match wins. A document that
//! carries signals for several kinds (say `adoption` and `keys`) resolves to
//! whichever rule comes first; there is no scoring.

use phf::phf_set;
use tracing::debug;

use crate::document::Document;

use super::Kind;

/// Top-level keys that mark an ai-trust-hub descriptor.
pub static TRUST_HUB_ANCHORS: phf::Set<&'static str> =
    phf_set! { "signals", "endpoints", "resources", "hub", "links" };

/// One entry of the detection table.
pub struct DetectionRule {
    pub kind: Kind,
    /// Substring looked for in the lowercased file name.
    pub file_marker: &'static str,
    pub keys: &'static phf::Set<&'static str>,
}

static ADOPTION_KEYS: phf::Set<&'static str> = phf_set! { "adoption" };
static KEY_HISTORY_KEYS: phf::Set<&'static str> = phf_set! { "keys", "history" };

/// Detection rules in priority order.
pub static DETECTION_RULES: &[DetectionRule] = &[
    DetectionRule {
        kind: Kind::TfwsAdoption,
        file_marker: "tfws-adoption",
        keys: &ADOPTION_KEYS,
    },
    DetectionRule {
        kind: Kind::KeyHistory,
        file_marker: "key-history",
        keys: &KEY_HISTORY_KEYS,
    },
    DetectionRule {
        kind: Kind::AiTrustHub,
        file_marker: "ai-trust-hub",
        keys: &TRUST_HUB_ANCHORS,
    },
];

impl DetectionRule {
    fn matches(&self, doc: &Document, lowered_name: &str) -> bool {
        lowered_name.contains(self.file_marker) || doc.keys().any(|k| self.keys.contains(k))
    }
}

/// Classify a document using its top-level keys and file name.
pub fn detect_kind(doc: &Document, file_name: &str) -> Kind {
    let lowered = file_name.to_lowercase();
    for rule in DETECTION_RULES {
        if rule.matches(doc, &lowered) {
            debug!(kind = %rule.kind, file = file_name, "detection rule matched");
            return rule.kind;
        }
    }
    debug!(file = file_name, "no detection rule matched");
    Kind::Unknown
}
