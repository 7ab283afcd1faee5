//! Loading manifest documents from disk.
//!
//! A document is the parsed top-level JSON object of one manifest file. The
//! loader distinguishes three failures (unreadable file, malformed JSON, and a
//! top level that is not an object); each renders as the exact message the
//! reporter prints after `ERROR: `.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Reasons a file could not become a [`Document`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {} ({})", .path.display(), .source)]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Top-level JSON must be an object")]
    NotAnObject,
}

/// A parsed manifest: a JSON object plus the file name it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    fields: Map<String, Value>,
    file_name: String,
}

impl Document {
    /// Wrap a parsed JSON value, rejecting anything but an object.
    pub fn from_value(value: Value, file_name: impl Into<String>) -> Result<Self, LoadError> {
        match value {
            Value::Object(fields) => Ok(Self {
                fields,
                file_name: file_name.into(),
            }),
            _ => Err(LoadError::NotAnObject),
        }
    }

    /// Read and parse a manifest file.
    ///
    /// Bytes are handed to the JSON parser untouched, so invalid UTF-8 is
    /// reported as invalid JSON rather than as a read failure.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read manifest");

        let value: Value =
            serde_json::from_slice(&bytes).map_err(|source| LoadError::InvalidJson {
                path: path.to_path_buf(),
                source,
            })?;
        let doc = Self::from_value(value, base_name(path))?;
        debug!(keys = doc.len(), "parsed top-level object");
        Ok(doc)
    }

    /// The final path component the document was loaded from.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Resolve the input path the way it is reported and classified.
///
/// Existing paths are canonicalized, so a symlinked manifest is detected by
/// its target's file name. Paths that cannot be resolved are only made
/// absolute, so missing files still get a full path in messages.
pub fn resolve_input(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| absolutize(path))
}

/// Make `path` absolute against the current directory without touching the
/// filesystem.
pub fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_load_object() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("key-history.json");
        std::fs::write(&path, r#"{"keys": [], "note": "x"}"#).unwrap();

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.file_name(), "key-history.json");
        assert_eq!(doc.len(), 2);
        assert!(doc.contains_key("keys"));
        assert_eq!(doc.get("note"), Some(&json!("x")));
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.json");

        let err = Document::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(err.to_string(), format!("File not found: {}", path.display()));
    }

    #[test]
    fn test_directory_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = Document::load(temp.path()).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn test_invalid_json_carries_parser_message() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "{\"keys\": [").unwrap();

        let err = Document::load(&path).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with(&format!("Invalid JSON: {} (", path.display())));
        assert!(msg.ends_with(')'));
        assert!(msg.contains("line 1"));
    }

    #[test]
    fn test_invalid_utf8_is_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("latin1.json");
        std::fs::write(&path, b"{\"contact\": \"\xe9\"}").unwrap();

        let err = Document::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::InvalidJson { .. }));
    }

    #[test]
    fn test_non_object_top_level() {
        for value in [json!([]), json!("s"), json!(1), json!(true), json!(null)] {
            let err = Document::from_value(value, "x.json").unwrap_err();
            assert_eq!(err.to_string(), "Top-level JSON must be an object");
        }
    }

    #[test]
    fn test_absolutize_keeps_file_name() {
        let abs = absolutize(Path::new("some/ai-trust-hub.json"));
        assert!(abs.is_absolute());
        assert!(abs.ends_with("some/ai-trust-hub.json"));
    }

    #[test]
    fn test_resolve_input_missing_file_is_absolute() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gone").join("tfws-adoption.json");
        let resolved = resolve_input(&path);
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("gone/tfws-adoption.json"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_input_follows_symlink() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("key-history-2024.json");
        std::fs::write(&target, r#"{"owner": "x"}"#).unwrap();
        let link = temp.path().join("current.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let resolved = resolve_input(&link);
        assert_eq!(resolved.file_name().unwrap(), "key-history-2024.json");

        let doc = Document::load(&resolved).unwrap();
        assert_eq!(doc.file_name(), "key-history-2024.json");
    }

    #[test]
    fn test_empty_object_loads() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.json");
        std::fs::write(&path, "{}").unwrap();

        let doc = Document::load(&path).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.keys().count(), 0);
    }
}
