//! Checklist State
//!
//! The persisted blob is `{"version": 1, "items": {<id>: <record>}}`.
//! Blobs written before versioning are a flat map of records.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::record::VerificationRecord;

/// Schema version written by this crate
pub const CURRENT_VERSION: u64 = 1;

/// Persisted verification state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistState {
    pub version: u64,
    pub items: BTreeMap<String, VerificationRecord>,
}

impl ChecklistState {
    /// `{version: 1, items: {}}`
    pub fn empty() -> Self {
        Self {
            version: CURRENT_VERSION,
            items: BTreeMap::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for ChecklistState {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Error)]
pub(crate) enum BlobError {
    #[error("malformed checklist state: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("checklist state is not an object")]
    NotAnObject,
}

/// A blob read back from storage, before any migration
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PersistedBlob {
    Versioned {
        version: u64,
        items: Map<String, Value>,
    },
    /// Pre-versioning format: every top-level key is an item
    Unversioned(Map<String, Value>),
}

impl PersistedBlob {
    pub(crate) fn parse(raw: &str) -> Result<Self, BlobError> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Object(mut root) = value else {
            return Err(BlobError::NotAnObject);
        };

        let Some(version) = root.get("version").and_then(version_tag) else {
            return Ok(PersistedBlob::Unversioned(root));
        };
        let items = match root.remove("items") {
            Some(Value::Object(items)) => items,
            _ => Map::new(),
        };
        Ok(PersistedBlob::Versioned { version, items })
    }
}

/// Reads the `version` field. Missing, null, false, zero and empty values
/// mean the blob predates versioning.
fn version_tag(value: &Value) -> Option<u64> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) => match n.as_u64() {
            Some(0) => None,
            Some(v) => Some(v),
            None if n.as_f64().is_some_and(|f| f == 0.0 || f.is_nan()) => None,
            None => Some(CURRENT_VERSION),
        },
        Value::String(s) if s.is_empty() => None,
        _ => Some(CURRENT_VERSION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_json() {
        assert_eq!(ChecklistState::empty().to_json().unwrap(), r#"{"version":1,"items":{}}"#);
    }

    #[test]
    fn test_parse_versioned() {
        let blob = PersistedBlob::parse(r#"{"version":1,"items":{"a":{"verifier":"Ana","timestamp":"t"}}}"#).unwrap();
        match blob {
            PersistedBlob::Versioned { version, items } => {
                assert_eq!(version, 1);
                assert!(items.contains_key("a"));
            }
            other => panic!("expected versioned blob, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_keeps_newer_version() {
        let blob = PersistedBlob::parse(r#"{"version":3,"items":{}}"#).unwrap();
        assert!(matches!(blob, PersistedBlob::Versioned { version: 3, .. }));
    }

    #[test]
    fn test_versioned_without_items() {
        let blob = PersistedBlob::parse(r#"{"version":1}"#).unwrap();
        assert_eq!(blob, PersistedBlob::Versioned { version: 1, items: Map::new() });
    }

    #[test]
    fn test_falsy_versions_are_unversioned() {
        for raw in [
            r#"{"item1":{}}"#,
            r#"{"version":0,"item1":{}}"#,
            r#"{"version":null}"#,
            r#"{"version":false}"#,
            r#"{"version":""}"#,
        ] {
            assert!(
                matches!(PersistedBlob::parse(raw).unwrap(), PersistedBlob::Unversioned(_)),
                "{} should be unversioned",
                raw
            );
        }
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(PersistedBlob::parse("{not json"), Err(BlobError::Malformed(_))));
        assert!(matches!(PersistedBlob::parse("[1,2]"), Err(BlobError::NotAnObject)));
        assert!(matches!(PersistedBlob::parse("null"), Err(BlobError::NotAnObject)));
    }
}
