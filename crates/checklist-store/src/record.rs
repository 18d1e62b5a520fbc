//! Verification Records
//!
//! Stored blobs carry two record shapes: the current one keyed by
//! `verifier`, and an older one keyed by `name`. Both are normalized into
//! [`VerificationRecord`] when the blob is loaded.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// Proof that a person confirmed a checklist item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub verifier: String,
    pub timestamp: String,
    /// Snapshot of the item text, only present on older records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl VerificationRecord {
    pub fn new(verifier: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            verifier: verifier.into(),
            timestamp: timestamp.into(),
            label: None,
        }
    }
}

/// Record shapes found in persisted blobs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StoredRecord {
    Current {
        verifier: String,
        #[serde(default)]
        timestamp: Option<String>,
        #[serde(default)]
        label: Option<String>,
    },
    Legacy {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        timestamp: Option<String>,
        #[serde(default)]
        label: Option<String>,
    },
}

impl StoredRecord {
    /// Interpret one stored entry. Anything but a JSON object is rejected.
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    pub fn normalize(self) -> VerificationRecord {
        match self {
            StoredRecord::Current { verifier, timestamp, label } => VerificationRecord {
                verifier,
                timestamp: timestamp.unwrap_or_default(),
                label,
            },
            StoredRecord::Legacy { name, timestamp, label } => VerificationRecord {
                verifier: name.unwrap_or_default(),
                timestamp: timestamp.unwrap_or_default(),
                label,
            },
        }
    }
}

/// Date and time of a confirmation, e.g. `19/10/2026 - 14:05`
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%d/%m/%Y - %H:%M").to_string()
}
