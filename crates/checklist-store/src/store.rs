//! Checklist Store
//!
//! Owns the verification state and its storage slot. Every mutation is
//! persisted before returning. A failed write is logged and otherwise
//! ignored; the in-memory state stays authoritative for the session.

use chrono::Local;
use log::{error, info, warn};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::item::{ChecklistItem, ItemStatus, VerificationInfo};
use crate::migration::{self, Migration};
use crate::record::{format_timestamp, StoredRecord, VerificationRecord};
use crate::state::{ChecklistState, PersistedBlob};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecklistError {
    #[error("verifier name is empty")]
    EmptyVerifier,
}

/// A loaded store plus the migrations performed on the way
#[derive(Debug)]
pub struct LoadOutcome<S> {
    pub store: ChecklistStore<S>,
    pub migrations: Vec<Migration>,
}

/// Verification state bound to one storage slot
#[derive(Debug, Clone)]
pub struct ChecklistStore<S> {
    storage: S,
    key: String,
    state: ChecklistState,
}

impl<S: KeyValueStore> ChecklistStore<S> {
    /// Read the blob at `key` and migrate it against the rendered `items`.
    ///
    /// Missing or unreadable data yields `{version: 1, items: {}}`.
    pub fn load(storage: S, key: impl Into<String>, items: &[ChecklistItem]) -> LoadOutcome<S> {
        let key = key.into();
        let blob = read_blob(&storage, &key);
        let mut store = Self {
            storage,
            key,
            state: ChecklistState::empty(),
        };
        let mut migrations = Vec::new();

        match blob {
            None => {}
            Some(PersistedBlob::Versioned { version, items: stored }) => {
                store.state = ChecklistState {
                    version,
                    items: normalize_items(stored),
                };
            }
            Some(PersistedBlob::Unversioned(legacy)) => {
                let (state, migrated) = migration::positional(legacy, items);
                store.state = state;
                store.persist();
                info!("[checklist] migrated {} legacy entries by position", migrated);
                migrations.push(Migration::Positional { migrated });
            }
        }

        let mapped = migration::semantic(&mut store.state, items);
        if mapped > 0 {
            store.persist();
            info!("[checklist] migrated {} entries by label", mapped);
            migrations.push(Migration::Semantic { migrated: mapped });
        }

        LoadOutcome { store, migrations }
    }

    /// Record that `verifier` confirmed item `id` now.
    pub fn verify(&mut self, id: &str, verifier: &str) -> Result<&VerificationRecord, ChecklistError> {
        self.verify_at(id, verifier, format_timestamp(&Local::now()))
    }

    /// Record a confirmation with an explicit timestamp.
    ///
    /// Blank names are rejected without touching the state.
    pub fn verify_at(
        &mut self,
        id: &str,
        verifier: &str,
        timestamp: impl Into<String>,
    ) -> Result<&VerificationRecord, ChecklistError> {
        let verifier = verifier.trim();
        if verifier.is_empty() {
            return Err(ChecklistError::EmptyVerifier);
        }
        self.state
            .items
            .insert(id.to_string(), VerificationRecord::new(verifier, timestamp));
        self.persist();
        Ok(&self.state.items[id])
    }

    /// Drop the record for `id`. Returns whether one existed.
    pub fn unverify(&mut self, id: &str) -> bool {
        let removed = self.state.items.remove(id).is_some();
        self.persist();
        removed
    }

    /// Clear every record, keeping the schema version
    pub fn reset(&mut self) {
        self.state.items.clear();
        self.persist();
    }

    pub fn record(&self, id: &str) -> Option<&VerificationRecord> {
        self.state.items.get(id)
    }

    pub fn is_verified(&self, id: &str) -> bool {
        self.state.items.contains_key(id)
    }

    /// Display state for each rendered item, in the given order.
    ///
    /// Records under keys that match no item are never surfaced.
    pub fn statuses(&self, items: &[ChecklistItem]) -> Vec<ItemStatus> {
        items
            .iter()
            .map(|item| {
                let info = self.record(&item.id).map(|record| VerificationInfo {
                    verifier: record.verifier.clone(),
                    timestamp: record.timestamp.clone(),
                });
                ItemStatus {
                    id: item.id.clone(),
                    checked: info.is_some(),
                    info,
                }
            })
            .collect()
    }

    /// Whether every rendered item has a record
    pub fn all_verified(&self, items: &[ChecklistItem]) -> bool {
        items.iter().all(|item| self.is_verified(&item.id))
    }

    pub fn state(&self) -> &ChecklistState {
        &self.state
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        let blob = match self.state.to_json() {
            Ok(blob) => blob,
            Err(e) => {
                error!("[checklist] failed to serialize state: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &blob) {
            error!("[checklist] failed to save state: {}", e);
        }
    }
}

fn read_blob<S: KeyValueStore>(storage: &S, key: &str) -> Option<PersistedBlob> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            error!("[checklist] failed to read state: {}", e);
            return None;
        }
    };
    match PersistedBlob::parse(&raw) {
        Ok(blob) => Some(blob),
        Err(e) => {
            error!("[checklist] error parsing stored state: {}", e);
            None
        }
    }
}

fn normalize_items(stored: Map<String, Value>) -> BTreeMap<String, VerificationRecord> {
    stored
        .into_iter()
        .filter_map(|(key, value)| match StoredRecord::from_value(value) {
            Some(record) => Some((key, record.normalize())),
            None => {
                warn!("[checklist] dropping unreadable entry {}", key);
                None
            }
        })
        .collect()
}
