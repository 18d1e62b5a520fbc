//! Checklist Store Scenarios
//!
//! Load, migrate, mutate and reload against in-memory storage.

use crate::{
    ChecklistError, ChecklistItem, ChecklistState, ChecklistStore, KeyValueStore, MemoryStorage, Migration,
    StorageError, VerificationRecord, CURRENT_VERSION,
};
use serde_json::{json, Value};

const KEY: &str = "struviteChecklistState_v1";

fn items() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::new("chk-limpieza", "Verificar que el reactor esté limpio"),
        ChecklistItem::new("chk-ph", "Calibrar la sonda de pH con tampones 4, 7 y 10"),
        ChecklistItem::new("chk-temp", "Comprobar la sonda de temperatura"),
    ]
}

fn stored(storage: &MemoryStorage) -> Value {
    let raw = storage.get(KEY).unwrap().expect("state should be persisted");
    serde_json::from_str(&raw).unwrap()
}

fn load(storage: MemoryStorage) -> (ChecklistStore<MemoryStorage>, Vec<Migration>) {
    let outcome = ChecklistStore::load(storage, KEY, &items());
    (outcome.store, outcome.migrations)
}

/// Storage whose writes always fail
struct FullStorage {
    blob: Option<String>,
}

impl KeyValueStore for FullStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blob.clone())
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".to_string()))
    }
}

#[test]
fn test_load_without_data() {
    let (store, migrations) = load(MemoryStorage::new());

    assert_eq!(store.state(), &ChecklistState::empty());
    assert!(migrations.is_empty());
    // Nothing is written until something changes
    assert_eq!(store.storage().get(KEY).unwrap(), None);
}

#[test]
fn test_load_corrupted_blob() {
    let (store, migrations) = load(MemoryStorage::with_entry(KEY, "{\"version\":1,\"items\":"));

    assert_eq!(store.state(), &ChecklistState::empty());
    assert!(migrations.is_empty());
}

#[test]
fn test_load_non_object_blob() {
    let (store, _) = load(MemoryStorage::with_entry(KEY, "\"hello\""));
    assert_eq!(store.state(), &ChecklistState::empty());
}

#[test]
fn test_positional_migration_more_legacy_than_items() {
    let legacy = json!({
        "check3": {"name": "Carla", "timestamp": "03/01/2024 - 10:00"},
        "check1": {"name": "Ana", "timestamp": "01/01/2024 - 10:00"},
        "check4": {"name": "Dani", "timestamp": "04/01/2024 - 10:00"},
        "check2": {"name": "Beto", "timestamp": "02/01/2024 - 10:00"},
    });
    let (store, migrations) = load(MemoryStorage::with_entry(KEY, legacy.to_string()));

    assert_eq!(migrations, vec![Migration::Positional { migrated: 3 }]);
    assert_eq!(store.record("chk-limpieza").unwrap().verifier, "Ana");
    assert_eq!(store.record("chk-ph").unwrap().verifier, "Beto");
    assert_eq!(store.record("chk-temp").unwrap().verifier, "Carla");
    assert_eq!(store.state().items.len(), 3);

    let persisted = stored(store.storage());
    assert_eq!(persisted["version"], json!(1));
    assert_eq!(persisted["items"]["chk-ph"]["verifier"], json!("Beto"));
    assert!(persisted["items"].get("check4").is_none());
}

#[test]
fn test_positional_migration_fewer_legacy_than_items() {
    let legacy = json!({"item7": {"name": "Ana", "timestamp": "t"}});
    let (store, migrations) = load(MemoryStorage::with_entry(KEY, legacy.to_string()));

    assert_eq!(migrations, vec![Migration::Positional { migrated: 1 }]);
    assert!(store.is_verified("chk-limpieza"));
    assert!(!store.is_verified("chk-ph"));
    assert!(!store.is_verified("chk-temp"));
}

#[test]
fn test_empty_legacy_blob_still_upgrades() {
    let (store, migrations) = load(MemoryStorage::with_entry(KEY, "{}"));

    assert_eq!(migrations, vec![Migration::Positional { migrated: 0 }]);
    assert_eq!(stored(store.storage()), json!({"version": 1, "items": {}}));
}

#[test]
fn test_semantic_migration_rekeys_exact_label() {
    let blob = json!({
        "version": 1,
        "items": {
            "checklist-item-9": {
                "verifier": "Ana",
                "timestamp": "t",
                "label": "Comprobar la sonda de temperatura"
            }
        }
    });
    let (store, migrations) = load(MemoryStorage::with_entry(KEY, blob.to_string()));

    assert_eq!(migrations, vec![Migration::Semantic { migrated: 1 }]);
    assert_eq!(store.record("chk-temp").unwrap().verifier, "Ana");
    assert!(store.record("checklist-item-9").is_none());

    let persisted = stored(store.storage());
    assert!(persisted["items"].get("checklist-item-9").is_none());
    assert_eq!(persisted["items"]["chk-temp"]["verifier"], json!("Ana"));
}

#[test]
fn test_semantic_migration_leaves_unmatched_key_inert() {
    let blob = json!({
        "version": 1,
        "items": {
            "gone": {"verifier": "Ana", "timestamp": "t", "label": "Paso que ya no existe"}
        }
    });
    let (store, migrations) = load(MemoryStorage::with_entry(KEY, blob.to_string()));

    assert!(migrations.is_empty());
    assert!(store.record("gone").is_some());
    // Never written back, never displayed
    assert_eq!(store.storage().get(KEY).unwrap(), Some(blob.to_string()));
    assert!(store.statuses(&items()).iter().all(|status| !status.checked));
    assert!(!store.all_verified(&items()));
}

#[test]
fn test_legacy_records_normalized_on_load() {
    let blob = json!({
        "version": 1,
        "items": {"chk-ph": {"name": "Luis", "timestamp": "t"}}
    });
    let (store, _) = load(MemoryStorage::with_entry(KEY, blob.to_string()));

    let statuses = store.statuses(&items());
    assert!(statuses[1].checked);
    assert_eq!(statuses[1].info.as_ref().unwrap().verifier, "Luis");
    assert!(!statuses[0].checked);
    assert!(statuses[0].info.is_none());
}

#[test]
fn test_verify_persists_and_reloads() {
    let (mut store, _) = load(MemoryStorage::new());

    let record = store.verify("chk-ph", "Ana").unwrap().clone();
    assert_eq!(record.verifier, "Ana");
    assert!(!record.timestamp.is_empty());

    let persisted = stored(store.storage());
    assert_eq!(persisted["version"], json!(CURRENT_VERSION));
    assert_eq!(persisted["items"]["chk-ph"]["verifier"], json!("Ana"));

    let (reloaded, migrations) = load(store.into_storage());
    assert!(migrations.is_empty());
    assert_eq!(reloaded.record("chk-ph"), Some(&record));
    let checked: Vec<bool> = reloaded.statuses(&items()).iter().map(|s| s.checked).collect();
    assert_eq!(checked, vec![false, true, false]);
}

#[test]
fn test_verify_trims_name() {
    let (mut store, _) = load(MemoryStorage::new());
    store.verify_at("chk-ph", "  Ana  ", "t").unwrap();
    assert_eq!(store.record("chk-ph"), Some(&VerificationRecord::new("Ana", "t")));
}

#[test]
fn test_blank_verifier_is_a_no_op() {
    let (mut store, _) = load(MemoryStorage::new());

    assert_eq!(store.verify("chk-ph", ""), Err(ChecklistError::EmptyVerifier));
    assert_eq!(store.verify("chk-ph", "   \t"), Err(ChecklistError::EmptyVerifier));
    assert!(store.state().items.is_empty());
    assert_eq!(store.storage().get(KEY).unwrap(), None);
}

#[test]
fn test_unverify_removes_and_persists() {
    let (mut store, _) = load(MemoryStorage::new());
    store.verify_at("chk-ph", "Ana", "t").unwrap();
    store.verify_at("chk-temp", "Beto", "t").unwrap();

    assert!(store.unverify("chk-ph"));
    assert!(!store.is_verified("chk-ph"));
    assert!(!store.unverify("chk-ph"));

    let persisted = stored(store.storage());
    assert!(persisted["items"].get("chk-ph").is_none());
    assert_eq!(persisted["items"]["chk-temp"]["verifier"], json!("Beto"));
}

#[test]
fn test_reset_keeps_version() {
    let blob = json!({"version": 2, "items": {"chk-ph": {"verifier": "Ana", "timestamp": "t"}}});
    let (mut store, _) = load(MemoryStorage::with_entry(KEY, blob.to_string()));

    store.reset();

    assert!(store.state().items.is_empty());
    assert_eq!(stored(store.storage()), json!({"version": 2, "items": {}}));
}

#[test]
fn test_all_verified() {
    let (mut store, _) = load(MemoryStorage::new());
    for item in items() {
        assert!(!store.all_verified(&items()));
        store.verify_at(&item.id, "Ana", "t").unwrap();
    }
    assert!(store.all_verified(&items()));
}

#[test]
fn test_write_failure_keeps_memory_state() {
    let mut store = ChecklistStore::load(FullStorage { blob: None }, KEY, &items()).store;

    store.verify_at("chk-ph", "Ana", "t").unwrap();
    assert!(store.is_verified("chk-ph"));

    store.reset();
    assert!(store.state().items.is_empty());
}
