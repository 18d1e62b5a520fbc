//! Checklist State Store
//!
//! Persists who verified which step of the reactor protocol, keyed by a
//! stable item identifier, and carries older blobs forward:
//! - versionless blobs are mapped onto the current items by position
//! - stale keys are re-keyed by matching their label snapshot
//!
//! The store is backend agnostic: anything implementing [`KeyValueStore`]
//! (browser local storage, an in-memory map) can hold the blob.

mod item;
mod migration;
mod record;
mod state;
mod storage;
mod store;

#[cfg(test)]
mod tests;

pub use item::{ChecklistItem, ItemStatus, VerificationInfo};
pub use migration::{Migration, LABEL_PREFIX_CHARS};
pub use record::{format_timestamp, StoredRecord, VerificationRecord};
pub use state::{ChecklistState, CURRENT_VERSION};
pub use storage::{KeyValueStore, MemoryStorage, StorageError};
pub use store::{ChecklistError, ChecklistStore, LoadOutcome};
