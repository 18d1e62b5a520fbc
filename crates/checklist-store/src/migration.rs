//! Schema Migration
//!
//! Two best-effort passes bring an old blob in line with the items
//! currently rendered:
//! - positional: a versionless blob is sorted by the number embedded in
//!   its keys and zipped with the current items in display order. Lossy:
//!   extra legacy entries are dropped, extra items stay unset.
//! - semantic: keys that no longer name a current item are re-keyed to the
//!   first item whose text matches the record's label snapshot.

use log::warn;
use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::item::ChecklistItem;
use crate::record::StoredRecord;
use crate::state::ChecklistState;

/// Characters of item text compared against a stored label
pub const LABEL_PREFIX_CHARS: usize = 30;

/// An automatic migration performed while loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Migration {
    /// A versionless blob was mapped onto the current items by position
    Positional { migrated: usize },
    /// Stale keys were re-keyed by label
    Semantic { migrated: usize },
}

/// Map a versionless blob onto `items` by position.
///
/// Returns the migrated state and the number of records carried over.
pub(crate) fn positional(legacy: Map<String, Value>, items: &[ChecklistItem]) -> (ChecklistState, usize) {
    let mut keyed: Vec<(String, Value)> = legacy.into_iter().collect();
    // Stable: keys without digits keep their relative order, after the rest
    keyed.sort_by_key(|(key, _)| legacy_ordinal(key).map_or((1, 0), |n| (0, n)));

    let mut state = ChecklistState::empty();
    for ((old_key, value), item) in keyed.into_iter().zip(items) {
        match StoredRecord::from_value(value) {
            Some(record) => {
                state.items.insert(item.id.clone(), record.normalize());
            }
            None => warn!("[checklist] dropping unreadable legacy entry {}", old_key),
        }
    }
    let migrated = state.items.len();
    (state, migrated)
}

/// Re-key stale records by their label snapshot. Returns how many moved.
pub(crate) fn semantic(state: &mut ChecklistState, items: &[ChecklistItem]) -> usize {
    let current: HashSet<&str> = items.iter().map(|item| item.id.as_str()).collect();
    let missing: Vec<String> = state
        .items
        .keys()
        .filter(|key| !current.contains(key.as_str()))
        .cloned()
        .collect();

    let mut mapped = 0;
    for old_key in missing {
        let Some(label) = state.items.get(&old_key).and_then(|r| r.label.clone()) else {
            continue;
        };
        if label.is_empty() {
            continue;
        }
        let Some(target) = items.iter().find(|item| label_matches(&item.label, &label)) else {
            continue;
        };
        if let Some(record) = state.items.remove(&old_key) {
            state.items.insert(target.id.clone(), record);
            mapped += 1;
        }
    }
    mapped
}

/// The integer formed by every digit in `key`, e.g. `item-1-2` -> 12
pub(crate) fn legacy_ordinal(key: &str) -> Option<u64> {
    let digits: String = key.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Item text contains the label, or the label contains the start of the item text
pub(crate) fn label_matches(item_text: &str, label: &str) -> bool {
    if item_text.is_empty() {
        return false;
    }
    if item_text.contains(label) {
        return true;
    }
    let prefix: String = item_text.chars().take(LABEL_PREFIX_CHARS).collect();
    label.contains(&prefix)
}
