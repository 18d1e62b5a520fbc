//! Checklist Items
//!
//! What the rendering layer hands to the store, and what it gets back.

use serde::{Deserialize, Serialize};

/// A rendered checklist item. Slice order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    /// Visible description text
    pub label: String,
}

impl ChecklistItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Who verified an item and when, as shown next to its checkbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationInfo {
    pub verifier: String,
    pub timestamp: String,
}

/// Display state of one item after applying the stored records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStatus {
    pub id: String,
    pub checked: bool,
    /// `None` keeps the info region empty and hidden
    pub info: Option<VerificationInfo>,
}
