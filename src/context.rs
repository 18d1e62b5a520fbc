//! Panel Context
//!
//! Shared state provided via Leptos Context API.

use checklist_store::{ChecklistItem, ChecklistStore, Migration};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::{NOTICE_FADE_MS, NOTICE_TIMEOUT_MS};
use crate::export::ExportPhase;
use crate::storage::BrowserStorage;
use crate::theme::Theme;

/// A transient message in the corner of the page
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    id: u64,
    pub message: String,
    pub fading: bool,
}

/// Panel-wide state provided via context
#[derive(Clone, Copy)]
pub struct PanelContext {
    /// Verification records, persisted on every change
    pub checklist: RwSignal<ChecklistStore<BrowserStorage>>,
    /// Rendered checklist items in display order
    pub items: StoredValue<Vec<ChecklistItem>>,
    /// Item waiting for a verifier name in the modal
    pub pending: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<Notice>>,
    pub theme: RwSignal<Theme>,
    pub export_phase: RwSignal<ExportPhase>,
    notice_seq: StoredValue<u64>,
}

impl PanelContext {
    pub fn new(checklist: ChecklistStore<BrowserStorage>, items: Vec<ChecklistItem>, theme: Theme) -> Self {
        Self {
            checklist: RwSignal::new(checklist),
            items: StoredValue::new(items),
            pending: RwSignal::new(None),
            notice: RwSignal::new(None),
            theme: RwSignal::new(theme),
            export_phase: RwSignal::new(ExportPhase::Idle),
            notice_seq: StoredValue::new(0),
        }
    }

    /// Show `message`, replacing any visible notice
    pub fn notify(&self, message: impl Into<String>) {
        self.notice_seq.update_value(|seq| *seq += 1);
        let id = self.notice_seq.get_value();
        self.notice.set(Some(Notice {
            id,
            message: message.into(),
            fading: false,
        }));

        let notice = self.notice;
        Timeout::new(NOTICE_TIMEOUT_MS, move || {
            notice.update(|current| {
                if let Some(current) = current.as_mut().filter(|n| n.id == id) {
                    current.fading = true;
                }
            });
            Timeout::new(NOTICE_FADE_MS, move || {
                if notice.with_untracked(|n| n.as_ref().is_some_and(|n| n.id == id)) {
                    notice.set(None);
                }
            })
            .forget();
        })
        .forget();
    }

    // ========================
    // Checklist
    // ========================

    /// Checked in the UI: verified, or awaiting a name
    pub fn is_checked(&self, id: &str) -> bool {
        self.pending.with(|p| p.as_deref() == Some(id)) || self.checklist.with(|s| s.is_verified(id))
    }

    pub fn all_verified(&self) -> bool {
        self.items
            .with_value(|items| self.checklist.with(|s| s.all_verified(items)))
    }

    /// Open the verification modal for `id`
    pub fn request_verification(&self, id: &str) {
        self.pending.set(Some(id.to_string()));
    }

    /// Record the pending item under `name`. Blank names keep the modal open.
    pub fn confirm_verification(&self, name: &str) -> bool {
        let Some(id) = self.pending.get_untracked() else {
            return false;
        };
        let verified = self
            .checklist
            .try_update(|store| store.verify(&id, name).is_ok())
            .unwrap_or(false);
        if verified {
            log::info!("[CHECKLIST] {} verified", id);
            self.pending.set(None);
        }
        verified
    }

    /// Close the modal without a name; the item goes back to unchecked
    pub fn cancel_verification(&self) {
        if let Some(id) = self.pending.get_untracked() {
            self.pending.set(None);
            self.unverify(&id);
        }
    }

    pub fn unverify(&self, id: &str) {
        self.checklist.update(|store| {
            store.unverify(id);
        });
    }

    pub fn reset(&self) {
        self.pending.set(None);
        self.checklist.update(|store| store.reset());
        log::info!("[CHECKLIST] all verifications cleared");
    }
}

/// Text shown after an automatic migration
pub fn migration_notice(migration: &Migration) -> String {
    match migration {
        Migration::Positional { .. } => "Se migró el estado antiguo del checklist (posicional).".to_string(),
        Migration::Semantic { migrated } => format!("Migradas {} entradas del checklist.", migrated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_notice() {
        assert_eq!(
            migration_notice(&Migration::Positional { migrated: 4 }),
            "Se migró el estado antiguo del checklist (posicional)."
        );
        assert_eq!(
            migration_notice(&Migration::Semantic { migrated: 2 }),
            "Migradas 2 entradas del checklist."
        );
    }
}
