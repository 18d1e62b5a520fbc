//! Live Panel State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ConnectionStatus, LiveMessage, Reading, ReadingSeries};

/// Readings and connection state fed by the live socket
#[derive(Clone, Debug, Default, Store)]
pub struct PanelState {
    pub connection: ConnectionStatus,
    /// Last error reported by the server, hidden once reconnected
    pub server_error: Option<String>,
    pub live_ph: Option<f64>,
    pub live_temp: Option<f64>,
    /// Chart series
    pub readings: ReadingSeries,
}

/// Type alias for the store
pub type PanelStore = Store<PanelState>;

/// Get the panel store from context
pub fn use_panel_store() -> PanelStore {
    expect_context::<PanelStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_connection(store: &PanelStore, status: ConnectionStatus) {
    store.connection().set(status);
    if status == ConnectionStatus::Connected {
        store.server_error().set(None);
    }
}

/// Apply one socket message received at `at_ms`
pub fn store_apply_message(store: &PanelStore, message: LiveMessage, at_ms: f64) {
    if let Some(error) = message.error {
        store.server_error().set(Some(error));
        return;
    }
    if let Some(ph) = message.ph {
        store.live_ph().set(Some(ph));
    }
    if let Some(temp) = message.temp {
        store.live_temp().set(Some(temp));
    }
    store.readings().write().push(Reading {
        at_ms,
        ph: message.ph,
        temp: message.temp,
    });
}
