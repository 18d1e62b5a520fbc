//! Live Readings Socket
//!
//! Streams pH and temperature from the reactor server and reconnects
//! after the connection drops.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MessageEvent, WebSocket};

use crate::config::{ws_url, RECONNECT_DELAY_MS};
use crate::models::{ConnectionStatus, LiveMessage};
use crate::store::{store_apply_message, store_set_connection, PanelStore};

/// Open the live socket. Closing it schedules a new connection.
pub fn connect(store: PanelStore) {
    let url = ws_url();
    log::info!("[LIVE] connecting to {}", url);
    let ws = match WebSocket::new(url) {
        Ok(ws) => ws,
        Err(e) => {
            log::error!("[LIVE] WebSocket error {:?}", e);
            return;
        }
    };

    let on_open = Closure::<dyn FnMut()>::new(move || {
        log::info!("[LIVE] connected");
        store_set_connection(&store, ConnectionStatus::Connected);
    });
    ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
    on_open.forget();

    let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
        let Some(text) = ev.data().as_string() else {
            log::warn!("[LIVE] ignoring non-text message");
            return;
        };
        match LiveMessage::parse(&text) {
            Ok(message) => store_apply_message(&store, message, js_sys::Date::now()),
            Err(e) => log::error!("[LIVE] error processing message: {}", e),
        }
    });
    ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    on_message.forget();

    let on_close = Closure::<dyn FnMut()>::new(move || {
        log::warn!("[LIVE] disconnected, retrying in {} ms", RECONNECT_DELAY_MS);
        store_set_connection(&store, ConnectionStatus::Disconnected);
        Timeout::new(RECONNECT_DELAY_MS, move || connect(store)).forget();
    });
    ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));
    on_close.forget();

    let socket = ws.clone();
    let on_error = Closure::<dyn FnMut()>::new(move || {
        let _ = socket.close();
    });
    ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();
}
