//! Checklist Action Bar Component
//!
//! Progress, reset, print and "send PDF". Sending is only possible once
//! every item is verified, and never while an export is running.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::PanelContext;
use crate::export::export_checklist;

#[component]
pub fn ActionBar() -> impl IntoView {
    let ctx = use_context::<PanelContext>().expect("PanelContext should be provided");
    let total = ctx.items.with_value(|items| items.len());

    let verified = move || {
        ctx.items.with_value(|items| {
            ctx.checklist
                .with(|store| store.statuses(items).iter().filter(|s| s.checked).count())
        })
    };
    let can_send = move || ctx.all_verified() && !ctx.export_phase.get().is_busy();

    let on_reset = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("¿Reiniciar todas las verificaciones?").ok())
            .unwrap_or(false);
        if confirmed {
            ctx.reset();
        }
    };

    let on_print = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    };

    let on_send = move |_| {
        let phase = ctx.export_phase;
        spawn_local(async move {
            export_checklist(phase).await;
        });
    };

    view! {
        <div class="action-bar no-print">
            <span class="checklist-progress">{move || format!("{} / {} verificados", verified(), total)}</span>
            <button id="reset-btn" type="button" on:click=on_reset>"Reiniciar"</button>
            <button id="print-btn" type="button" on:click=on_print>"Imprimir"</button>
            <button
                id="send-btn"
                type="button"
                disabled=move || !can_send()
                class=move || if can_send() { "send-btn" } else { "send-btn opacity-50 cursor-not-allowed" }
                on:click=on_send
            >
                {move || ctx.export_phase.get().button_label()}
            </button>
        </div>
    }
}
