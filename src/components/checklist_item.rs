//! Checklist Item Component
//!
//! Checkbox plus the "verified by" line. The checkbox state is derived
//! from the checklist store, so checking only opens the verification modal.

use leptos::prelude::*;

use crate::context::PanelContext;

#[component]
pub fn ChecklistItemRow(id: &'static str, label: &'static str) -> impl IntoView {
    let ctx = use_context::<PanelContext>().expect("PanelContext should be provided");

    let info = move || {
        ctx.checklist
            .with(|store| store.record(id).map(|r| (r.verifier.clone(), r.timestamp.clone())))
    };

    view! {
        <li class="checklist-row">
            <label class="checklist-label">
                <input
                    type="checkbox"
                    class="checklist-item"
                    id=id
                    prop:checked=move || ctx.is_checked(id)
                    on:change=move |ev| {
                        if event_target_checked(&ev) {
                            ctx.request_verification(id);
                        } else {
                            ctx.unverify(id);
                        }
                    }
                />
                <span>{label}</span>
            </label>
            {move || info().map(|(verifier, timestamp)| view! {
                <div class="verification-info">
                    <strong>"Verificado por:"</strong> " " {verifier}
                    <br />
                    <strong>"Fecha y hora:"</strong> " " {timestamp}
                </div>
            })}
        </li>
    }
}
