//! Verification Modal Component
//!
//! Asks who verified the pending item. Confirming with a blank name does
//! nothing; cancelling unchecks the item again.

use leptos::html;
use leptos::prelude::*;

use crate::context::PanelContext;

#[component]
pub fn VerificationModal() -> impl IntoView {
    let ctx = use_context::<PanelContext>().expect("PanelContext should be provided");

    let (name, set_name) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    // Focus the name field whenever the modal opens
    Effect::new(move |_| {
        if ctx.pending.with(|p| p.is_some()) {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let confirm = move || {
        if ctx.confirm_verification(&name.get_untracked()) {
            set_name.set(String::new());
        }
    };

    view! {
        <Show when=move || ctx.pending.with(|p| p.is_some())>
            <div id="verification-modal" class="modal-backdrop" role="dialog" aria-modal="true" aria-labelledby="verification-title">
                <div class="modal">
                    <h3 id="verification-title">"Confirmar verificación"</h3>
                    <label for="verifier-name">"Nombre de quien verifica"</label>
                    <input
                        id="verifier-name"
                        type="text"
                        node_ref=input_ref
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                confirm();
                            }
                        }
                    />
                    <div class="modal-actions">
                        <button id="modal-cancel" type="button" on:click=move |_| ctx.cancel_verification()>
                            "Cancelar"
                        </button>
                        <button id="modal-confirm" type="button" on:click=move |_| confirm()>
                            "Confirmar"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
