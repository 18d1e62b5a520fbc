//! Notice Toast Component
//!
//! Auto-dismissing status message, announced to screen readers.

use leptos::prelude::*;

use crate::context::PanelContext;

#[component]
pub fn NoticeToast() -> impl IntoView {
    let ctx = use_context::<PanelContext>().expect("PanelContext should be provided");

    view! {
        {move || ctx.notice.get().map(|notice| view! {
            <div
                id="global-notice"
                role="status"
                aria-live="polite"
                class=if notice.fading { "global-notice opacity-0" } else { "global-notice" }
            >
                {notice.message}
            </div>
        })}
    }
}
