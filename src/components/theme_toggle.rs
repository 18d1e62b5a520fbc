//! Theme Toggle Component
//!
//! Switches between light and dark and remembers the choice.

use leptos::prelude::*;

use crate::context::PanelContext;
use crate::theme::{apply_theme, persist_theme};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<PanelContext>().expect("PanelContext should be provided");

    let toggle = move |_| {
        let next = ctx.theme.get_untracked().toggled();
        ctx.theme.set(next);
        apply_theme(next);
        persist_theme(next);
    };

    // Show the icon of the theme a click switches to
    view! {
        <button id="theme-toggle" type="button" class="theme-toggle" aria-label="Cambiar tema" on:click=toggle>
            <span id="theme-toggle-dark-icon" class=move || if ctx.theme.get().is_dark() { "hidden" } else { "" }>
                "🌙"
            </span>
            <span id="theme-toggle-light-icon" class=move || if ctx.theme.get().is_dark() { "" } else { "hidden" }>
                "☀️"
            </span>
        </button>
    }
}
