//! Tab Bar Component
//!
//! ARIA tab list switching between the protocol and the calculator.
//! Arrow keys move between tabs with wrap-around.

use leptos::html;
use leptos::prelude::*;

use crate::keyboard::tab_target;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Protocol,
    Calculator,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Protocol, Tab::Calculator];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Protocol => "tab-protocolo",
            Tab::Calculator => "tab-calculadora",
        }
    }

    /// Id of the panel this tab controls
    pub fn panel_id(&self) -> &'static str {
        match self {
            Tab::Protocol => "content-protocolo",
            Tab::Calculator => "content-calculadora",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Protocol => "Protocolo",
            Tab::Calculator => "Calculadora MgO",
        }
    }
}

#[component]
pub fn TabBar(active: RwSignal<Tab>) -> impl IntoView {
    let refs: [NodeRef<html::Button>; 2] = [NodeRef::new(), NodeRef::new()];

    let activate = move |index: usize| {
        active.set(Tab::ALL[index]);
        if let Some(button) = refs[index].get() {
            let _ = button.focus();
        }
    };

    view! {
        <div class="tab-list" role="tablist">
            {Tab::ALL.iter().enumerate().map(|(index, tab)| {
                let tab = *tab;
                let selected = move || active.get() == tab;
                view! {
                    <button
                        id=tab.id()
                        type="button"
                        role="tab"
                        node_ref=refs[index]
                        class=move || if selected() { "tab-btn tab-active" } else { "tab-btn subtle-text" }
                        aria-selected=move || selected().to_string()
                        aria-controls=tab.panel_id()
                        tabindex=move || if selected() { "0" } else { "-1" }
                        on:click=move |_| activate(index)
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if let Some(target) = tab_target(&ev.key(), index, Tab::ALL.len()) {
                                ev.prevent_default();
                                activate(target);
                            }
                        }
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_ids() {
        assert_eq!(Tab::Protocol.id(), "tab-protocolo");
        assert_eq!(Tab::Protocol.panel_id(), "content-protocolo");
        assert_eq!(Tab::Calculator.id(), "tab-calculadora");
        assert_eq!(Tab::Calculator.panel_id(), "content-calculadora");
    }
}
