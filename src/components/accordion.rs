//! Checklist Accordion Component
//!
//! One collapsible panel per protocol section, at most one open.
//! Headers use a roving tabindex and handle keyboard navigation.

use leptos::html;
use leptos::prelude::*;

use crate::components::ChecklistItemRow;
use crate::keyboard::{accordion_key, AccordionKey};
use crate::protocol::SECTIONS;

#[component]
pub fn ChecklistAccordion() -> impl IntoView {
    let open = RwSignal::new(None::<usize>);
    // Header reachable with Tab
    let focused = RwSignal::new(0usize);
    let headers: Vec<NodeRef<html::Button>> = SECTIONS.iter().map(|_| NodeRef::new()).collect();
    let len = SECTIONS.len();

    let panels = SECTIONS
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let header_ref = headers[index];
            let headers = headers.clone();
            let is_open = move || open.get() == Some(index);

            let toggle = move || {
                open.update(|o| *o = if *o == Some(index) { None } else { Some(index) });
                focused.set(index);
            };
            let focus_header = move |target: usize| {
                focused.set(target);
                if let Some(header) = headers[target].get() {
                    let _ = header.focus();
                }
            };

            view! {
                <div class="accordion-item">
                    <button
                        type="button"
                        class="accordion-header"
                        role="button"
                        node_ref=header_ref
                        tabindex=move || if focused.get() == index { "0" } else { "-1" }
                        aria-expanded=move || is_open().to_string()
                        on:click=move |_| toggle()
                        on:focus=move |_| focused.set(index)
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            match accordion_key(&ev.key(), ev.shift_key(), index, len) {
                                Some(AccordionKey::Toggle) => {
                                    ev.prevent_default();
                                    toggle();
                                }
                                Some(AccordionKey::Focus(target)) => {
                                    ev.prevent_default();
                                    focus_header(target);
                                }
                                None => {}
                            }
                        }
                    >
                        {section.title}
                    </button>
                    <div
                        class=move || if is_open() { "accordion-content open" } else { "accordion-content" }
                        role="region"
                        aria-hidden=move || (!is_open()).to_string()
                    >
                        <ul class="checklist">
                            {section.items.iter().map(|(id, label)| view! {
                                <ChecklistItemRow id=*id label=*label />
                            }).collect_view()}
                        </ul>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! { <div class="accordion">{panels}</div> }
}
