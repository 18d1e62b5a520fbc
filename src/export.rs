//! Checklist PDF Export
//!
//! Renders the checklist to a PDF and mails it through the reactor server.
//! One export runs at a time; the trigger stays disabled until it ends.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, FormData, HtmlElement, RequestInit, Response};

use crate::bindings::{canvas_to_pdf, js_err, render_to_canvas};
use crate::config::{send_url, RENDER_SETTLE_MS};

/// Element cloned into the PDF
pub const CHECKLIST_CONTAINER_ID: &str = "checklist-container";

/// Controls removed from the clone before rendering
const STRIPPED_SELECTOR: &str = "button, .no-print";

const RENDER_SCALE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportPhase {
    #[default]
    Idle,
    Rendering,
    Sending,
}

impl ExportPhase {
    pub fn button_label(&self) -> &'static str {
        match self {
            ExportPhase::Idle => "Enviar PDF",
            ExportPhase::Rendering => "Generando...",
            ExportPhase::Sending => "Enviando...",
        }
    }

    pub fn is_busy(&self) -> bool {
        *self != ExportPhase::Idle
    }
}

/// Render, send and report. `phase` is back to idle when this returns.
pub async fn export_checklist(phase: RwSignal<ExportPhase>) {
    if phase.get_untracked().is_busy() {
        return;
    }
    phase.set(ExportPhase::Rendering);

    let result = render_and_send(phase).await;
    match &result {
        Ok(()) => {
            log::info!("[EXPORT] checklist sent");
            alert("¡Checklist enviado por correo exitosamente!");
        }
        Err(e) => {
            log::error!("[EXPORT] error generating or sending the PDF: {}", e);
            alert("Hubo un error al generar o enviar el PDF.");
        }
    }

    phase.set(ExportPhase::Idle);
}

async fn render_and_send(phase: RwSignal<ExportPhase>) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let source = document
        .get_element_by_id(CHECKLIST_CONTAINER_ID)
        .ok_or_else(|| format!("#{} not found", CHECKLIST_CONTAINER_ID))?;

    let clone = PrintClone::attach(&document, &source)?;
    TimeoutFuture::new(RENDER_SETTLE_MS).await;
    let canvas = render_to_canvas(clone.element(), RENDER_SCALE).await?;
    drop(clone);

    phase.set(ExportPhase::Sending);
    let pdf = canvas_to_pdf(&canvas)?;
    post_pdf(&pdf).await
}

async fn post_pdf(pdf: &web_sys::Blob) -> Result<(), String> {
    let form = FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename("file", pdf, "checklist.pdf")
        .map_err(js_err)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&form);

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_str_and_init(&send_url(), &init))
        .await
        .map_err(js_err)?
        .dyn_into::<Response>()
        .map_err(|_| "fetch did not return a response".to_string())?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("server answered {}", response.status()))
    }
}

/// Off-screen copy of the checklist, removed from the page on drop
struct PrintClone {
    container: HtmlElement,
}

impl PrintClone {
    fn attach(document: &Document, source: &Element) -> Result<Self, String> {
        let copy = source
            .clone_node_with_deep(true)
            .map_err(js_err)?
            .dyn_into::<Element>()
            .map_err(|_| "checklist clone is not an element".to_string())?;

        let stripped = copy.query_selector_all(STRIPPED_SELECTOR).map_err(js_err)?;
        for index in 0..stripped.length() {
            if let Some(node) = stripped.item(index) {
                if let Some(parent) = node.parent_node() {
                    let _ = parent.remove_child(&node);
                }
            }
        }

        let container = document
            .create_element("div")
            .map_err(js_err)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| "container is not an HTML element".to_string())?;
        container.set_class_name("pdf-clone-container");
        container.append_child(&copy).map_err(js_err)?;

        let body = document.body().ok_or_else(|| "no body".to_string())?;
        body.append_child(&container).map_err(js_err)?;
        Ok(Self { container })
    }

    fn element(&self) -> &HtmlElement {
        &self.container
    }
}

impl Drop for PrintClone {
    fn drop(&mut self) {
        if self.container.is_connected() {
            self.container.remove();
        }
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_labels() {
        assert_eq!(ExportPhase::Idle.button_label(), "Enviar PDF");
        assert_eq!(ExportPhase::Rendering.button_label(), "Generando...");
        assert_eq!(ExportPhase::Sending.button_label(), "Enviando...");
        assert!(!ExportPhase::Idle.is_busy());
        assert!(ExportPhase::Sending.is_busy());
    }
}
