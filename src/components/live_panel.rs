//! Live Readings Panel Component
//!
//! Connection status, latest pH and temperature, and the rolling chart.

use leptos::html;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::bindings::LiveChart;
use crate::context::PanelContext;
use crate::models::{format_ph, format_temp};
use crate::store::{use_panel_store, PanelStateStoreFields};
use crate::theme::ChartPalette;

#[component]
pub fn LivePanel() -> impl IntoView {
    let ctx = use_context::<PanelContext>().expect("PanelContext should be provided");
    let store = use_panel_store();

    let canvas_ref = NodeRef::<html::Canvas>::new();
    let chart: Rc<RefCell<Option<LiveChart>>> = Rc::new(RefCell::new(None));

    // Create the chart once the canvas exists, restyle it on theme changes
    {
        let chart = chart.clone();
        Effect::new(move |_| {
            let palette = ChartPalette::for_theme(ctx.theme.get());
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let mut slot = chart.borrow_mut();
            if slot.is_none() {
                match LiveChart::create(&canvas) {
                    Ok(created) => *slot = Some(created),
                    Err(e) => {
                        log::error!("[CHART] failed to create chart: {}", e);
                        return;
                    }
                }
            }
            if let Some(live) = slot.as_ref() {
                if let Err(e) = live.set_palette(palette) {
                    log::warn!("[CHART] failed to apply theme: {}", e);
                }
            }
        });
    }

    Effect::new(move |_| {
        let series = store.readings().get();
        if let Some(live) = chart.borrow().as_ref() {
            if let Err(e) = live.set_readings(series.readings()) {
                log::warn!("[CHART] failed to update data: {}", e);
            }
        }
    });

    view! {
        <section class="live-panel">
            <div class="live-status">
                <span id="status-dot" class=move || store.connection().get().dot_class()></span>
                <span id="status-text">{move || store.connection().get().label()}</span>
            </div>
            {move || store.server_error().get().map(|error| view! {
                <p id="error-message" class="error-message">{format!("Error del servidor: {}", error)}</p>
            })}
            <div class="live-values">
                <div class="live-value">
                    <span class="live-label">"pH"</span>
                    <span id="live-ph">
                        {move || store.live_ph().get().map(format_ph).unwrap_or_else(|| "--".to_string())}
                    </span>
                </div>
                <div class="live-value">
                    <span class="live-label">"Temperatura"</span>
                    <span id="live-temp">
                        {move || store.live_temp().get().map(format_temp).unwrap_or_else(|| "--".to_string())}
                        " "
                        <span class="text-2xl">"°C"</span>
                    </span>
                </div>
            </div>
            <canvas id="realtimeChart" node_ref=canvas_ref></canvas>
        </section>
    }
}
