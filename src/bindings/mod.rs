//! JavaScript Library Bindings
//!
//! Frontend bindings to the chart, rasterizer and PDF libraries loaded by
//! `index.html`.

mod chart;
mod pdf;

pub use chart::*;
pub use pdf::*;

use wasm_bindgen::JsValue;

/// Readable message for a thrown JS value
pub fn js_err(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
