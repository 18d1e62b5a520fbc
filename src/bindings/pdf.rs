//! html2canvas and jsPDF Bindings
//!
//! Rasterize a DOM subtree and wrap the image in an A4 PDF.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::js_err;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = html2canvas)]
    fn html2canvas(element: &web_sys::HtmlElement, options: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_namespace = jspdf, js_name = jsPDF)]
    type JsPdf;

    #[wasm_bindgen(constructor, catch, js_namespace = jspdf, js_class = "jsPDF")]
    fn new(options: &JsValue) -> Result<JsPdf, JsValue>;

    #[wasm_bindgen(method, catch, js_name = addImage)]
    fn add_image(this: &JsPdf, data: &str, format: &str, x: f64, y: f64, width: f64, height: f64) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn output(this: &JsPdf, kind: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, getter)]
    fn internal(this: &JsPdf) -> PdfInternal;

    type PdfInternal;

    #[wasm_bindgen(method, getter, js_name = pageSize)]
    fn page_size(this: &PdfInternal) -> PdfPageSize;

    type PdfPageSize;

    #[wasm_bindgen(method, js_name = getWidth)]
    fn get_width(this: &PdfPageSize) -> f64;
}

#[derive(Serialize)]
struct CanvasOptions {
    scale: f64,
}

#[derive(Serialize)]
struct PdfOptions {
    orientation: &'static str,
    unit: &'static str,
    format: &'static str,
}

/// Render `element` to a canvas at `scale` device pixels per CSS pixel
pub async fn render_to_canvas(element: &web_sys::HtmlElement, scale: f64) -> Result<web_sys::HtmlCanvasElement, String> {
    let options = serde_wasm_bindgen::to_value(&CanvasOptions { scale }).map_err(|e| e.to_string())?;
    let promise = html2canvas(element, &options).map_err(js_err)?;
    let canvas = JsFuture::from(promise).await.map_err(js_err)?;
    canvas
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "html2canvas did not return a canvas".to_string())
}

/// Height that keeps the aspect ratio at `target_width`
pub fn scaled_height(source_width: f64, source_height: f64, target_width: f64) -> f64 {
    if source_width <= 0.0 {
        return 0.0;
    }
    source_height * target_width / source_width
}

/// A4 portrait PDF with the canvas image at full page width
pub fn canvas_to_pdf(canvas: &web_sys::HtmlCanvasElement) -> Result<web_sys::Blob, String> {
    let image = canvas.to_data_url_with_type("image/png").map_err(js_err)?;
    let options = serde_wasm_bindgen::to_value(&PdfOptions {
        orientation: "p",
        unit: "mm",
        format: "a4",
    })
    .map_err(|e| e.to_string())?;

    let pdf = JsPdf::new(&options).map_err(js_err)?;
    let width = pdf.internal().page_size().get_width();
    let height = scaled_height(canvas.width() as f64, canvas.height() as f64, width);
    pdf.add_image(&image, "PNG", 0.0, 0.0, width, height).map_err(js_err)?;
    pdf.output("blob")
        .map_err(js_err)?
        .dyn_into::<web_sys::Blob>()
        .map_err(|_| "jsPDF did not return a blob".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_height() {
        assert_eq!(scaled_height(1000.0, 2000.0, 210.0), 420.0);
        assert_eq!(scaled_height(0.0, 100.0, 210.0), 0.0);
    }
}
