//! Chart.js Bindings
//!
//! Line chart of pH and temperature over time.

use js_sys::{Array, Object, Reflect};
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::js_err;
use crate::models::Reading;
use crate::theme::{ChartPalette, PH_COLOR, TEMP_COLOR};

#[wasm_bindgen]
extern "C" {
    type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(ctx: &web_sys::CanvasRenderingContext2d, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    fn update(this: &Chart, mode: &str);

    #[wasm_bindgen(method)]
    fn destroy(this: &Chart);

    #[wasm_bindgen(method, getter)]
    fn data(this: &Chart) -> JsValue;

    #[wasm_bindgen(method, getter)]
    fn options(this: &Chart) -> JsValue;
}

/// Chart configuration: pH on the left axis, temperature on the right
pub fn chart_config() -> Value {
    json!({
        "type": "line",
        "data": {
            "labels": [],
            "datasets": [
                { "label": "pH", "data": [], "borderColor": PH_COLOR, "yAxisID": "y" },
                { "label": "Temperatura (°C)", "data": [], "borderColor": TEMP_COLOR, "yAxisID": "y1" }
            ]
        },
        "options": {
            "responsive": true,
            "interaction": { "mode": "index", "intersect": false },
            "scales": {
                "x": {
                    "type": "time",
                    "time": { "unit": "second", "displayFormats": { "second": "HH:mm:ss" } },
                    "title": { "display": true, "text": "Tiempo" }
                },
                "y": {
                    "type": "linear",
                    "position": "left",
                    "title": { "display": true, "text": "pH" },
                    "min": 0,
                    "max": 14
                },
                "y1": {
                    "type": "linear",
                    "position": "right",
                    "title": { "display": true, "text": "Temperatura (°C)" },
                    "grid": { "drawOnChartArea": false }
                }
            },
            "plugins": { "legend": { "position": "top" } }
        }
    })
}

/// A Chart.js chart bound to one canvas
pub struct LiveChart {
    chart: Chart,
}

impl LiveChart {
    pub fn create(canvas: &web_sys::HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| "canvas has no 2d context".to_string())?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .map_err(|_| "unexpected canvas context".to_string())?;
        let config = chart_config()
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| e.to_string())?;
        let chart = Chart::new(&ctx, &config).map_err(js_err)?;
        Ok(Self { chart })
    }

    /// Replace the plotted series
    pub fn set_readings(&self, readings: &[Reading]) -> Result<(), String> {
        let labels: Array = readings.iter().map(|r| JsValue::from_f64(r.at_ms)).collect();
        let ph: Array = readings.iter().map(|r| optional_number(r.ph)).collect();
        let temp: Array = readings.iter().map(|r| optional_number(r.temp)).collect();

        let data = self.chart.data();
        Reflect::set(&data, &"labels".into(), &labels).map_err(js_err)?;
        let datasets = Reflect::get(&data, &"datasets".into()).map_err(js_err)?;
        for (index, series) in [ph, temp].iter().enumerate() {
            let dataset = Reflect::get_u32(&datasets, index as u32).map_err(js_err)?;
            Reflect::set(&dataset, &"data".into(), series).map_err(js_err)?;
        }
        self.chart.update("quiet");
        Ok(())
    }

    /// Recolor ticks, titles and legend
    pub fn set_palette(&self, palette: ChartPalette) -> Result<(), String> {
        let options = self.chart.options();
        let paths: [(&[&str], &str); 7] = [
            (&["scales", "x", "ticks", "color"], palette.tick),
            (&["scales", "y", "ticks", "color"], palette.ph_axis),
            (&["scales", "y1", "ticks", "color"], palette.temp_axis),
            (&["scales", "x", "title", "color"], palette.title),
            (&["scales", "y", "title", "color"], palette.title),
            (&["scales", "y1", "title", "color"], palette.title),
            (&["plugins", "legend", "labels", "color"], palette.title),
        ];
        for (path, color) in paths {
            set_path(&options, path, &JsValue::from_str(color)).map_err(js_err)?;
        }
        self.chart.update("none");
        Ok(())
    }
}

impl Drop for LiveChart {
    fn drop(&mut self) {
        self.chart.destroy();
    }
}

fn optional_number(value: Option<f64>) -> JsValue {
    value.map(JsValue::from_f64).unwrap_or(JsValue::NULL)
}

/// `root.a.b.c = value`, creating intermediate objects
fn set_path(root: &JsValue, path: &[&str], value: &JsValue) -> Result<(), JsValue> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(());
    };
    let mut node = root.clone();
    for key in parents {
        let key = JsValue::from_str(key);
        let mut next = Reflect::get(&node, &key)?;
        if !next.is_object() {
            next = Object::new().into();
            Reflect::set(&node, &key, &next)?;
        }
        node = next;
    }
    Reflect::set(&node, &JsValue::from_str(last), value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_config_axes() {
        let config = chart_config();
        assert_eq!(config["options"]["scales"]["y"]["min"], json!(0));
        assert_eq!(config["options"]["scales"]["y"]["max"], json!(14));
        assert_eq!(config["options"]["scales"]["y1"]["position"], json!("right"));

        let datasets = config["data"]["datasets"].as_array().unwrap();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0]["yAxisID"], json!("y"));
        assert_eq!(datasets[1]["yAxisID"], json!("y1"));
    }
}
