//! Binding to the Chart.js constructor loaded on the page

use bubble_chart_shared::{BubbleChartError, BubbleChartResult, ChartConfiguration};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::bootstrap::ChartEngine;

#[wasm_bindgen]
extern "C" {
    /// A live Chart.js instance. It owns drawing, resizing and redraws.
    #[wasm_bindgen(js_name = Chart)]
    pub type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<JsChart, JsValue>;
}

/// Convert the configuration into the plain JS object Chart.js expects
pub fn config_to_js(config: &ChartConfiguration) -> BubbleChartResult<JsValue> {
    // Plain objects rather than Maps
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    config
        .serialize(&serializer)
        .map_err(|e| BubbleChartError::Serialization {
            message: e.to_string(),
        })
}

/// Engine backed by the global `Chart` constructor
pub struct ChartJsEngine;

impl ChartEngine for ChartJsEngine {
    type Surface = HtmlCanvasElement;
    type Handle = JsChart;

    fn construct(
        &self,
        surface: HtmlCanvasElement,
        config: &ChartConfiguration,
    ) -> BubbleChartResult<JsChart> {
        let js_config = config_to_js(config)?;
        log::debug!("Chart config: {:?}", js_config);

        JsChart::new(&surface, &js_config).map_err(|e| BubbleChartError::EngineConstruction {
            message: e
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
                .unwrap_or_else(|| format!("{e:?}")),
        })
    }
}
