//! WASM bridge for the bubble chart
//!
//! On page load this locates the `myChart` canvas and hands the bubble chart
//! configuration to Chart.js, which owns rendering from then on.

use std::sync::Once;

use bubble_chart_shared::{bubble_chart_configuration, BubbleChartError, BubbleChartResult};
use wasm_bindgen::prelude::*;

pub mod bootstrap;
pub mod dom;
pub mod engine;
pub mod page_load;
pub mod settings;
pub mod wrappers;

use bootstrap::ChartBootstrapper;
use dom::DocumentSurfaces;
use engine::{ChartJsEngine, JsChart};
use settings::BootstrapSettings;

static INIT: Once = Once::new();

/// Install the panic hook and console logger, once per module instance
fn init_logging(level: log::Level) {
    INIT.call_once(|| {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        // Another logger may already be installed by the host page
        let _ = console_log::init_with_level(level);
    });
}

/// Read the page settings, then log whatever was wrong with them once a
/// logger exists
fn load_settings() -> BootstrapSettings {
    let (settings, warnings) = BootstrapSettings::from_page();
    init_logging(settings.log_level);
    for warning in warnings {
        log::warn!("{warning}");
    }
    settings
}

pub(crate) fn to_js_error(err: BubbleChartError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Mount the chart on the live document
pub fn mount(settings: &BootstrapSettings) -> BubbleChartResult<JsChart> {
    let surfaces = DocumentSurfaces::from_window()?;
    ChartBootstrapper::new(settings.canvas_id.as_str()).initialize(&surfaces, &ChartJsEngine)
}

/// Mount the chart once. The engine keeps its own reference to the chart.
#[wasm_bindgen]
pub fn initialize() -> Result<(), JsValue> {
    let settings = load_settings();

    mount(&settings).map(drop).map_err(|e| {
        log::error!("Chart initialization failed: {e}");
        to_js_error(e)
    })
}

/// The chart configuration as a plain JS object
#[wasm_bindgen]
pub fn bubble_chart_config() -> Result<JsValue, JsValue> {
    engine::config_to_js(&bubble_chart_configuration()).map_err(to_js_error)
}

/// Module entry point: mount on page load.
///
/// Only registered as the wasm start hook with the `autostart` feature, so
/// test bundles can instantiate without a `myChart` canvas.
#[cfg_attr(feature = "autostart", wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    load_settings();

    let window = web_sys::window().ok_or_else(|| to_js_error(BubbleChartError::NoWindow))?;
    page_load::mount_when_loaded(&window).map(drop)
}
