// Browser tests, run with: wasm-pack test --headless --chrome crates/wasm-bridge
#![cfg(target_arch = "wasm32")]

use bubble_chart_shared::{bubble_chart_configuration, BubbleChartError};
use bubble_chart_wasm::bootstrap::{ChartBootstrapper, ChartEngine, SurfaceLookup};
use bubble_chart_wasm::dom::DocumentSurfaces;
use bubble_chart_wasm::engine::ChartJsEngine;
use bubble_chart_wasm::page_load::{defer_until_load, mount_when_loaded, LoadTrigger};
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

fn document() -> web_sys::Document {
    window().document().unwrap()
}

fn get(target: &JsValue, path: &[&str]) -> JsValue {
    path.iter().fold(target.clone(), |value, key| {
        Reflect::get(&value, &JsValue::from_str(key)).unwrap()
    })
}

fn remove_global(name: &str) {
    Reflect::delete_property(&js_sys::global(), &JsValue::from_str(name)).unwrap();
}

/// Element attached to the body for the lifetime of the value
struct PageElement(web_sys::Element);

impl PageElement {
    fn append(tag: &str, id: &str) -> Self {
        // Start from a page without the id, whatever earlier tests left behind
        while let Some(stale) = document().get_element_by_id(id) {
            stale.remove();
        }

        let element = document().create_element(tag).unwrap();
        element.set_id(id);
        document().body().unwrap().append_child(&element).unwrap();
        PageElement(element)
    }

    fn value(&self) -> JsValue {
        self.0.clone().into()
    }
}

impl Drop for PageElement {
    fn drop(&mut self) {
        self.0.remove();
    }
}

/// Stand-in for Chart.js installed as the global `Chart`. Every constructed
/// instance keeps its arguments and is collected in `mountedCharts`.
struct FakeChart;

impl FakeChart {
    fn install() -> Self {
        let fake = Function::new_with_args(
            "canvas, config",
            "this.canvas = canvas; this.config = config; globalThis.mountedCharts.push(this);",
        );
        Reflect::set(&js_sys::global(), &"mountedCharts".into(), &Array::new()).unwrap();
        Reflect::set(&js_sys::global(), &"Chart".into(), &fake).unwrap();
        FakeChart
    }

    fn mounted(&self) -> Array {
        Array::from(&get(&js_sys::global(), &["mountedCharts"]))
    }
}

impl Drop for FakeChart {
    fn drop(&mut self) {
        remove_global("Chart");
        remove_global("mountedCharts");
    }
}

/// The single mounted chart received `canvas` and the literal bubble data
fn assert_mounted_on(fake: &FakeChart, canvas: &PageElement) {
    let mounted = fake.mounted();
    assert_eq!(mounted.length(), 1);

    let chart = mounted.get(0);
    assert_eq!(get(&chart, &["canvas"]), canvas.value());
    assert_eq!(get(&chart, &["config", "type"]).as_string().as_deref(), Some("bubble"));

    let datasets = Array::from(&get(&chart, &["config", "data", "datasets"]));
    assert_eq!(
        get(&datasets.get(0), &["label"]).as_string().as_deref(),
        Some("Pixel 250")
    );

    let points = Array::from(&get(&datasets.get(0), &["data"]));
    let literal: Vec<(f64, f64, f64)> = points
        .iter()
        .map(|p| {
            (
                get(&p, &["x"]).as_f64().unwrap(),
                get(&p, &["y"]).as_f64().unwrap(),
                get(&p, &["r"]).as_f64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        literal,
        vec![(400.0, 1200.0, 20.0), (250.0, 800.0, 40.0), (600.0, 890.0, 8.0)]
    );
}

#[wasm_bindgen_test]
fn test_config_is_plain_object() {
    let config = bubble_chart_wasm::bubble_chart_config().unwrap();

    assert_eq!(get(&config, &["type"]).as_string().as_deref(), Some("bubble"));
    assert_eq!(get(&config, &["options", "aspectRatio"]).as_f64(), Some(0.5));
    assert_eq!(get(&config, &["options", "responsive"]).as_bool(), Some(true));

    let x_axes = Array::from(&get(&config, &["options", "scales", "xAxes"]));
    assert_eq!(x_axes.length(), 1);
    assert_eq!(get(&x_axes.get(0), &["ticks", "max"]).as_f64(), Some(1000.0));
    assert_eq!(get(&x_axes.get(0), &["position"]).as_string().as_deref(), Some("bottom"));

    let datasets = Array::from(&get(&config, &["data", "datasets"]));
    let points = Array::from(&get(&datasets.get(0), &["data"]));
    assert_eq!(points.length(), 3);
    assert_eq!(get(&points.get(1), &["r"]).as_f64(), Some(40.0));
}

#[wasm_bindgen_test]
fn test_missing_canvas_fails() {
    let fake = FakeChart::install();
    let _other = PageElement::append("canvas", "otherChart");

    let surfaces = DocumentSurfaces::from_window().unwrap();
    assert!(surfaces.surface_by_id("noSuchChart").unwrap().is_none());

    let result = ChartBootstrapper::new("noSuchChart").initialize(&surfaces, &ChartJsEngine);
    assert!(matches!(result, Err(BubbleChartError::MissingSurface { .. })));
    assert_eq!(fake.mounted().length(), 0);
}

#[wasm_bindgen_test]
fn test_non_canvas_element_rejected() {
    let _div = PageElement::append("div", "divChart");

    let surfaces = DocumentSurfaces::from_window().unwrap();
    let result = surfaces.surface_by_id("divChart");
    assert!(matches!(result, Err(BubbleChartError::NotACanvas { .. })));
}

#[wasm_bindgen_test]
fn test_engine_unavailable() {
    remove_global("Chart");
    let _canvas = PageElement::append("canvas", "orphanChart");

    let surfaces = DocumentSurfaces::from_window().unwrap();
    let result = ChartBootstrapper::new("orphanChart").initialize(&surfaces, &ChartJsEngine);
    assert!(matches!(result, Err(BubbleChartError::EngineConstruction { .. })));
}

#[wasm_bindgen_test]
fn test_engine_receives_canvas_and_config() {
    let fake = FakeChart::install();
    let canvas = PageElement::append("canvas", "fakeChart");

    let surfaces = DocumentSurfaces::from_window().unwrap();
    let surface = surfaces.surface_by_id("fakeChart").unwrap().unwrap();
    let chart: JsValue = ChartJsEngine
        .construct(surface, &bubble_chart_configuration())
        .unwrap()
        .into();

    assert_eq!(get(&chart, &["canvas"]), canvas.value());
    assert!(get(&chart, &["config", "options", "scales", "yAxes"]).is_array());
    assert_mounted_on(&fake, &canvas);
}

#[wasm_bindgen_test]
fn test_initialize_mounts_on_my_chart() {
    let fake = FakeChart::install();
    let canvas = PageElement::append("canvas", "myChart");

    bubble_chart_wasm::initialize().unwrap();

    assert_mounted_on(&fake, &canvas);
}

#[wasm_bindgen_test]
fn test_initialize_without_canvas_fails() {
    let fake = FakeChart::install();
    while let Some(stale) = document().get_element_by_id("myChart") {
        stale.remove();
    }

    assert!(bubble_chart_wasm::initialize().is_err());
    assert_eq!(fake.mounted().length(), 0);
}

#[wasm_bindgen_test]
fn test_mount_follows_ready_state() {
    let fake = FakeChart::install();
    let canvas = PageElement::append("canvas", "myChart");

    let expected = LoadTrigger::for_state(document().ready_state());
    let trigger = mount_when_loaded(&window()).unwrap();
    assert_eq!(trigger, expected);

    // The test runner normally starts after the page has loaded
    if trigger == LoadTrigger::OnLoad {
        assert_eq!(fake.mounted().length(), 0);
        window()
            .dispatch_event(&web_sys::Event::new("load").unwrap())
            .unwrap();
    }
    assert_mounted_on(&fake, &canvas);
}

#[wasm_bindgen_test]
fn test_load_event_mounts_once() {
    let fake = FakeChart::install();
    let canvas = PageElement::append("canvas", "myChart");

    defer_until_load(&window()).unwrap();
    assert_eq!(fake.mounted().length(), 0);

    let load = || web_sys::Event::new("load").unwrap();
    window().dispatch_event(&load()).unwrap();
    assert_mounted_on(&fake, &canvas);

    // The listener is one-shot
    window().dispatch_event(&load()).unwrap();
    assert_eq!(fake.mounted().length(), 1);
}

#[wasm_bindgen_test]
fn test_query_params_readable() {
    assert!(bubble_chart_wasm::wrappers::js::query_params().is_ok());
}

#[wasm_bindgen_test]
fn test_js_value_becomes_interop_error() {
    let err: BubbleChartError = JsValue::from_str("boom").into();
    match err {
        BubbleChartError::JsInterop { message } => assert!(message.contains("boom")),
        other => panic!("Expected JsInterop, got {other:?}"),
    }
}
