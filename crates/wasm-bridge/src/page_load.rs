//! Page-load trigger for the bootstrap

use bubble_chart_shared::BubbleChartError;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, DocumentReadyState, Window};

use crate::to_js_error;

/// How the page-load signal reaches the bootstrap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTrigger {
    /// The load event has already fired
    Immediate,
    /// Wait for the window's load event
    OnLoad,
}

impl LoadTrigger {
    pub fn for_state(state: DocumentReadyState) -> Self {
        match state {
            DocumentReadyState::Complete => LoadTrigger::Immediate,
            _ => LoadTrigger::OnLoad,
        }
    }
}

/// Mount now if the page has finished loading, otherwise on its load event
pub fn mount_when_loaded(window: &Window) -> Result<LoadTrigger, JsValue> {
    let document = window
        .document()
        .ok_or_else(|| to_js_error(BubbleChartError::NoDocument))?;

    let trigger = LoadTrigger::for_state(document.ready_state());
    match trigger {
        LoadTrigger::Immediate => {
            log::info!("Page already loaded, mounting chart");
            crate::initialize()?;
        }
        LoadTrigger::OnLoad => {
            defer_until_load(window)?;
            log::info!("Bubble chart bootstrap waiting for page load");
        }
    }
    Ok(trigger)
}

/// Register a one-shot `load` listener that mounts the chart
pub fn defer_until_load(window: &Window) -> Result<(), JsValue> {
    let on_load = Closure::once_into_js(|| {
        if let Err(e) = crate::initialize() {
            wasm_bindgen::throw_val(e);
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "load",
        on_load.unchecked_ref(),
        &options,
    )
}
