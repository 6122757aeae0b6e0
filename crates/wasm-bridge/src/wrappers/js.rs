use std::collections::HashMap;

use bubble_chart_shared::{BubbleChartError, BubbleChartResult};
use web_sys::{window, UrlSearchParams};

/// Query string parameters of the current page
pub fn query_params() -> BubbleChartResult<HashMap<String, String>> {
    let location = window().ok_or(BubbleChartError::NoWindow)?.location();

    // Full query string, including the leading '?'
    let search = location.search()?;
    let params = UrlSearchParams::new_with_str(&search)?;

    let mut map = HashMap::new();

    // Each entry is a two-element array `[key, value]`
    let entries = js_sys::try_iter(&params.entries())?.ok_or_else(|| {
        BubbleChartError::JsInterop {
            message: "Query entries are not iterable".to_string(),
        }
    })?;
    for entry in entries {
        let pair = js_sys::Array::from(&entry?);
        if let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            map.insert(key, value);
        }
    }

    Ok(map)
}
