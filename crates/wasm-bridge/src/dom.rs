//! DOM access for the bootstrap

use bubble_chart_shared::{BubbleChartError, BubbleChartResult};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

use crate::bootstrap::SurfaceLookup;

/// Canvas lookup over the page's document
pub struct DocumentSurfaces {
    document: Document,
}

impl DocumentSurfaces {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> BubbleChartResult<Self> {
        let document = web_sys::window()
            .ok_or(BubbleChartError::NoWindow)?
            .document()
            .ok_or(BubbleChartError::NoDocument)?;
        Ok(Self::new(document))
    }
}

impl SurfaceLookup for DocumentSurfaces {
    type Surface = HtmlCanvasElement;

    fn surface_by_id(&self, id: &str) -> BubbleChartResult<Option<HtmlCanvasElement>> {
        let Some(element) = self.document.get_element_by_id(id) else {
            return Ok(None);
        };

        log::info!("Found element: {:?}", element.tag_name());

        element
            .dyn_into::<HtmlCanvasElement>()
            .map(Some)
            .map_err(|_| {
                log::error!("Element with id '{}' is not a canvas element", id);
                BubbleChartError::NotACanvas { id: id.to_string() }
            })
    }
}
