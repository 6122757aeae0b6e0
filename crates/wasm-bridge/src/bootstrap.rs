//! Page-load bootstrap: find the drawing surface and hand the bubble chart
//! configuration to the charting engine.
//!
//! The DOM and the engine sit behind traits so the sequencing can run
//! without a browser.

use bubble_chart_shared::{
    bubble_chart_configuration, BubbleChartError, BubbleChartResult, ChartConfiguration,
    ConfigValidator,
};

/// Lookup of drawing surfaces by element identifier
pub trait SurfaceLookup {
    type Surface;

    /// `Ok(None)` when no element carries `id`
    fn surface_by_id(&self, id: &str) -> BubbleChartResult<Option<Self::Surface>>;
}

/// An external rendering engine that takes over a surface once constructed
pub trait ChartEngine {
    type Surface;
    type Handle;

    fn construct(
        &self,
        surface: Self::Surface,
        config: &ChartConfiguration,
    ) -> BubbleChartResult<Self::Handle>;
}

/// Mounts the bubble chart on one named surface
pub struct ChartBootstrapper {
    canvas_id: String,
}

impl ChartBootstrapper {
    pub fn new(canvas_id: impl Into<String>) -> Self {
        Self {
            canvas_id: canvas_id.into(),
        }
    }

    /// Run one bootstrap.
    ///
    /// The engine handle is returned to the caller; the bootstrapper keeps no
    /// reference to the surface, the configuration or the engine.
    pub fn initialize<L, E>(&self, lookup: &L, engine: &E) -> BubbleChartResult<E::Handle>
    where
        L: SurfaceLookup,
        E: ChartEngine<Surface = L::Surface>,
    {
        log::info!("Looking for drawing surface with id: {}", self.canvas_id);

        let surface = lookup.surface_by_id(&self.canvas_id)?.ok_or_else(|| {
            log::error!("Drawing surface '{}' not found", self.canvas_id);
            BubbleChartError::MissingSurface {
                id: self.canvas_id.clone(),
            }
        })?;

        let config = bubble_chart_configuration();
        let report = ConfigValidator::validate(&config)?;
        log::debug!(
            "Built {:?} chart with {} points ({} warnings)",
            config.chart_type,
            config.point_count(),
            report.warnings.len()
        );

        let handle = engine.construct(surface, &config).map_err(|e| {
            log::error!("Chart engine rejected configuration: {e}");
            e
        })?;

        log::info!("Bubble chart mounted on '{}'", self.canvas_id);
        Ok(handle)
    }
}
