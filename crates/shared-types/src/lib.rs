//! Shared types for the bubble chart bootstrapper
//!
//! This crate holds the configuration model handed to the external charting
//! engine. It has no browser dependencies so the configuration can be built,
//! validated and inspected natively as well as from the wasm bundle.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use tsify::Tsify;

pub mod chart_config;
pub mod errors;
pub mod validation;

pub use chart_config::{bubble_chart_configuration, CANVAS_ID, DATASET_LABEL};
pub use errors::{BubbleChartError, BubbleChartResult};
pub use validation::{ConfigValidator, ValidationReport};

/// A single bubble: position on both axes plus radius
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
pub struct BubblePoint {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl BubblePoint {
    pub const fn new(x: f64, y: f64, r: f64) -> Self {
        Self { x, y, r }
    }
}

/// Chart kinds understood by the engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bubble,
}

/// A labeled series of bubbles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
pub struct Dataset {
    pub label: String,
    pub data: Vec<BubblePoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
pub struct ChartData {
    pub datasets: Vec<Dataset>,
}

/// Scale kinds for an axis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Linear,
}

/// Edge of the chart area an axis is drawn on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Top,
    Bottom,
    Left,
    Right,
}

/// Fixed axis range, serialized as the engine's `ticks` block
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
pub struct AxisConfig {
    #[serde(rename = "type")]
    pub scale_type: ScaleType,
    pub position: AxisPosition,
    pub ticks: AxisRange,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
#[serde(rename_all = "camelCase")]
pub struct Scales {
    pub x_axes: Vec<AxisConfig>,
    pub y_axes: Vec<AxisConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    /// Width divided by height of the canvas
    pub aspect_ratio: f64,
    pub scales: Scales,
}

/// Complete configuration consumed by the charting engine constructor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
pub struct ChartConfiguration {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfiguration {
    /// Total number of points across all datasets
    pub fn point_count(&self) -> usize {
        self.data.datasets.iter().map(|d| d.data.len()).sum()
    }

    /// Render the configuration in the engine's wire shape
    pub fn to_json(&self) -> BubbleChartResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
