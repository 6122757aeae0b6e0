//! The bubble chart configuration mounted on page load

use crate::{
    AxisConfig, AxisPosition, AxisRange, BubblePoint, ChartConfiguration, ChartData, ChartOptions,
    ChartType, Dataset, ScaleType, Scales,
};

/// Identifier of the canvas element the chart is drawn into
pub const CANVAS_ID: &str = "myChart";

pub const DATASET_LABEL: &str = "Pixel 250";

pub const ASPECT_RATIO: f64 = 0.5;

pub const X_RANGE: AxisRange = AxisRange::new(0.0, 1000.0);

pub const Y_RANGE: AxisRange = AxisRange::new(0.0, 2000.0);

pub const POINTS: [BubblePoint; 3] = [
    BubblePoint::new(400.0, 1200.0, 20.0),
    BubblePoint::new(250.0, 800.0, 40.0),
    BubblePoint::new(600.0, 890.0, 8.0),
];

/// Build the chart configuration.
///
/// Every call returns a fresh value; nothing is shared between the
/// configurations handed to separate engine instances.
pub fn bubble_chart_configuration() -> ChartConfiguration {
    ChartConfiguration {
        chart_type: ChartType::Bubble,
        data: ChartData {
            datasets: vec![Dataset {
                label: DATASET_LABEL.to_string(),
                data: POINTS.to_vec(),
            }],
        },
        options: ChartOptions {
            responsive: true,
            aspect_ratio: ASPECT_RATIO,
            scales: Scales {
                x_axes: vec![AxisConfig {
                    scale_type: ScaleType::Linear,
                    position: AxisPosition::Bottom,
                    ticks: X_RANGE,
                }],
                y_axes: vec![AxisConfig {
                    scale_type: ScaleType::Linear,
                    position: AxisPosition::Left,
                    ticks: Y_RANGE,
                }],
            },
        },
    }
}
