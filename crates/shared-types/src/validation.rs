//! Configuration validation utilities

use crate::{AxisConfig, AxisRange, BubbleChartError, BubbleChartResult, ChartConfiguration};

/// Outcome of a successful validation pass.
///
/// Warnings describe presentational problems the engine tolerates, such as
/// bubbles that fall outside the visible axis range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &ChartConfiguration) -> BubbleChartResult<ValidationReport> {
        let mut report = ValidationReport::default();

        // Options first so the axis ranges are known good for the point checks
        Self::validate_options(config)?;
        let x_range = Self::primary_range(&config.options.scales.x_axes, "scales.xAxes")?;
        let y_range = Self::primary_range(&config.options.scales.y_axes, "scales.yAxes")?;

        Self::validate_datasets(config, x_range, y_range, &mut report)?;

        for warning in &report.warnings {
            log::warn!("{warning}");
        }

        Ok(report)
    }

    fn validate_options(config: &ChartConfiguration) -> BubbleChartResult<()> {
        let ratio = config.options.aspect_ratio;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(BubbleChartError::invalid_config(
                format!("Invalid aspect ratio: {ratio}. Must be a positive number"),
                "aspectRatio",
            ));
        }

        for (field, axes) in [
            ("scales.xAxes", &config.options.scales.x_axes),
            ("scales.yAxes", &config.options.scales.y_axes),
        ] {
            for axis in axes {
                Self::validate_range(&axis.ticks, field)?;
            }
        }

        Ok(())
    }

    fn validate_range(range: &AxisRange, field: &str) -> BubbleChartResult<()> {
        if !range.min.is_finite() || !range.max.is_finite() {
            return Err(BubbleChartError::invalid_config(
                format!("Axis range [{}, {}] is not finite", range.min, range.max),
                field,
            ));
        }

        if range.min >= range.max {
            return Err(BubbleChartError::invalid_config(
                format!(
                    "Invalid axis range [{}, {}]. Minimum must be below maximum",
                    range.min, range.max
                ),
                field,
            ));
        }

        Ok(())
    }

    /// The first axis of a direction determines where points are visible
    fn primary_range(axes: &[AxisConfig], field: &str) -> BubbleChartResult<AxisRange> {
        axes.first().map(|axis| axis.ticks).ok_or_else(|| {
            BubbleChartError::invalid_config(format!("Missing axis in {field}"), field)
        })
    }

    fn validate_datasets(
        config: &ChartConfiguration,
        x_range: AxisRange,
        y_range: AxisRange,
        report: &mut ValidationReport,
    ) -> BubbleChartResult<()> {
        if config.data.datasets.is_empty() {
            return Err(BubbleChartError::invalid_config(
                "Chart has no datasets",
                "data.datasets",
            ));
        }

        for (dataset_index, dataset) in config.data.datasets.iter().enumerate() {
            if dataset.label.trim().is_empty() {
                return Err(BubbleChartError::invalid_config(
                    format!("Dataset {dataset_index} has an empty label"),
                    "data.datasets.label",
                ));
            }

            for (point_index, point) in dataset.data.iter().enumerate() {
                if !point.x.is_finite() || !point.y.is_finite() {
                    return Err(BubbleChartError::invalid_config(
                        format!(
                            "Point {point_index} of '{}' has non-finite coordinates ({}, {})",
                            dataset.label, point.x, point.y
                        ),
                        "data.datasets.data",
                    ));
                }

                if !point.r.is_finite() || point.r < 0.0 {
                    return Err(BubbleChartError::invalid_config(
                        format!(
                            "Point {point_index} of '{}' has invalid radius {}",
                            dataset.label, point.r
                        ),
                        "data.datasets.data.r",
                    ));
                }

                if !x_range.contains(point.x) || !y_range.contains(point.y) {
                    report.warnings.push(format!(
                        "Point {point_index} of '{}' at ({}, {}) lies outside the visible range",
                        dataset.label, point.x, point.y
                    ));
                }
            }
        }

        Ok(())
    }
}
