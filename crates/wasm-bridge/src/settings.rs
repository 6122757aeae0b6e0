//! Bootstrap settings

use std::collections::HashMap;

use bubble_chart_shared::CANVAS_ID;

/// Query parameter selecting the console log level
pub const LOG_LEVEL_PARAM: &str = "log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapSettings {
    pub canvas_id: String,
    pub log_level: log::Level,
}

impl Default for BootstrapSettings {
    fn default() -> Self {
        Self {
            canvas_id: CANVAS_ID.to_string(),
            log_level: log::Level::Info,
        }
    }
}

impl BootstrapSettings {
    /// Apply page query parameters. Only the log level is configurable; the
    /// canvas identifier is fixed.
    ///
    /// Problems are returned as warnings rather than logged, since the log
    /// level is not known yet.
    pub fn from_query(params: &HashMap<String, String>) -> (Self, Vec<String>) {
        let mut settings = Self::default();
        let mut warnings = Vec::new();
        if let Some(level) = params.get(LOG_LEVEL_PARAM) {
            match level.parse::<log::Level>() {
                Ok(level) => settings.log_level = level,
                Err(_) => warnings.push(format!("Ignoring unknown log level: {level}")),
            }
        }
        (settings, warnings)
    }

    /// Settings for the current page, falling back to defaults when the
    /// query string cannot be read
    pub fn from_page() -> (Self, Vec<String>) {
        match crate::wrappers::js::query_params() {
            Ok(params) => Self::from_query(&params),
            Err(e) => (
                Self::default(),
                vec![format!("Using default settings, query string unreadable: {e}")],
            ),
        }
    }
}
