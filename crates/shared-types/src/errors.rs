//! Error types for the bubble chart bootstrapper

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for bootstrap operations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum BubbleChartError {
    // Drawing surface errors
    #[error("Drawing surface not found: no element with id '{id}'")]
    MissingSurface { id: String },

    #[error("Element '{id}' is not a canvas")]
    NotACanvas { id: String },

    // Host environment errors
    #[error("No window object available")]
    NoWindow,

    #[error("No document object available")]
    NoDocument,

    // Engine errors
    #[error("Chart engine failed to construct: {message}")]
    EngineConstruction { message: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },

    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    #[error("JavaScript interop error: {message}")]
    JsInterop { message: String },
}

/// Result type alias for bootstrap operations
pub type BubbleChartResult<T> = Result<T, BubbleChartError>;

impl BubbleChartError {
    pub fn invalid_config(message: impl Into<String>, field: &str) -> Self {
        BubbleChartError::InvalidConfig {
            message: message.into(),
            field: Some(field.to_string()),
        }
    }
}

impl From<serde_json::Error> for BubbleChartError {
    fn from(err: serde_json::Error) -> Self {
        BubbleChartError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "wasm")]
impl From<wasm_bindgen::JsValue> for BubbleChartError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        BubbleChartError::JsInterop {
            message: format!("{err:?}"),
        }
    }
}
