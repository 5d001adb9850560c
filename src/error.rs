//! Error types for confidence-gate.

use thiserror::Error;

/// Top-level error type for gating operations.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Invalid calibration value: {field} - {message}")]
    InvalidCalibrationValue { field: String, message: String },

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Tool execution failed: {0}")]
    ToolExecutionFailed(String),

    #[error("Notification delivery failed: {0}")]
    NotificationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for GateError {
    fn from(err: serde_json::Error) -> Self {
        GateError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for GateError {
    fn from(err: config::ConfigError) -> Self {
        GateError::ConfigError(err.to_string())
    }
}

/// Result type alias for gating operations.
pub type GateResult<T> = Result<T, GateError>;
