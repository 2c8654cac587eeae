//! Facade error type.

use plancad_ir::SynthesisError;
use thiserror::Error;

/// Errors returned by synthesis, configuration and export.
#[derive(Error, Debug)]
pub enum PlancadError {
    /// The object description was rejected.
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
    /// A view scale or margin that is not a finite positive number.
    #[error("invalid sheet setting {field}: {value}")]
    InvalidSetting {
        /// Setting name.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// An I/O error occurred while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON input or output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// TOML input failed to parse.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, PlancadError>;
