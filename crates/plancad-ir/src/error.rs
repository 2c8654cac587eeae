//! Errors raised by the synthesis core.

use thiserror::Error;

/// Errors raised while building or synthesizing an object.
///
/// Only invalid dimensions are fatal. Unknown types, degenerate openings and
/// malformed feature values all degrade to default geometry instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynthesisError {
    /// A width, length or height that is zero, negative or not finite.
    #[error("invalid {axis}: {value} (dimensions must be finite and greater than zero)")]
    InvalidDimension {
        /// Which axis was rejected (`"width"`, `"length"` or `"height"`).
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Result type for synthesis operations.
pub type Result<T> = std::result::Result<T, SynthesisError>;
