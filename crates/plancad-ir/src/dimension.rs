//! Bounding-box dimensions in meters.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynthesisError};

/// Bounding box of an object, in meters.
///
/// Every template divides by these values, so all three must be finite and
/// strictly positive. [`Dimension::new`] and deserialization both enforce
/// this; the synthesis entry points check again with [`Dimension::validate`]
/// since the fields are public.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDimension")]
pub struct Dimension {
    /// Extent along x (east-west), meters.
    pub width: f64,
    /// Extent along y (south-north), meters.
    pub length: f64,
    /// Extent along z (up), meters.
    pub height: f64,
}

#[derive(Deserialize)]
struct RawDimension {
    width: f64,
    length: f64,
    height: f64,
}

impl TryFrom<RawDimension> for Dimension {
    type Error = SynthesisError;

    fn try_from(raw: RawDimension) -> Result<Self> {
        Dimension::new(raw.width, raw.length, raw.height)
    }
}

impl Dimension {
    /// Create validated dimensions.
    pub fn new(width: f64, length: f64, height: f64) -> Result<Self> {
        let dims = Self {
            width,
            length,
            height,
        };
        dims.validate()?;
        Ok(dims)
    }

    /// Check that every axis is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        for (axis, value) in [
            ("width", self.width),
            ("length", self.length),
            ("height", self.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SynthesisError::InvalidDimension { axis, value });
            }
        }
        Ok(())
    }

    /// Footprint area (`width * length`) in square meters.
    pub fn footprint_area(&self) -> f64 {
        self.width * self.length
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2} x {:.2} x {:.2} m",
            self.width, self.length, self.height
        )
    }
}
