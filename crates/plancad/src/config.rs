//! Output settings, loadable from TOML.
//!
//! ```toml
//! [dxf]
//! scale = 100.0   # centimetres per metre
//! margin = 20.0
//!
//! [svg]
//! scale = 50.0    # pixels per metre
//! margin = 20.0
//!
//! [mesh]
//! circle_segments = 32
//! ```
//!
//! Every key is optional; an empty file gives the defaults above.

use std::path::Path;

use plancad_kernel_tessellate::TessellationParams;
use serde::{Deserialize, Serialize};

use crate::error::{PlancadError, Result};

/// Scale and margin for one 2D output target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetSettings {
    /// Output units per metre.
    pub scale: f64,
    /// Blank border around and between the views, in output units.
    pub margin: f64,
}

impl SheetSettings {
    /// Defaults for DXF output (centimetres).
    pub const DXF: SheetSettings = SheetSettings {
        scale: 100.0,
        margin: 20.0,
    };

    /// Defaults for SVG output (pixels).
    pub const SVG: SheetSettings = SheetSettings {
        scale: 50.0,
        margin: 20.0,
    };

    /// Unit scale with no margin, for raw geometry in metres.
    pub const METERS: SheetSettings = SheetSettings {
        scale: 1.0,
        margin: 0.0,
    };

    /// Check that the scale is positive and the margin non-negative.
    pub fn validate(&self) -> Result<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(PlancadError::InvalidSetting {
                field: "scale",
                value: self.scale,
            });
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(PlancadError::InvalidSetting {
                field: "margin",
                value: self.margin,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSheet {
    scale: Option<f64>,
    margin: Option<f64>,
}

impl RawSheet {
    fn resolve(self, base: SheetSettings) -> SheetSettings {
        SheetSettings {
            scale: self.scale.unwrap_or(base.scale),
            margin: self.margin.unwrap_or(base.margin),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    dxf: RawSheet,
    #[serde(default)]
    svg: RawSheet,
    #[serde(default)]
    mesh: TessellationParams,
}

/// Settings for every output target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlancadConfig {
    /// DXF sheet.
    pub dxf: SheetSettings,
    /// SVG sheet.
    pub svg: SheetSettings,
    /// Cylinder tessellation for mesh output.
    pub mesh: TessellationParams,
}

impl Default for PlancadConfig {
    fn default() -> Self {
        Self {
            dxf: SheetSettings::DXF,
            svg: SheetSettings::SVG,
            mesh: TessellationParams::default(),
        }
    }
}

impl PlancadConfig {
    /// Parse a TOML document, filling in defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(text)?;
        let config = Self {
            dxf: raw.dxf.resolve(SheetSettings::DXF),
            svg: raw.svg.resolve(SheetSettings::SVG),
            mesh: TessellationParams::from_segments(raw.mesh.circle_segments),
        };
        config.dxf.validate()?;
        config.svg.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = PlancadConfig::from_toml_str("").unwrap();
        assert_eq!(config, PlancadConfig::default());
        assert_eq!(config.dxf.scale, 100.0);
        assert_eq!(config.svg.scale, 50.0);
        assert_eq!(config.mesh.circle_segments, 32);
    }

    #[test]
    fn test_partial_table_keeps_target_defaults() {
        let config = PlancadConfig::from_toml_str("[svg]\nmargin = 5.0\n").unwrap();
        assert_eq!(config.svg.scale, 50.0);
        assert_eq!(config.svg.margin, 5.0);
        assert_eq!(config.dxf, SheetSettings::DXF);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            PlancadConfig::from_toml_str("[dxf]\nscale = 0.0\n"),
            Err(PlancadError::InvalidSetting { field: "scale", .. })
        ));
        assert!(matches!(
            PlancadConfig::from_toml_str("[svg]\nmargin = -1.0\n"),
            Err(PlancadError::InvalidSetting { field: "margin", .. })
        ));
        assert!(matches!(
            PlancadConfig::from_toml_str("[dxf]\nzoom = 2.0\n"),
            Err(PlancadError::Toml(_))
        ));
    }

    #[test]
    fn test_mesh_segments_floor() {
        let config = PlancadConfig::from_toml_str("[mesh]\ncircle_segments = 1\n").unwrap();
        assert_eq!(config.mesh.circle_segments, 3);
    }
}
