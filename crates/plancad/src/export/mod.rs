//! File exporters.
//!
//! Each format has an in-memory writer (for tests and embedding) and a
//! path-based `export_*` wrapper that creates the file and logs it.

pub mod dxf;
pub mod json;
pub mod stl;
pub mod svg;

pub use dxf::{export_dxf, write_dxf};
pub use json::{export_json, parts_json};
pub use stl::{export_stl, stl_bytes};
pub use svg::{export_svg, svg_string};

use std::fmt;
use std::str::FromStr;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Format {
    /// DXF R12 drawing sheet.
    Dxf,
    /// SVG drawing sheet.
    Svg,
    /// Binary STL mesh.
    Stl,
    /// JSON list of labeled primitives.
    Json,
}

impl Format {
    /// Every format.
    pub const ALL: [Format; 4] = [Format::Dxf, Format::Svg, Format::Stl, Format::Json];

    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Dxf => "dxf",
            Format::Svg => "svg",
            Format::Stl => "stl",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dxf" => Ok(Format::Dxf),
            "svg" => Ok(Format::Svg),
            "stl" => Ok(Format::Stl),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format: {other}")),
        }
    }
}
