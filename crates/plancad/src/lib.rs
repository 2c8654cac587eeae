#![warn(missing_docs)]

//! plancad: parametric drawings and solids from a short object description.
//!
//! An [`ObjectSpec`] (type tag, bounding dimensions in metres, and a bag of
//! features such as leg or window counts) goes in. Out come two aligned
//! representations built from the same proportions:
//!
//! - a top view and a front view as multi-stroke polylines, and
//! - a list of labeled box, cylinder and polyhedron primitives.
//!
//! The [`export`] module writes these as DXF, SVG, binary STL or JSON.
//!
//! # Example
//!
//! ```
//! use plancad::{synthesize_2d, synthesize_3d, Dimension, Features, ObjectSpec, ObjectType};
//! use plancad::ir::keys;
//!
//! let spec = ObjectSpec::new(
//!     ObjectType::Chair,
//!     Dimension::new(0.40, 0.40, 0.45).unwrap(),
//!     Features::new().with(keys::LEGS, 4),
//! );
//! let views = synthesize_2d(&spec).unwrap();
//! let parts = synthesize_3d(&spec).unwrap();
//! assert_eq!(views.top.len(), 5);
//! assert_eq!(parts.len(), 5);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod sheet;

pub use config::{PlancadConfig, SheetSettings};
pub use error::{PlancadError, Result};
pub use sheet::Sheet;

pub use plancad_ir as ir;
pub use plancad_ir::{Dimension, Features, ObjectRequest, ObjectSpec, ObjectType};
pub use plancad_kernel_drafting::{DraftingViews, PathDescriptor, Point2D, ViewKind};
pub use plancad_kernel_primitives::{Primitive, SolidPart};
pub use plancad_kernel_tessellate::{TessellationParams, TriangleMesh};

use std::path::Path;

use plancad_ir::keys;
use tracing::{debug, info, instrument, warn};

const COUNT_KEYS: [&str; 5] = [keys::LEGS, keys::DOORS, keys::WINDOWS, keys::SEATS, keys::BEDROOMS];

fn check(spec: &ObjectSpec) -> Result<()> {
    spec.dimensions.validate()?;
    if spec.object_type == ObjectType::Generic {
        info!("no dedicated template, using the generic box");
    }
    for key in COUNT_KEYS {
        if spec.features.is_negative_count(key) {
            warn!(key, "negative count clamped to the minimum");
        }
    }
    Ok(())
}

/// Top and front views in metres.
pub fn synthesize_2d(spec: &ObjectSpec) -> Result<DraftingViews> {
    synthesize_2d_scaled(spec, 1.0)
}

/// Top and front views at `scale` output units per metre.
#[instrument(skip(spec), fields(object = %spec.object_type, dims = %spec.dimensions))]
pub fn synthesize_2d_scaled(spec: &ObjectSpec, scale: f64) -> Result<DraftingViews> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(PlancadError::InvalidSetting {
            field: "scale",
            value: scale,
        });
    }
    check(spec)?;
    let views = plancad_kernel_drafting::draft(spec, scale);
    debug!(
        top = views.top.len(),
        front = views.front.len(),
        "drafted views"
    );
    Ok(views)
}

/// Labeled primitives, centered on the origin with the floor at `z = 0`.
#[instrument(skip(spec), fields(object = %spec.object_type, dims = %spec.dimensions))]
pub fn synthesize_3d(spec: &ObjectSpec) -> Result<Vec<SolidPart>> {
    check(spec)?;
    let parts = plancad_kernel_primitives::solids(spec);
    debug!(parts = parts.len(), "built solids");
    Ok(parts)
}

/// Both views laid out on one sheet.
pub fn render_sheet(spec: &ObjectSpec, settings: &SheetSettings) -> Result<Sheet> {
    settings.validate()?;
    let views = synthesize_2d_scaled(spec, settings.scale)?;
    Ok(Sheet::layout(&views, spec.dimensions.width, settings))
}

/// Read an [`ObjectRequest`] from a `.toml` or `.json` file and resolve it
/// into a validated spec.
pub fn load_spec(path: impl AsRef<Path>) -> Result<ObjectSpec> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let request: ObjectRequest = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => toml::from_str(&text)?,
        _ => serde_json::from_str(&text)?,
    };
    Ok(request.resolve()?)
}
