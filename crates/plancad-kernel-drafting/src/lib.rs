#![warn(missing_docs)]

//! 2D drafting templates for plancad.
//!
//! Turns an [`ObjectSpec`] into two orthographic line drawings:
//!
//! - **Top view**: plan, corner origin, `x` east and `y` north.
//! - **Front view**: elevation of the south face, corner origin, `y` up.
//!
//! Every coordinate is meters multiplied by the caller's `scale`, and all
//! geometry stays within `[0, width * scale]` horizontally so the two views
//! can sit side by side without overlapping. Roofs may rise above the
//! nominal height in the front view.
//!
//! # Example
//!
//! ```
//! use plancad_ir::{keys, Dimension, Features, ObjectSpec, ObjectType};
//! use plancad_kernel_drafting::draft;
//!
//! let spec = ObjectSpec::new(
//!     ObjectType::Chair,
//!     Dimension::new(0.40, 0.40, 0.45).unwrap(),
//!     Features::new().with(keys::LEGS, 4),
//! );
//! let views = draft(&spec, 100.0);
//! assert_eq!(views.top.len(), 5); // seat + four legs
//! ```

pub mod path;
pub mod templates;
pub mod types;

pub use path::PathDescriptor;
pub use templates::{view_template, ViewFn, ViewTemplate};
pub use types::{Point2D, ViewKind};

use plancad_ir::ObjectSpec;
use serde::{Deserialize, Serialize};

/// The pair of drawings produced for one object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftingViews {
    /// Plan view.
    pub top: PathDescriptor,
    /// Front elevation.
    pub front: PathDescriptor,
}

impl DraftingViews {
    /// Drawing for a given view.
    pub fn view(&self, kind: ViewKind) -> &PathDescriptor {
        match kind {
            ViewKind::Top => &self.top,
            ViewKind::Front => &self.front,
        }
    }
}

/// Top view of an object at `scale` output units per meter.
pub fn top_view(spec: &ObjectSpec, scale: f64) -> PathDescriptor {
    (view_template(spec.object_type).top)(spec, scale)
}

/// Front view of an object at `scale` output units per meter.
pub fn front_view(spec: &ObjectSpec, scale: f64) -> PathDescriptor {
    (view_template(spec.object_type).front)(spec, scale)
}

/// Both views of an object at `scale` output units per meter.
///
/// Dimensions are assumed valid; the `plancad` facade checks them
/// before calling in.
pub fn draft(spec: &ObjectSpec, scale: f64) -> DraftingViews {
    DraftingViews {
        top: top_view(spec, scale),
        front: front_view(spec, scale),
    }
}
