//! Fallback template: a plain outline in each view.

use plancad_ir::ObjectSpec;

use crate::path::PathDescriptor;

/// `width x length` outline.
pub fn top_view(spec: &ObjectSpec, scale: f64) -> PathDescriptor {
    let d = spec.dimensions;
    let mut path = PathDescriptor::new();
    path.rect(0.0, 0.0, d.width * scale, d.length * scale);
    path
}

/// `width x height` outline.
pub fn front_view(spec: &ObjectSpec, scale: f64) -> PathDescriptor {
    let d = spec.dimensions;
    let mut path = PathDescriptor::new();
    path.rect(0.0, 0.0, d.width * scale, d.height * scale);
    path
}
