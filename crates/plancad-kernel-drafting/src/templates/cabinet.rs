//! Cabinet: outline with one division stroke between neighbouring doors.

use plancad_ir::proportions::cabinet;
use plancad_ir::ObjectSpec;

use crate::path::PathDescriptor;

/// Door count for a cabinet.
pub fn door_count(spec: &ObjectSpec) -> u32 {
    cabinet::door_count(&spec.features)
}

fn divided(width: f64, depth: f64, doors: u32) -> PathDescriptor {
    let mut path = PathDescriptor::new();
    path.rect(0.0, 0.0, width, depth);
    for i in 1..doors {
        let x = width * f64::from(i) / f64::from(doors);
        path.line(x, 0.0, x, depth);
    }
    path
}

/// Plan outline with door divisions.
pub fn top_view(spec: &ObjectSpec, scale: f64) -> PathDescriptor {
    let d = spec.dimensions;
    divided(d.width * scale, d.length * scale, door_count(spec))
}

/// Elevation outline with door divisions.
pub fn front_view(spec: &ObjectSpec, scale: f64) -> PathDescriptor {
    let d = spec.dimensions;
    divided(d.width * scale, d.height * scale, door_count(spec))
}
