//! Chair: seat on up to four corner legs, with a backrest in elevation.

use plancad_ir::proportions::chair;
use plancad_ir::ObjectSpec;

use crate::path::PathDescriptor;

/// Legs drawn for a chair: the requested count, capped at the four corners.
pub fn leg_count(spec: &ObjectSpec) -> usize {
    chair::leg_count(&spec.features) as usize
}

/// Seat outline plus one square per leg.
pub fn top_view(spec: &ObjectSpec, scale: f64) -> PathDescriptor {
    let d = spec.dimensions;
    let mut path = PathDescriptor::new();
    path.rect(0.0, 0.0, d.width * scale, d.length * scale);

    let size = chair::leg_size(d.width, d.length) * scale;
    for (x, y) in chair::leg_positions(d.width, d.length)
        .into_iter()
        .take(leg_count(spec))
    {
        path.square(x * scale, y * scale, size);
    }
    path
}

/// Seat band, backrest above it and the visible front legs.
pub fn front_view(spec: &ObjectSpec, scale: f64) -> PathDescriptor {
    let d = spec.dimensions;
    let (w, h) = (d.width * scale, d.height * scale);
    let seat_top = chair::SEAT_HEIGHT_RATIO * h;
    let seat_bottom = seat_top - chair::seat_thickness(d.height) * scale;

    let mut path = PathDescriptor::new();
    path.rect(0.0, seat_bottom, w, seat_top);
    path.rect(0.0, seat_top, w, h);

    // Front-left and front-right come first in leg order.
    for (x, _) in chair::leg_positions(d.width, d.length)
        .into_iter()
        .take(leg_count(spec).min(2))
    {
        path.line(x * scale, 0.0, x * scale, seat_bottom);
    }
    path
}
