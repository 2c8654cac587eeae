//! Sofa: armrests either side of a seat, backrest along the back.

use plancad_ir::proportions::sofa;
use plancad_ir::ObjectSpec;

use crate::path::PathDescriptor;

/// Outline, two armrest bands, and the front edge of the backrest.
pub fn top_view(spec: &ObjectSpec, scale: f64) -> PathDescriptor {
    let d = spec.dimensions;
    let (w, l) = (d.width * scale, d.length * scale);
    let (arm, back) = sofa::plan_split(d.width, d.length);
    let (arm, back) = (arm * scale, back * scale);

    let mut path = PathDescriptor::new();
    path.rect(0.0, 0.0, w, l);
    path.rect(0.0, 0.0, arm, l);
    path.rect(w - arm, 0.0, w, l);
    path.line(arm, l - back, w - arm, l - back);
    path
}

/// Seat band up to the seat plane, backrest band above it, and the two
/// armrests at the sides.
pub fn front_view(spec: &ObjectSpec, scale: f64) -> PathDescriptor {
    let d = spec.dimensions;
    let (w, h) = (d.width * scale, d.height * scale);
    let (arm, _) = sofa::plan_split(d.width, d.length);
    let arm = arm * scale;
    let (seat, arm_top) = sofa::height_split(d.height);
    let (seat, arm_top) = (seat * scale, arm_top * scale);

    let mut path = PathDescriptor::new();
    path.rect(arm, seat, w - arm, h);
    path.rect(arm, 0.0, w - arm, seat);
    path.rect(0.0, 0.0, arm, arm_top);
    path.rect(w - arm, 0.0, w, arm_top);
    path
}
