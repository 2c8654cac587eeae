//! Sofa: base, cushions, backrest and two armrests.
//!
//! The same [`sofa::plan_split`] and [`sofa::height_split`] drive the 2D
//! views, so the cushion tops always sit on the drawn seat line.

use plancad_ir::proportions::sofa;
use plancad_ir::ObjectSpec;

use super::PartBuilder;
use crate::SolidPart;

/// Labeled sofa parts.
pub fn solids(spec: &ObjectSpec) -> Vec<SolidPart> {
    let d = spec.dimensions;
    let (w, l, h) = (d.width, d.length, d.height);
    let (arm, back) = sofa::plan_split(w, l);
    let (seat, arm_top) = sofa::height_split(h);
    let cushion = sofa::CUSHION_RATIO * seat;

    let mut parts = PartBuilder::centered(&d);
    parts.cuboid("base", [arm, 0.0, 0.0], [w - arm, l, seat - cushion]);

    let seats = sofa::seat_count(&spec.features);
    if seats > 0 {
        let span = (w - 2.0 * arm) / f64::from(seats);
        for i in 0..seats {
            let x0 = arm + span * f64::from(i);
            parts.cuboid(
                format!("cushion_{i}"),
                [x0, 0.0, seat - cushion],
                [x0 + span, l - back, seat],
            );
        }
    }

    parts.cuboid("backrest", [arm, l - back, seat - cushion], [w - arm, l, h]);
    parts.cuboid("armrest_left", [0.0, 0.0, 0.0], [arm, l, arm_top]);
    parts.cuboid("armrest_right", [w - arm, 0.0, 0.0], [w, l, arm_top]);
    parts.finish()
}
