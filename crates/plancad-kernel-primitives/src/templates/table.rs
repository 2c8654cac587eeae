//! Table: top on corner legs, or a round top on a ring of legs.

use plancad_ir::proportions::table;
use plancad_ir::{ObjectSpec, SeatShape};
use plancad_kernel_math::{polar, Axis, Point2};

use super::PartBuilder;
use crate::SolidPart;

/// Top slab plus legs. Round tables use cylinders throughout.
pub fn solids(spec: &ObjectSpec) -> Vec<SolidPart> {
    let d = spec.dimensions;
    let mut parts = PartBuilder::centered(&d);
    let top = table::top_thickness(d.height);
    let under = d.height - top;
    let legs = table::leg_count(&spec.features);

    match spec.features.seat_shape() {
        SeatShape::Square => {
            parts.cuboid("top", [0.0, 0.0, under], [d.width, d.length, d.height]);
            let half = table::leg_size(d.width, d.length) / 2.0;
            for (i, (x, y)) in table::corner_leg_positions(d.width, d.length)
                .into_iter()
                .take(legs as usize)
                .enumerate()
            {
                parts.cuboid(
                    format!("leg_{i}"),
                    [x - half, y - half, 0.0],
                    [x + half, y + half, under],
                );
            }
        }
        SeatShape::Circular => {
            let center = Point2::new(d.width / 2.0, d.length / 2.0);
            let radius = table::top_radius(d.width, d.length);
            parts.cylinder(
                "top",
                [center.x, center.y, under + top / 2.0],
                radius,
                top,
                Axis::Z,
            );
            let ring = radius * table::LEG_RING_RATIO;
            let leg_r = table::leg_radius(d.width, d.length);
            for i in 0..legs {
                let p = polar(center, ring, table::leg_angle_deg(i, legs));
                parts.cylinder(
                    format!("leg_{i}"),
                    [p.x, p.y, under / 2.0],
                    leg_r,
                    under,
                    Axis::Z,
                );
            }
        }
    }
    parts.finish()
}
