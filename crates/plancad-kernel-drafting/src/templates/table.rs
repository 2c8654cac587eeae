//! Table: rectangular or round top on legs.

use plancad_ir::proportions::table;
use plancad_ir::{ObjectSpec, SeatShape};
use plancad_kernel_math::{polar, Point2};

use crate::path::PathDescriptor;

const CIRCLE_SEGMENTS: u32 = 48;
const LEG_SEGMENTS: u32 = 12;

/// Legs for a table. Rectangular tables cap at the four corners.
pub fn leg_count(spec: &ObjectSpec) -> u32 {
    table::leg_count(&spec.features)
}

/// Leg centers of a round table in corner coordinates, meters.
fn ring_positions(spec: &ObjectSpec) -> Vec<Point2> {
    let d = spec.dimensions;
    let center = Point2::new(d.width / 2.0, d.length / 2.0);
    let ring = table::top_radius(d.width, d.length) * table::LEG_RING_RATIO;
    let n = leg_count(spec);
    (0..n)
        .map(|i| polar(center, ring, table::leg_angle_deg(i, n)))
        .collect()
}

/// Top outline plus one mark per leg.
pub fn top_view(spec: &ObjectSpec, scale: f64) -> PathDescriptor {
    let d = spec.dimensions;
    let mut path = PathDescriptor::new();
    match spec.features.seat_shape() {
        SeatShape::Square => {
            path.rect(0.0, 0.0, d.width * scale, d.length * scale);
            let size = table::leg_size(d.width, d.length) * scale;
            for (x, y) in table::corner_leg_positions(d.width, d.length)
                .into_iter()
                .take(leg_count(spec) as usize)
            {
                path.square(x * scale, y * scale, size);
            }
        }
        SeatShape::Circular => {
            let r = table::top_radius(d.width, d.length) * scale;
            path.circle(d.width * scale / 2.0, d.length * scale / 2.0, r, CIRCLE_SEGMENTS);
            let leg_r = table::leg_radius(d.width, d.length) * scale;
            for p in ring_positions(spec) {
                path.circle(p.x * scale, p.y * scale, leg_r, LEG_SEGMENTS);
            }
        }
    }
    path
}

/// Thin top band with the outermost legs below it.
pub fn front_view(spec: &ObjectSpec, scale: f64) -> PathDescriptor {
    let d = spec.dimensions;
    let (w, h) = (d.width * scale, d.height * scale);
    let under_top = h - table::top_thickness(d.height) * scale;
    let mut path = PathDescriptor::new();

    match spec.features.seat_shape() {
        SeatShape::Square => {
            path.rect(0.0, under_top, w, h);
            let size = table::leg_size(d.width, d.length) * scale;
            let legs = leg_count(spec) as usize;
            // Front-left and front-right legs hide the back pair.
            for (x, _) in table::corner_leg_positions(d.width, d.length)
                .into_iter()
                .take(legs.min(2))
            {
                let x = x * scale;
                path.rect(x - size / 2.0, 0.0, x + size / 2.0, under_top);
            }
        }
        SeatShape::Circular => {
            let cx = w / 2.0;
            let r = table::top_radius(d.width, d.length) * scale;
            path.rect(cx - r, under_top, cx + r, h);

            let leg_r = table::leg_radius(d.width, d.length) * scale;
            let xs: Vec<f64> = ring_positions(spec).iter().map(|p| p.x * scale).collect();
            let left = xs.iter().copied().fold(f64::INFINITY, f64::min);
            let right = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            if left.is_finite() {
                path.rect(left - leg_r, 0.0, left + leg_r, under_top);
                if right - left > 2.0 * leg_r {
                    path.rect(right - leg_r, 0.0, right + leg_r, under_top);
                }
            }
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use plancad_ir::{keys, Dimension, Features, ObjectType};

    fn round_table(legs: i64) -> ObjectSpec {
        ObjectSpec::new(
            ObjectType::Table,
            Dimension::new(1.0, 1.0, 0.75).unwrap(),
            Features::new()
                .with(keys::LEGS, legs)
                .with(keys::SEAT_SHAPE, "circular"),
        )
    }

    #[test]
    fn test_rect_table_views() {
        let spec = ObjectSpec::new(
            ObjectType::Table,
            Dimension::new(0.80, 1.20, 0.75).unwrap(),
            Features::new(),
        );
        assert_eq!(top_view(&spec, 100.0).len(), 5);
        assert_eq!(front_view(&spec, 100.0).len(), 3);
    }

    #[test]
    fn test_round_table_leg_ring() {
        let spec = round_table(6);
        assert_eq!(top_view(&spec, 100.0).len(), 7);

        let legs = ring_positions(&spec);
        assert_eq!(legs.len(), 6);
        // First leg sits straight below the center at -90 degrees.
        assert!((legs[0].x - 0.5).abs() < 1e-12);
        assert!((legs[0].y - (0.5 - 0.35)).abs() < 1e-12);
        for pair in legs.windows(2) {
            let a = (pair[0].y - 0.5).atan2(pair[0].x - 0.5);
            let b = (pair[1].y - 0.5).atan2(pair[1].x - 0.5);
            let step = (b - a).to_degrees().rem_euclid(360.0);
            assert!((step - 60.0).abs() < 1e-9, "step {step}");
        }
    }

    #[test]
    fn test_round_table_front_legs() {
        // Two legs on the y axis project onto the same x.
        assert_eq!(front_view(&round_table(2), 100.0).len(), 2);
        assert_eq!(front_view(&round_table(6), 100.0).len(), 3);
    }
}
