//! Chair: seat slab on corner legs.

use plancad_ir::proportions::chair;
use plancad_ir::ObjectSpec;

use super::PartBuilder;
use crate::SolidPart;

/// Seat slab plus one square leg per requested corner.
pub fn solids(spec: &ObjectSpec) -> Vec<SolidPart> {
    let d = spec.dimensions;
    let mut parts = PartBuilder::centered(&d);

    let seat_top = chair::SEAT_HEIGHT_RATIO * d.height;
    let seat_bottom = seat_top - chair::seat_thickness(d.height);
    parts.cuboid("seat", [0.0, 0.0, seat_bottom], [d.width, d.length, seat_top]);

    let half = chair::leg_size(d.width, d.length) / 2.0;
    let legs = chair::leg_count(&spec.features) as usize;
    for (i, (x, y)) in chair::leg_positions(d.width, d.length)
        .into_iter()
        .take(legs)
        .enumerate()
    {
        parts.cuboid(
            format!("leg_{i}"),
            [x - half, y - half, 0.0],
            [x + half, y + half, seat_bottom],
        );
    }
    parts.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use plancad_ir::{keys, Dimension, Features, ObjectType};

    fn chair(legs: i64) -> ObjectSpec {
        ObjectSpec::new(
            ObjectType::Chair,
            Dimension::new(0.40, 0.40, 0.45).unwrap(),
            Features::new().with(keys::LEGS, legs),
        )
    }

    fn leg_parts(parts: &[SolidPart]) -> usize {
        parts.iter().filter(|p| p.name.starts_with("leg_")).count()
    }

    #[test]
    fn test_leg_count_matches_request() {
        for n in 0..=4 {
            let parts = solids(&chair(n));
            assert_eq!(leg_parts(&parts), n as usize, "legs = {n}");
            assert_eq!(parts.len(), n as usize + 1);
        }
        assert_eq!(leg_parts(&solids(&chair(7))), 4);
        assert_eq!(leg_parts(&solids(&chair(-2))), 1);
    }

    #[test]
    fn test_seat_top_and_legs_meet() {
        let parts = solids(&chair(4));
        let seat = parts.iter().find(|p| p.name == "seat").unwrap().shape.bounds();
        assert_relative_eq!(seat.max.z, 0.18, epsilon = 1e-12);
        for leg in parts.iter().filter(|p| p.name.starts_with("leg_")) {
            let b = leg.shape.bounds();
            assert_relative_eq!(b.min.z, 0.0);
            assert_relative_eq!(b.max.z, seat.min.z, epsilon = 1e-12);
            assert!(b.min.x >= -0.2 - 1e-12 && b.max.x <= 0.2 + 1e-12);
        }
    }
}
