//! House: main walls with an entrance and side windows, a roof, and an
//! optional garage at the north-east corner.

use std::collections::BTreeMap;

use plancad_ir::proportions::house;
use plancad_ir::{ObjectSpec, RoofStyle, Side};
use plancad_kernel_math::Point3;
use plancad_kernel_walls::{house_layout, HouseLayout};

use super::room::emit_wall;
use super::PartBuilder;
use crate::SolidPart;

/// Labeled house parts.
pub fn solids(spec: &ObjectSpec) -> Vec<SolidPart> {
    let d = spec.dimensions;
    let layout = house_layout(&d, &spec.features);
    let mut parts = PartBuilder::centered(&d);

    emit_main_walls(&mut parts, &layout);

    if let Some(garage) = &layout.garage {
        for wall in &garage.walls {
            let tag = format!("garage_{}", wall.side);
            emit_wall(&mut parts, wall, &tag, &tag);
        }
        parts.aabb("garage_roof", &garage.roof);
    }

    let (mw, l, h) = (layout.main_width, d.length, d.height);
    match spec.features.roof_style() {
        RoofStyle::Modern => {
            parts.cuboid(
                "roof",
                [0.0, 0.0, h],
                [mw, l, h + house::SLAB_ROOF_THICKNESS],
            );
        }
        RoofStyle::Traditional => {
            let (vertices, faces) = gable_prism(mw, l, h, house::ROOF_RISE_RATIO * h);
            parts.polyhedron("roof", vertices, faces);
        }
    }
    parts.finish()
}

/// Main walls. Sides split into bays get an index in their tag
/// (`wall_east_1_left`).
fn emit_main_walls(parts: &mut PartBuilder, layout: &HouseLayout) {
    let mut per_side: BTreeMap<Side, usize> = BTreeMap::new();
    for wall in &layout.walls {
        *per_side.entry(wall.side).or_default() += 1;
    }
    let mut seen: BTreeMap<Side, usize> = BTreeMap::new();
    for wall in &layout.walls {
        let index = seen.entry(wall.side).or_default();
        let tag = if per_side[&wall.side] > 1 {
            format!("{}_{index}", wall.side)
        } else {
            wall.side.to_string()
        };
        *index += 1;
        emit_wall(parts, wall, &tag, &tag);
    }
}

/// Triangular prism over `[0, width] x [0, length]` sitting on `z = base`,
/// ridge along `y` at mid-width.
fn gable_prism(width: f64, length: f64, base: f64, rise: f64) -> (Vec<Point3>, Vec<[u32; 3]>) {
    let ridge = width / 2.0;
    let top = base + rise;
    let vertices = vec![
        Point3::new(0.0, 0.0, base),
        Point3::new(width, 0.0, base),
        Point3::new(ridge, 0.0, top),
        Point3::new(0.0, length, base),
        Point3::new(width, length, base),
        Point3::new(ridge, length, top),
    ];
    let faces = vec![
        // South gable, facing -y.
        [0, 1, 2],
        // North gable, facing +y.
        [3, 5, 4],
        // Floor, facing -z.
        [0, 3, 4],
        [0, 4, 1],
        // East slope.
        [1, 4, 5],
        [1, 5, 2],
        // West slope.
        [0, 2, 5],
        [0, 5, 3],
    ];
    (vertices, faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Primitive;
    use approx::assert_relative_eq;
    use plancad_ir::{keys, Dimension, Features, ObjectType};

    fn house_spec(features: Features) -> ObjectSpec {
        ObjectSpec::new(
            ObjectType::House,
            Dimension::new(8.0, 10.0, 3.5).unwrap(),
            features,
        )
    }

    fn roof(parts: &[SolidPart]) -> &Primitive {
        &parts.iter().find(|p| p.name == "roof").unwrap().shape
    }

    #[test]
    fn test_traditional_roof_is_closed_prism() {
        let parts = solids(&house_spec(Features::new()));
        let Primitive::Polyhedron { vertices, faces } = roof(&parts) else {
            panic!("expected a polyhedron roof");
        };
        assert_eq!(vertices.len(), 6);
        assert_eq!(faces.len(), 8);
        // Half of base times rise, times length.
        let expected = 0.5 * 8.0 * (0.3 * 3.5) * 10.0;
        assert_relative_eq!(roof(&parts).volume(), expected, epsilon = 1e-9);
        let b = roof(&parts).bounds();
        assert_relative_eq!(b.max.z, 3.5 * 1.3, epsilon = 1e-12);
        assert_relative_eq!(b.min.x, -4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_modern_roof_is_slab() {
        let parts = solids(&house_spec(Features::new().with(keys::STYLE, "modern")));
        let b = roof(&parts).bounds();
        assert!(matches!(roof(&parts), Primitive::Box { .. }));
        assert_relative_eq!(b.min.z, 3.5);
        assert_relative_eq!(b.max.z, 3.65, epsilon = 1e-12);
    }

    #[test]
    fn test_window_bays_are_tagged() {
        let parts = solids(&house_spec(Features::new().with(keys::WINDOWS, 4)));
        for tag in ["east_0", "east_1", "west_0", "west_1"] {
            let frames = parts
                .iter()
                .filter(|p| p.name.starts_with(&format!("frame_{tag}_")))
                .count();
            assert_eq!(frames, 4, "{tag}");
        }
        let names: std::collections::BTreeSet<_> = parts.iter().map(|p| &p.name).collect();
        assert_eq!(names.len(), parts.len(), "part names must be unique");
    }

    #[test]
    fn test_garage_parts() {
        let parts = solids(&house_spec(Features::new().with(keys::HAS_GARAGE, true)));
        assert!(parts.iter().any(|p| p.name == "garage_roof"));
        assert!(parts.iter().any(|p| p.name.starts_with("wall_garage_south_")));
        assert!(!parts.iter().any(|p| p.name.starts_with("wall_garage_west")));
        // Main roof covers only the main body.
        let b = roof(&parts).bounds();
        assert_relative_eq!(b.max.x - b.min.x, 6.0, epsilon = 1e-12);
    }
}
