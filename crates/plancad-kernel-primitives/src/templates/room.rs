//! Room: four walls cut around a door and a window, frames, and a floor.

use plancad_ir::proportions::room;
use plancad_ir::ObjectSpec;
use plancad_kernel_walls::{room_layout, Wall};

use super::PartBuilder;
use crate::SolidPart;

/// Emit one box per surviving piece of `wall`, named `wall_<tag>_<role>`,
/// plus its frame bars named `frame_<frame_tag>_<role>`.
pub(crate) fn emit_wall(parts: &mut PartBuilder, wall: &Wall, tag: &str, frame_tag: &str) {
    for piece in wall.sub_panels() {
        parts.aabb(
            format!("wall_{tag}_{}", piece.role.as_str()),
            &wall.bounds(&piece),
        );
    }
    for bar in wall.frame(room::FRAME_WIDTH) {
        parts.aabb(
            format!("frame_{frame_tag}_{}", bar.role.as_str()),
            &wall.bounds(&bar),
        );
    }
}

/// Labeled room parts.
pub fn solids(spec: &ObjectSpec) -> Vec<SolidPart> {
    let d = spec.dimensions;
    let layout = room_layout(&d, &spec.features);
    let mut parts = PartBuilder::centered(&d);

    for wall in &layout.walls {
        let frame_tag = wall.opening_kind().map_or("", |k| k.as_str());
        emit_wall(&mut parts, wall, wall.side.as_str(), frame_tag);
    }
    parts.aabb("floor", &layout.floor);
    parts.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use plancad_ir::{keys, Dimension, Features, ObjectType};

    fn room_spec(features: Features) -> ObjectSpec {
        ObjectSpec::new(
            ObjectType::Room,
            Dimension::new(4.0, 5.0, 3.0).unwrap(),
            features,
        )
    }

    fn count(parts: &[SolidPart], prefix: &str) -> usize {
        parts.iter().filter(|p| p.name.starts_with(prefix)).count()
    }

    #[test]
    fn test_default_room_parts() {
        let parts = solids(&room_spec(Features::new()));
        assert!(count(&parts, "wall_west_") <= 3);
        assert_eq!(count(&parts, "wall_west_"), 3);
        assert_eq!(count(&parts, "wall_north_"), 4);
        assert_eq!(count(&parts, "wall_south_"), 1);
        assert_eq!(count(&parts, "wall_east_"), 1);
        assert_eq!(count(&parts, "frame_door_"), 3);
        assert_eq!(count(&parts, "frame_window_"), 4);
        assert_eq!(count(&parts, "floor"), 1);
        assert!(parts.iter().any(|p| p.name == "wall_west_left"));
        assert!(parts.iter().any(|p| p.name == "frame_window_top"));
    }

    #[test]
    fn test_no_openings_gives_four_full_walls() {
        let parts = solids(&room_spec(
            Features::new().with(keys::DOORS, 0).with(keys::WINDOWS, 0),
        ));
        assert_eq!(count(&parts, "wall_"), 4);
        assert_eq!(count(&parts, "frame_"), 0);
        assert!(parts.iter().all(|p| !p.name.starts_with("wall_") || p.name.ends_with("_full")));
    }

    #[test]
    fn test_walls_stay_in_bounds_and_apart() {
        let parts = solids(&room_spec(Features::new()));
        let walls: Vec<_> = parts
            .iter()
            .filter(|p| p.name.starts_with("wall_"))
            .collect();
        for (i, a) in walls.iter().enumerate() {
            let b = a.shape.bounds();
            assert!(b.min.x >= -2.0 - 1e-9 && b.max.x <= 2.0 + 1e-9, "{}", a.name);
            assert!(b.min.y >= -2.5 - 1e-9 && b.max.y <= 2.5 + 1e-9, "{}", a.name);
            for other in &walls[i + 1..] {
                assert!(
                    !b.overlaps(&other.shape.bounds(), 1e-9),
                    "{} overlaps {}",
                    a.name,
                    other.name
                );
            }
        }
    }
}
