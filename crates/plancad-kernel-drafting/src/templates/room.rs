//! Room: walls in plan broken at the openings, elevation with the openings.

use plancad_ir::{ObjectSpec, Side};
use plancad_kernel_walls::{room_layout, OpeningKind, Wall};

use crate::path::PathDescriptor;

/// Plan: one outline per surviving wall span, plus a glazing line across
/// each window.
pub fn top_view(spec: &ObjectSpec, scale: f64) -> PathDescriptor {
    let layout = room_layout(&spec.dimensions, &spec.features);
    let mut path = PathDescriptor::new();
    for wall in &layout.walls {
        draw_wall_plan(&mut path, wall, scale);
    }
    path
}

/// Draw a wall's plan spans and, for a window, the glazing line.
pub(crate) fn draw_wall_plan(path: &mut PathDescriptor, wall: &Wall, scale: f64) {
    for (u0, u1) in wall.plan_spans() {
        let r = wall.plan_rect(u0, u1);
        path.rect(
            r.min.x * scale,
            r.min.y * scale,
            r.max.x * scale,
            r.max.y * scale,
        );
    }
    if let Some(opening) = wall.opening.as_ref().filter(|o| o.has_hole()) {
        if opening.kind() == OpeningKind::Window {
            let (u0, u1) = opening.lateral_range();
            let (a, b) = (wall.plan_point(u0), wall.plan_point(u1));
            path.line(a.x * scale, a.y * scale, b.x * scale, b.y * scale);
        }
    }
}

/// Horizontal center of an opening in the front elevation, meters.
///
/// North and south openings face the viewer and keep their plan position.
/// West and east openings are seen edge-on, so they are marked in the left
/// or right quarter of the elevation.
pub(crate) fn elevation_center(wall: &Wall, width: f64) -> Option<f64> {
    let opening = wall.opening.as_ref()?;
    let (u0, u1) = opening.lateral_range();
    Some(match wall.side {
        Side::West => 0.25 * width,
        Side::East => 0.75 * width,
        Side::North | Side::South => wall.plan_point((u0 + u1) / 2.0).x,
    })
}

/// Elevation rectangle of an opening: `(x0, x1, v0, v1)` in meters.
type Mark = (f64, f64, f64, f64);

fn marks_overlap(a: &Mark, b: &Mark) -> bool {
    const EPS: f64 = 1e-9;
    a.0 + EPS < b.1 && b.0 + EPS < a.1 && a.2 + EPS < b.3 && b.2 + EPS < a.3
}

/// Outline plus one rectangle per opening.
///
/// Openings on different walls can land on the same spot of the elevation
/// (a south door and a north window, or a west door next to a centered
/// window in a narrow room). When two marks would overlap they are set side
/// by side instead, keeping their left-to-right order, as a pair centered on
/// the elevation.
pub fn front_view(spec: &ObjectSpec, scale: f64) -> PathDescriptor {
    let d = spec.dimensions;
    let layout = room_layout(&d, &spec.features);
    let mut path = PathDescriptor::new();
    path.rect(0.0, 0.0, d.width * scale, d.height * scale);

    let mut marks: Vec<Mark> = Vec::with_capacity(2);
    for side in [layout.door_side, layout.window_side].into_iter().flatten() {
        let Some(wall) = layout.wall(side) else {
            continue;
        };
        let Some(opening) = wall.opening.as_ref().filter(|o| o.has_hole()) else {
            continue;
        };
        let Some(center) = elevation_center(wall, d.width) else {
            continue;
        };
        let (u0, u1) = opening.lateral_range();
        let (v0, v1) = opening.vertical_range();
        let w = (u1 - u0).min(d.width);
        let x0 = (center - w / 2.0).clamp(0.0, d.width - w);
        marks.push((x0, x0 + w, v0, v1));
    }

    if let [a, b] = marks.as_mut_slice() {
        if marks_overlap(a, b) {
            let (left, right) = if a.0 <= b.0 { (a, b) } else { (b, a) };
            let (lw, rw) = (left.1 - left.0, right.1 - right.0);
            let start = ((d.width - lw - rw) / 2.0).max(0.0);
            left.0 = start;
            left.1 = start + lw;
            right.0 = left.1;
            right.1 = left.1 + rw;
        }
    }

    for (x0, x1, v0, v1) in marks {
        path.rect(x0 * scale, v0 * scale, x1 * scale, v1 * scale);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use plancad_ir::{keys, Dimension, Features, ObjectType};

    fn room(features: Features) -> ObjectSpec {
        ObjectSpec::new(
            ObjectType::Room,
            Dimension::new(4.0, 5.0, 3.0).unwrap(),
            features,
        )
    }

    #[test]
    fn test_plan_breaks() {
        let spec = room(
            Features::new()
                .with(keys::DOOR_POSITION, "west")
                .with(keys::WINDOW_POSITION, "north"),
        );
        let path = top_view(&spec, 30.0);
        // west: 2 spans, north: 2 spans + glazing, south and east: 1 each
        assert_eq!(path.len(), 7);
        let b = path.bounds().unwrap();
        assert!((b.max.x - 120.0).abs() < 1e-9 && (b.max.y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_plain_room_plan() {
        let spec = room(Features::new().with(keys::DOORS, 0).with(keys::WINDOWS, 0));
        assert_eq!(top_view(&spec, 30.0).len(), 4);
        assert_eq!(front_view(&spec, 30.0).len(), 1);
    }

    #[test]
    fn test_front_openings() {
        let path = front_view(&room(Features::new()), 1.0);
        assert_eq!(path.len(), 3);
        let strokes: Vec<_> = path.subpaths().collect();
        // Door on the west wall sits in the left quarter.
        let door_mid = (strokes[1][0].x + strokes[1][1].x) / 2.0;
        assert!((door_mid - 1.0).abs() < 1e-9, "door at {door_mid}");
        // Window on the north wall stays centered, sill at 1 m.
        let window_mid = (strokes[2][0].x + strokes[2][1].x) / 2.0;
        assert!((window_mid - 2.0).abs() < 1e-9);
        assert!((strokes[2][0].y - 1.0).abs() < 1e-9);
    }

    fn x_range(stroke: &[crate::Point2D]) -> (f64, f64) {
        stroke.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)))
    }

    #[test]
    fn test_south_door_and_north_window_do_not_overlap() {
        let spec = room(Features::new().with(keys::DOOR_POSITION, "south"));
        let path = front_view(&spec, 1.0);
        assert_eq!(path.len(), 3);
        let strokes: Vec<_> = path.subpaths().collect();
        let door = x_range(strokes[1]);
        let window = x_range(strokes[2]);
        assert!(
            door.1 <= window.0 + 1e-9 || window.1 <= door.0 + 1e-9,
            "door {door:?} window {window:?}"
        );
        // 0.8 door + 1.2 window, centered as a pair in the 4 m elevation.
        assert!((door.0.min(window.0) - 1.0).abs() < 1e-9);
        assert!((door.1.max(window.1) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_narrow_room_marks_side_by_side() {
        let spec = ObjectSpec::new(
            ObjectType::Room,
            Dimension::new(3.0, 4.0, 3.0).unwrap(),
            Features::new(),
        );
        let path = front_view(&spec, 1.0);
        let strokes: Vec<_> = path.subpaths().collect();
        let door = x_range(strokes[1]);
        let window = x_range(strokes[2]);
        assert!(door.1 <= window.0 + 1e-9, "door {door:?} window {window:?}");
        assert!(door.0 >= 0.0 && window.1 <= 3.0 + 1e-9);
    }
}
