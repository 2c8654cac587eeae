//! Cabinet: open-front carcass on short legs, closed by a row of doors.

use plancad_ir::proportions::cabinet;
use plancad_ir::ObjectSpec;
use plancad_kernel_math::Axis;

use super::PartBuilder;
use crate::SolidPart;

/// Carcass slabs, doors with handles, and four legs.
///
/// Doors fill the open front face (`y = 0`) and their handles stick out
/// towards the viewer along `-y`.
pub fn solids(spec: &ObjectSpec) -> Vec<SolidPart> {
    let d = spec.dimensions;
    let (w, l, h) = (d.width, d.length, d.height);
    let p = cabinet::PANEL_THICKNESS.min(w / 4.0).min(l / 4.0);
    let leg_h = cabinet::leg_height(h);
    let mut parts = PartBuilder::centered(&d);

    parts.cuboid("back", [0.0, l - p, leg_h], [w, l, h]);
    parts.cuboid("side_left", [0.0, 0.0, leg_h], [p, l - p, h]);
    parts.cuboid("side_right", [w - p, 0.0, leg_h], [w, l - p, h]);
    parts.cuboid("top", [p, 0.0, h - p], [w - p, l - p, h]);
    parts.cuboid("bottom", [p, 0.0, leg_h], [w - p, l - p, leg_h + p]);

    let doors = cabinet::door_count(&spec.features);
    if doors > 0 {
        let inner = w - 2.0 * p;
        let pitch = inner / f64::from(doors);
        let door_w = pitch - cabinet::DOOR_GAP;
        let body_h = h - leg_h;
        let door_h = body_h - cabinet::DOOR_CLEARANCE;
        let mid_z = leg_h + body_h / 2.0;
        let inset = cabinet::HANDLE_INSET.min(door_w / 2.0);

        for i in 0..doors {
            let cx = p + pitch * (f64::from(i) + 0.5);
            let (x0, x1) = (cx - door_w / 2.0, cx + door_w / 2.0);
            let kept = parts.cuboid(
                format!("door_{i}"),
                [x0, 0.0, mid_z - door_h / 2.0],
                [x1, cabinet::DOOR_THICKNESS, mid_z + door_h / 2.0],
            );
            if !kept {
                continue;
            }
            // Handles go on the edge nearest the middle of the cabinet.
            let hx = if cx < w / 2.0 { x1 - inset } else { x0 + inset };
            parts.cylinder(
                format!("handle_{i}"),
                [hx, 0.0, mid_z],
                cabinet::HANDLE_RADIUS,
                cabinet::HANDLE_LENGTH,
                Axis::Y,
            );
        }
    }

    let inset = cabinet::LEG_INSET.min(w / 4.0).min(l / 4.0);
    let r = cabinet::LEG_RADIUS.min(inset);
    let corners = [
        (inset, inset),
        (w - inset, inset),
        (w - inset, l - inset),
        (inset, l - inset),
    ];
    for (i, (x, y)) in corners.into_iter().enumerate() {
        parts.cylinder(format!("leg_{i}"), [x, y, leg_h / 2.0], r, leg_h, Axis::Z);
    }
    parts.finish()
}
