//! House: main body with optional garage, rooms, entrance and windows.

use plancad_ir::proportions::house;
use plancad_ir::{ObjectSpec, RoofStyle, Side};
use plancad_kernel_walls::{house_layout, HouseLayout};

use crate::path::PathDescriptor;

fn scaled_rect(path: &mut PathDescriptor, r: plancad_kernel_math::Bounds2, scale: f64) {
    path.rect(
        r.min.x * scale,
        r.min.y * scale,
        r.max.x * scale,
        r.max.y * scale,
    );
}

/// Plan: body, garage, room divisions, entrance and window marks.
pub fn top_view(spec: &ObjectSpec, scale: f64) -> PathDescriptor {
    let d = spec.dimensions;
    let layout = house_layout(&d, &spec.features);
    let (mw, l) = (layout.main_width * scale, d.length * scale);

    let mut path = PathDescriptor::new();
    path.rect(0.0, 0.0, mw, l);

    if let Some(garage) = &layout.garage {
        scaled_rect(&mut path, garage.footprint, scale);
    }

    if layout.bedrooms >= 2 {
        let living = house::LIVING_ZONE_RATIO * l;
        path.line(0.0, living, mw, living);
        for i in 1..layout.bedrooms {
            let x = mw * f64::from(i) / f64::from(layout.bedrooms);
            path.line(x, living, x, l);
        }
    }

    opening_marks(&mut path, &layout, scale);
    path
}

/// Entrance mark on the south wall and one mark per side window.
fn opening_marks(path: &mut PathDescriptor, layout: &HouseLayout, scale: f64) {
    let marked = layout
        .walls_on(Side::South)
        .chain(layout.window_walls())
        .filter_map(|w| w.opening.as_ref().map(|o| (w, o)))
        .filter(|(_, o)| o.has_hole());
    for (wall, opening) in marked {
        let (u0, u1) = opening.lateral_range();
        scaled_rect(path, wall.plan_rect(u0, u1), scale);
    }
}

/// Elevation: body, roof, garage block with its door, and the entrance.
pub fn front_view(spec: &ObjectSpec, scale: f64) -> PathDescriptor {
    let d = spec.dimensions;
    let layout = house_layout(&d, &spec.features);
    let (mw, h) = (layout.main_width * scale, d.height * scale);

    let mut path = PathDescriptor::new();
    path.rect(0.0, 0.0, mw, h);

    match spec.features.roof_style() {
        RoofStyle::Modern => {
            let slab = house::SLAB_ROOF_THICKNESS * scale;
            path.rect(0.0, h, mw, h + slab);
        }
        RoofStyle::Traditional => {
            let ridge = h + house::ROOF_RISE_RATIO * h;
            path.polyline([(0.0, h), (mw / 2.0, ridge), (mw, h), (0.0, h)]);
        }
    }

    if let Some(garage) = &layout.garage {
        let (x0, x1) = (garage.footprint.min.x * scale, garage.footprint.max.x * scale);
        path.rect(x0, 0.0, x1, garage.height * scale);

        let door = garage
            .walls
            .iter()
            .filter(|w| w.side == Side::South)
            .find_map(|w| w.opening.as_ref().map(|o| (w, o)))
            .filter(|(_, o)| o.has_hole());
        if let Some((wall, opening)) = door {
            let (u0, u1) = opening.lateral_range();
            let (_, v1) = opening.vertical_range();
            let (a, b) = (wall.plan_point(u0).x * scale, wall.plan_point(u1).x * scale);
            let top = v1 * scale;
            path.rect(a, 0.0, b, top);
            let panels = house::GARAGE_DOOR_PANELS;
            for i in 1..panels {
                let y = top * f64::from(i) / f64::from(panels);
                path.line(a, y, b, y);
            }
        }
    }

    let entrance = layout
        .walls_on(Side::South)
        .find_map(|w| w.opening.as_ref().map(|o| (w, o)))
        .filter(|(_, o)| o.has_hole());
    if let Some((wall, opening)) = entrance {
        let (u0, u1) = opening.lateral_range();
        let (_, v1) = opening.vertical_range();
        path.rect(
            wall.plan_point(u0).x * scale,
            0.0,
            wall.plan_point(u1).x * scale,
            v1 * scale,
        );
    }
    path
}
