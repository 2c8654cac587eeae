//! Compass wall layout for rooms and houses.
//!
//! Both the plan drawing and the solid model of a room or house are built
//! from the same [`Wall`] list, so a door drawn in the top view sits exactly
//! where the 3D wall is cut. Coordinates here use a corner origin: plan `x`
//! in `[0, width]`, plan `y` in `[0, length]` with north at `+y`, and `z` up
//! from the floor. Walls are laid inside the bounding box; the north and
//! south walls run the full width and the east and west walls fit between
//! them.

use plancad_ir::proportions::{house, room};
use plancad_ir::{keys, Dimension, Features, Side};
use plancad_kernel_math::{Aabb3, Bounds2, Point2, Point3, Tolerance};
use tracing::debug;

use crate::segment::{self, OpeningKind, SubPanel, WallAxis, WallOpening, WallPanel};

/// One straight wall panel placed in plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    /// Compass side this wall belongs to.
    pub side: Side,
    /// Plan direction of the wall.
    pub axis: WallAxis,
    /// Plan corner at `u = 0` on the wall's low face.
    pub origin: Point2,
    /// Floor level of the panel.
    pub base: f64,
    /// Panel size.
    pub panel: WallPanel,
    /// Door or window cut into this wall, if any.
    pub opening: Option<WallOpening>,
}

impl Wall {
    fn new(side: Side, axis: WallAxis, origin: Point2, panel: WallPanel) -> Self {
        Self {
            side,
            axis,
            origin,
            base: 0.0,
            panel,
            opening: None,
        }
    }

    fn with_door(mut self, width: f64, height: f64) -> Self {
        self.opening = Some(WallOpening::door(self.panel, width, height, self.axis));
        self
    }

    fn with_window(mut self, width: f64, height: f64, sill: f64) -> Self {
        self.opening = Some(WallOpening::window(
            self.panel, width, height, sill, self.axis,
        ));
        self
    }

    /// Kind of the opening cut into this wall.
    pub fn opening_kind(&self) -> Option<OpeningKind> {
        self.opening.as_ref().map(WallOpening::kind)
    }

    /// Solid pieces of this wall: the segmented panel, or the whole panel
    /// when there is no opening.
    pub fn sub_panels(&self) -> Vec<SubPanel> {
        match &self.opening {
            Some(opening) => segment::segment(opening),
            None => {
                let full = SubPanel::full(&self.panel);
                let tol = Tolerance::DEFAULT;
                if tol.is_degenerate(full.width())
                    || tol.is_degenerate(full.height())
                    || tol.is_degenerate(full.thickness)
                {
                    Vec::new()
                } else {
                    vec![full]
                }
            }
        }
    }

    /// Frame bars lining the opening, if any.
    pub fn frame(&self, bar: f64) -> Vec<SubPanel> {
        self.opening
            .as_ref()
            .map(|o| segment::frame(o, bar))
            .unwrap_or_default()
    }

    /// Lateral spans of this wall that appear in plan.
    pub fn plan_spans(&self) -> Vec<(f64, f64)> {
        match &self.opening {
            Some(opening) => segment::plan_spans(opening),
            None if Tolerance::DEFAULT.is_degenerate(self.panel.width) => Vec::new(),
            None => vec![(0.0, self.panel.width)],
        }
    }

    /// Plan rectangle covered by the lateral span `[u0, u1]`.
    pub fn plan_rect(&self, u0: f64, u1: f64) -> Bounds2 {
        let (o, t) = (self.origin, self.panel.thickness);
        match self.axis {
            WallAxis::AlongX => Bounds2 {
                min: Point2::new(o.x + u0, o.y),
                max: Point2::new(o.x + u1, o.y + t),
            },
            WallAxis::AlongY => Bounds2 {
                min: Point2::new(o.x, o.y + u0),
                max: Point2::new(o.x + t, o.y + u1),
            },
        }
    }

    /// Plan position of the lateral coordinate `u` on the wall's center line.
    pub fn plan_point(&self, u: f64) -> Point2 {
        let half = self.panel.thickness / 2.0;
        match self.axis {
            WallAxis::AlongX => Point2::new(self.origin.x + u, self.origin.y + half),
            WallAxis::AlongY => Point2::new(self.origin.x + half, self.origin.y + u),
        }
    }

    /// 3D bounds of a piece of this wall.
    pub fn bounds(&self, piece: &SubPanel) -> Aabb3 {
        let plan = self.plan_rect(piece.u_min, piece.u_max);
        Aabb3 {
            min: Point3::new(plan.min.x, plan.min.y, self.base + piece.v_min),
            max: Point3::new(plan.max.x, plan.max.y, self.base + piece.v_max),
        }
    }
}

/// Walls of a single room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomLayout {
    /// Wall thickness actually used.
    pub thickness: f64,
    /// The four walls, in [`Side::ALL`] order.
    pub walls: Vec<Wall>,
    /// Side carrying the door, if the room has one.
    pub door_side: Option<Side>,
    /// Side carrying the window, if the room has one.
    pub window_side: Option<Side>,
    /// Floor slab between the walls.
    pub floor: Aabb3,
}

impl RoomLayout {
    /// The wall on a given side.
    pub fn wall(&self, side: Side) -> Option<&Wall> {
        self.walls.iter().find(|w| w.side == side)
    }
}

/// The four walls of a `width x length` box, laid inside it.
fn compass_walls(x0: f64, y0: f64, width: f64, length: f64, height: f64, t: f64) -> Vec<Wall> {
    Side::ALL
        .iter()
        .map(|&side| match side {
            Side::North => Wall::new(
                side,
                WallAxis::AlongX,
                Point2::new(x0, y0 + length - t),
                WallPanel::new(width, t, height),
            ),
            Side::South => Wall::new(
                side,
                WallAxis::AlongX,
                Point2::new(x0, y0),
                WallPanel::new(width, t, height),
            ),
            Side::East => Wall::new(
                side,
                WallAxis::AlongY,
                Point2::new(x0 + width - t, y0 + t),
                WallPanel::new(length - 2.0 * t, t, height),
            ),
            Side::West => Wall::new(
                side,
                WallAxis::AlongY,
                Point2::new(x0, y0 + t),
                WallPanel::new(length - 2.0 * t, t, height),
            ),
        })
        .collect()
}

/// Lay out a room: four walls, one door and one window.
///
/// The door goes on `door_position` (default west) and the window on
/// `window_position` (default north). A zero count drops the opening. When
/// both would share a wall the window moves to the opposite wall, since one
/// panel carries at most one opening.
pub fn room_layout(dims: &Dimension, features: &Features) -> RoomLayout {
    let t = room::WALL_THICKNESS
        .min(dims.width / 4.0)
        .min(dims.length / 4.0);

    let doors = features.count(keys::DOORS, room::DEFAULT_DOORS, 0);
    let windows = features.count(keys::WINDOWS, room::DEFAULT_WINDOWS, 0);

    let door_side = (doors > 0).then(|| features.side(keys::DOOR_POSITION).unwrap_or(Side::West));
    let mut window_side =
        (windows > 0).then(|| features.side(keys::WINDOW_POSITION).unwrap_or(Side::North));
    if window_side.is_some() && window_side == door_side {
        let moved = window_side.map(Side::opposite);
        debug!(?door_side, ?moved, "window shares the door wall, moving it across");
        window_side = moved;
    }

    let walls = compass_walls(0.0, 0.0, dims.width, dims.length, dims.height, t)
        .into_iter()
        .map(|wall| {
            if Some(wall.side) == door_side {
                wall.with_door(room::DOOR_WIDTH, room::DOOR_HEIGHT)
            } else if Some(wall.side) == window_side {
                wall.with_window(room::WINDOW_WIDTH, room::WINDOW_HEIGHT, room::WINDOW_SILL)
            } else {
                wall
            }
        })
        .collect();

    let floor_t = room::FLOOR_THICKNESS.min(dims.height / 10.0);
    let floor = Aabb3 {
        min: Point3::new(t, t, 0.0),
        max: Point3::new(dims.width - t, dims.length - t, floor_t),
    };

    RoomLayout {
        thickness: t,
        walls,
        door_side,
        window_side,
        floor,
    }
}

/// Attached garage block.
#[derive(Debug, Clone, PartialEq)]
pub struct GarageLayout {
    /// Plan footprint.
    pub footprint: Bounds2,
    /// Wall height.
    pub height: f64,
    /// North, south and east walls; the west side is the house wall.
    pub walls: Vec<Wall>,
    /// Flat roof slab.
    pub roof: Aabb3,
}

/// Walls and zones of a house.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseLayout {
    /// Width of the main body (the rest belongs to the garage).
    pub main_width: f64,
    /// Main wall thickness.
    pub thickness: f64,
    /// Main body walls. East and west walls are split into one bay per window.
    pub walls: Vec<Wall>,
    /// Garage, when `has_garage` is set.
    pub garage: Option<GarageLayout>,
    /// Windows on each of the east and west walls.
    pub windows_per_side: u32,
    /// Bedroom count.
    pub bedrooms: u32,
}

impl HouseLayout {
    /// Walls on a given side.
    pub fn walls_on(&self, side: Side) -> impl Iterator<Item = &Wall> {
        self.walls.iter().filter(move |w| w.side == side)
    }

    /// Walls carrying a window.
    pub fn window_walls(&self) -> impl Iterator<Item = &Wall> {
        self.walls
            .iter()
            .filter(|w| w.opening_kind() == Some(OpeningKind::Window))
    }
}

/// Split a side wall into `bays` equal panels, each with a centered window.
fn window_bays(wall: Wall, bays: u32, height: f64) -> Vec<Wall> {
    if bays == 0 {
        return vec![wall];
    }
    let bay = wall.panel.width / f64::from(bays);
    let width = house::WINDOW_WIDTH.min(0.6 * bay);
    let sill = house::WINDOW_SILL_RATIO * height;
    (0..bays)
        .map(|i| {
            let offset = f64::from(i) * bay;
            let origin = match wall.axis {
                WallAxis::AlongX => Point2::new(wall.origin.x + offset, wall.origin.y),
                WallAxis::AlongY => Point2::new(wall.origin.x, wall.origin.y + offset),
            };
            let panel = WallPanel::new(bay, wall.panel.thickness, wall.panel.height);
            Wall::new(wall.side, wall.axis, origin, panel).with_window(
                width,
                house::WINDOW_HEIGHT,
                sill,
            )
        })
        .collect()
}

/// Lay out a house: main body walls with a centered entrance on the south
/// wall, windows split evenly over the east and west walls, and an optional
/// garage at the north-east corner.
pub fn house_layout(dims: &Dimension, features: &Features) -> HouseLayout {
    let has_garage = features.flag(keys::HAS_GARAGE);
    let main_width = if has_garage {
        dims.width * house::MAIN_BODY_RATIO
    } else {
        dims.width
    };
    let t = house::WALL_THICKNESS
        .min(main_width / 4.0)
        .min(dims.length / 4.0);

    let windows = features.count(keys::WINDOWS, house::DEFAULT_WINDOWS, 0);
    let windows_per_side = windows / 2;
    let bedrooms = features.count(keys::BEDROOMS, house::DEFAULT_BEDROOMS, 0);

    let mut walls = Vec::new();
    for wall in compass_walls(0.0, 0.0, main_width, dims.length, dims.height, t) {
        match wall.side {
            Side::South => walls.push(wall.with_door(house::DOOR_WIDTH, house::DOOR_HEIGHT)),
            Side::North => walls.push(wall),
            Side::East | Side::West => {
                walls.extend(window_bays(wall, windows_per_side, dims.height))
            }
        }
    }

    let garage = has_garage.then(|| garage_layout(dims, main_width, t));

    HouseLayout {
        main_width,
        thickness: t,
        walls,
        garage,
        windows_per_side,
        bedrooms,
    }
}

fn garage_layout(dims: &Dimension, main_width: f64, t: f64) -> GarageLayout {
    let depth = dims.length * house::GARAGE_DEPTH_RATIO;
    let (x0, x1) = (main_width, dims.width);
    let (y0, y1) = (dims.length - depth, dims.length);
    let height = dims.height * house::GARAGE_HEIGHT_RATIO;
    let tg = t.min((x1 - x0) / 4.0).min(depth / 4.0);

    let walls = compass_walls(x0, y0, x1 - x0, depth, height, tg)
        .into_iter()
        .filter(|w| w.side != Side::West)
        .map(|wall| {
            if wall.side == Side::South {
                let width = wall.panel.width * house::GARAGE_DOOR_WIDTH_RATIO;
                wall.with_door(width, height * house::GARAGE_DOOR_HEIGHT_RATIO)
            } else {
                wall
            }
        })
        .collect();

    let roof_t = house::GARAGE_ROOF_THICKNESS.min(height / 10.0);
    let mut footprint = Bounds2::from_point(Point2::new(x0, y0));
    footprint.include(Point2::new(x1, y1));

    GarageLayout {
        footprint,
        height,
        walls,
        roof: Aabb3 {
            min: Point3::new(x0, y0, height),
            max: Point3::new(x1, y1, height + roof_t),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn room_dims() -> Dimension {
        Dimension::new(4.0, 5.0, 3.0).unwrap()
    }

    fn all_pieces(walls: &[Wall]) -> Vec<Aabb3> {
        walls
            .iter()
            .flat_map(|w| w.sub_panels().into_iter().map(move |p| w.bounds(&p)))
            .collect()
    }

    #[test]
    fn test_room_default_openings() {
        let layout = room_layout(&room_dims(), &Features::new());
        assert_eq!(layout.door_side, Some(Side::West));
        assert_eq!(layout.window_side, Some(Side::North));

        let west = layout.wall(Side::West).unwrap();
        assert_eq!(west.opening_kind(), Some(OpeningKind::Door));
        assert_eq!(west.sub_panels().len(), 3);

        let north = layout.wall(Side::North).unwrap();
        assert_eq!(north.opening_kind(), Some(OpeningKind::Window));
        assert_eq!(north.sub_panels().len(), 4);

        assert_eq!(layout.wall(Side::East).unwrap().sub_panels().len(), 1);
    }

    #[test]
    fn test_room_window_moves_off_door_wall() {
        let features = Features::new()
            .with(keys::DOOR_POSITION, "north")
            .with(keys::WINDOW_POSITION, "north");
        let layout = room_layout(&room_dims(), &features);
        assert_eq!(layout.door_side, Some(Side::North));
        assert_eq!(layout.window_side, Some(Side::South));
    }

    #[test]
    fn test_room_zero_counts_drop_openings() {
        let features = Features::new().with(keys::DOORS, 0).with(keys::WINDOWS, -2);
        let layout = room_layout(&room_dims(), &features);
        assert!(layout.door_side.is_none());
        assert!(layout.window_side.is_none());
        assert!(layout.walls.iter().all(|w| w.opening.is_none()));
    }

    #[test]
    fn test_room_walls_stay_inside_and_apart() {
        let dims = room_dims();
        let layout = room_layout(&dims, &Features::new());
        let pieces = all_pieces(&layout.walls);
        for p in &pieces {
            assert!(p.min.x >= -1e-12 && p.max.x <= dims.width + 1e-12);
            assert!(p.min.y >= -1e-12 && p.max.y <= dims.length + 1e-12);
            assert!(p.min.z >= 0.0 && p.max.z <= dims.height + 1e-12);
        }
        for (i, a) in pieces.iter().enumerate() {
            for b in &pieces[i + 1..] {
                assert!(!a.overlaps(b, 1e-9), "{a:?} overlaps {b:?}");
            }
        }
        for p in &pieces {
            assert!(!layout.floor.overlaps(p, 1e-9));
        }
    }

    #[test]
    fn test_west_wall_plan_break() {
        let layout = room_layout(&room_dims(), &Features::new());
        let west = layout.wall(Side::West).unwrap();
        let spans = west.plan_spans();
        assert_eq!(spans.len(), 2);
        // Panel runs 4.6 m between the north and south walls.
        assert_relative_eq!(spans[0].1, (4.6 - 0.8) / 2.0, epsilon = 1e-12);
        let rect = west.plan_rect(spans[1].0, spans[1].1);
        assert_relative_eq!(rect.min.x, 0.0);
        assert_relative_eq!(rect.max.x, 0.2);
        assert_relative_eq!(rect.max.y, 4.8, epsilon = 1e-12);
    }

    #[test]
    fn test_house_without_garage() {
        let dims = Dimension::new(8.0, 10.0, 3.5).unwrap();
        let layout = house_layout(&dims, &Features::new());
        assert_relative_eq!(layout.main_width, 8.0);
        assert!(layout.garage.is_none());
        assert_eq!(layout.windows_per_side, 2);
        assert_eq!(layout.window_walls().count(), 4);
        assert_eq!(layout.walls_on(Side::East).count(), 2);

        let south = layout.walls_on(Side::South).next().unwrap();
        let (u0, u1) = south.opening.unwrap().lateral_range();
        assert_relative_eq!((u0 + u1) / 2.0, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_house_with_garage() {
        let dims = Dimension::new(8.0, 10.0, 3.5).unwrap();
        let features = Features::new()
            .with(keys::HAS_GARAGE, true)
            .with(keys::WINDOWS, 6);
        let layout = house_layout(&dims, &features);
        assert_relative_eq!(layout.main_width, 6.0);
        assert_eq!(layout.windows_per_side, 3);

        let garage = layout.garage.as_ref().unwrap();
        assert_relative_eq!(garage.footprint.min.x, 6.0);
        assert_relative_eq!(garage.footprint.min.y, 5.0);
        assert_relative_eq!(garage.height, 3.5 * 0.7, epsilon = 1e-12);
        assert_eq!(garage.walls.len(), 3);

        let mut walls = layout.walls.clone();
        walls.extend(garage.walls.iter().cloned());
        let pieces = all_pieces(&walls);
        for (i, a) in pieces.iter().enumerate() {
            for b in &pieces[i + 1..] {
                assert!(!a.overlaps(b, 1e-9), "{a:?} overlaps {b:?}");
            }
        }
    }
}
