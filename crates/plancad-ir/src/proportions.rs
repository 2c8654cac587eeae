//! Canonical proportions shared by the 2D and 3D templates.
//!
//! Both template registries read from here so a drawing and its solid model
//! always agree. Lengths are meters; ratios are fractions of a dimension.

/// Chair proportions.
pub mod chair {
    use crate::{keys, Features};

    /// Seat top plane as a fraction of height.
    pub const SEAT_HEIGHT_RATIO: f64 = 0.4;
    /// Seat slab thickness.
    pub const SEAT_THICKNESS: f64 = 0.04;
    /// Leg section (square side).
    pub const LEG_SIZE: f64 = 0.04;
    /// Distance from the seat edge to a leg center.
    pub const LEG_INSET: f64 = 0.05;
    /// Default leg count.
    pub const DEFAULT_LEGS: u32 = 4;
    /// Corner positions available for legs.
    pub const MAX_LEGS: u32 = 4;

    /// Seat slab thickness for a chair of `height`.
    pub fn seat_thickness(height: f64) -> f64 {
        SEAT_THICKNESS.min(0.1 * height)
    }

    /// Leg center inset, capped so legs stay on the seat.
    pub fn leg_inset(width: f64, length: f64) -> f64 {
        LEG_INSET.min(width / 4.0).min(length / 4.0)
    }

    /// Leg section, capped to the inset so legs never cross the seat edge.
    pub fn leg_size(width: f64, length: f64) -> f64 {
        LEG_SIZE.min(leg_inset(width, length))
    }

    /// Leg centers in corner coordinates, in front-left, front-right,
    /// back-right, back-left order.
    pub fn leg_positions(width: f64, length: f64) -> [(f64, f64); 4] {
        let i = leg_inset(width, length);
        [(i, i), (width - i, i), (width - i, length - i), (i, length - i)]
    }

    /// Legs on a chair: the requested count, capped at the four corners.
    pub fn leg_count(features: &Features) -> u32 {
        features.count(keys::LEGS, DEFAULT_LEGS, 1).min(MAX_LEGS)
    }
}

/// Table proportions.
pub mod table {
    use crate::{keys, Features, SeatShape};

    /// Top slab thickness.
    pub const TOP_THICKNESS: f64 = 0.05;
    /// Rectangular leg section.
    pub const LEG_SIZE: f64 = 0.06;
    /// Round leg radius (circular tables).
    pub const LEG_RADIUS: f64 = 0.03;
    /// Leg ring radius as a fraction of the top radius.
    pub const LEG_RING_RATIO: f64 = 0.7;
    /// Angle of the first leg on the ring, degrees from `+x`.
    pub const FIRST_LEG_ANGLE_DEG: f64 = -90.0;
    /// Default leg count.
    pub const DEFAULT_LEGS: u32 = 4;
    /// Corner positions available on a rectangular table.
    pub const MAX_CORNER_LEGS: u32 = 4;

    /// Top slab thickness for a table of `height`.
    pub fn top_thickness(height: f64) -> f64 {
        TOP_THICKNESS.min(0.2 * height)
    }

    /// Rectangular leg section, capped on small tables.
    pub fn leg_size(width: f64, length: f64) -> f64 {
        LEG_SIZE.min(width / 4.0).min(length / 4.0)
    }

    /// Leg centers of a rectangular table in corner coordinates, flush with
    /// the corners, in front-left, front-right, back-right, back-left order.
    pub fn corner_leg_positions(width: f64, length: f64) -> [(f64, f64); 4] {
        let h = leg_size(width, length) / 2.0;
        [(h, h), (width - h, h), (width - h, length - h), (h, length - h)]
    }

    /// Radius of a round top.
    pub fn top_radius(width: f64, length: f64) -> f64 {
        width.min(length) / 2.0
    }

    /// Round leg radius, capped on small tables.
    pub fn leg_radius(width: f64, length: f64) -> f64 {
        LEG_RADIUS.min(top_radius(width, length) * (1.0 - LEG_RING_RATIO) / 2.0)
    }

    /// Angle of leg `i` of `n` on the ring, degrees counter-clockwise from `+x`.
    pub fn leg_angle_deg(i: u32, n: u32) -> f64 {
        FIRST_LEG_ANGLE_DEG + 360.0 * f64::from(i) / f64::from(n.max(1))
    }

    /// Legs on a table. Rectangular tables cap at the four corners; round
    /// tables take any count up to [`crate::MAX_COUNT`].
    pub fn leg_count(features: &Features) -> u32 {
        let n = features.count(keys::LEGS, DEFAULT_LEGS, 1);
        match features.seat_shape() {
            SeatShape::Square => n.min(MAX_CORNER_LEGS),
            SeatShape::Circular => n,
        }
    }
}

/// Sofa proportions.
pub mod sofa {
    use crate::{keys, Features};

    /// Seat plane as a fraction of height.
    pub const SEAT_RATIO: f64 = 0.45;
    /// Backrest band above the seat plane, fraction of height.
    pub const BACKREST_RATIO: f64 = 0.55;
    /// Armrest height as a fraction of height.
    pub const ARMREST_RATIO: f64 = 0.7;
    /// Armrest width as a fraction of width.
    pub const ARMREST_WIDTH_RATIO: f64 = 0.12;
    /// Backrest depth as a fraction of length.
    pub const BACKREST_DEPTH_RATIO: f64 = 0.2;
    /// Cushion height as a fraction of the seat plane height.
    pub const CUSHION_RATIO: f64 = 0.15;
    /// Default seat count.
    pub const DEFAULT_SEATS: u32 = 2;

    /// Horizontal split of a sofa front, as `(armrest_width, backrest_depth)`.
    pub fn plan_split(width: f64, length: f64) -> (f64, f64) {
        (ARMREST_WIDTH_RATIO * width, BACKREST_DEPTH_RATIO * length)
    }

    /// Vertical split, as `(seat_plane, armrest_top)`. The backrest rises
    /// from the seat plane to the full height.
    pub fn height_split(height: f64) -> (f64, f64) {
        (SEAT_RATIO * height, ARMREST_RATIO * height)
    }

    /// Cushions on a sofa.
    pub fn seat_count(features: &Features) -> u32 {
        features.count(keys::SEATS, DEFAULT_SEATS, 0)
    }
}

/// Cabinet proportions.
pub mod cabinet {
    use crate::{keys, Features};

    /// Carcass panel thickness.
    pub const PANEL_THICKNESS: f64 = 0.02;
    /// Door slab thickness.
    pub const DOOR_THICKNESS: f64 = 0.015;
    /// Gap between neighbouring doors.
    pub const DOOR_GAP: f64 = 0.01;
    /// Clearance above and below the doors, total.
    pub const DOOR_CLEARANCE: f64 = 0.1;
    /// Handle cylinder radius.
    pub const HANDLE_RADIUS: f64 = 0.01;
    /// Handle cylinder length.
    pub const HANDLE_LENGTH: f64 = 0.08;
    /// Handle distance from the door's inner edge.
    pub const HANDLE_INSET: f64 = 0.05;
    /// Leg radius.
    pub const LEG_RADIUS: f64 = 0.015;
    /// Leg height.
    pub const LEG_HEIGHT: f64 = 0.05;
    /// Leg center inset from the carcass edge.
    pub const LEG_INSET: f64 = 0.05;
    /// Default door count.
    pub const DEFAULT_DOORS: u32 = 2;

    /// Leg height for a cabinet of `height`.
    pub fn leg_height(height: f64) -> f64 {
        LEG_HEIGHT.min(0.1 * height)
    }

    /// Doors on a cabinet.
    pub fn door_count(features: &Features) -> u32 {
        features.count(keys::DOORS, DEFAULT_DOORS, 0)
    }
}

/// Room proportions.
pub mod room {
    /// Wall thickness.
    pub const WALL_THICKNESS: f64 = 0.2;
    /// Floor slab thickness.
    pub const FLOOR_THICKNESS: f64 = 0.1;
    /// Door opening width.
    pub const DOOR_WIDTH: f64 = 0.8;
    /// Door opening height.
    pub const DOOR_HEIGHT: f64 = 2.0;
    /// Window opening width.
    pub const WINDOW_WIDTH: f64 = 1.2;
    /// Window opening height.
    pub const WINDOW_HEIGHT: f64 = 1.0;
    /// Window sill height above the floor.
    pub const WINDOW_SILL: f64 = 1.0;
    /// Frame bar width inside an opening.
    pub const FRAME_WIDTH: f64 = 0.05;
    /// Default door count.
    pub const DEFAULT_DOORS: u32 = 1;
    /// Default window count.
    pub const DEFAULT_WINDOWS: u32 = 1;
}

/// House proportions.
pub mod house {
    /// Wall thickness.
    pub const WALL_THICKNESS: f64 = 0.3;
    /// Main body width as a fraction of width when a garage is attached.
    pub const MAIN_BODY_RATIO: f64 = 0.75;
    /// Garage depth as a fraction of length.
    pub const GARAGE_DEPTH_RATIO: f64 = 0.5;
    /// Garage height as a fraction of height.
    pub const GARAGE_HEIGHT_RATIO: f64 = 0.7;
    /// Garage door width as a fraction of the garage face.
    pub const GARAGE_DOOR_WIDTH_RATIO: f64 = 0.8;
    /// Garage door height as a fraction of the garage height.
    pub const GARAGE_DOOR_HEIGHT_RATIO: f64 = 0.75;
    /// Garage roof slab thickness.
    pub const GARAGE_ROOF_THICKNESS: f64 = 0.15;
    /// Entrance door width.
    pub const DOOR_WIDTH: f64 = 0.9;
    /// Entrance door height.
    pub const DOOR_HEIGHT: f64 = 2.0;
    /// Side window width.
    pub const WINDOW_WIDTH: f64 = 1.2;
    /// Side window height.
    pub const WINDOW_HEIGHT: f64 = 1.5;
    /// Window sill as a fraction of height.
    pub const WINDOW_SILL_RATIO: f64 = 0.15;
    /// Default window count, split evenly over the east and west walls.
    pub const DEFAULT_WINDOWS: u32 = 4;
    /// Default bedroom count.
    pub const DEFAULT_BEDROOMS: u32 = 1;
    /// Living zone depth (front of the plan) as a fraction of length.
    pub const LIVING_ZONE_RATIO: f64 = 0.4;
    /// Flat roof slab thickness.
    pub const SLAB_ROOF_THICKNESS: f64 = 0.15;
    /// Pitched roof rise as a fraction of height.
    pub const ROOF_RISE_RATIO: f64 = 0.3;
    /// Garage door panel lines in the front view.
    pub const GARAGE_DOOR_PANELS: u32 = 5;
}
