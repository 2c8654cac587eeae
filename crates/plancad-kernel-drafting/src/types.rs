//! Core types for 2D drafting output.

use serde::{Deserialize, Serialize};

/// A 2D point for serializable drafting output.
///
/// We use a custom type instead of nalgebra::Point2 so drawings serialize
/// as plain `{x, y}` objects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a new 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<plancad_kernel_math::Point2> for Point2D {
    fn from(p: plancad_kernel_math::Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point2D> for plancad_kernel_math::Point2 {
    fn from(p: Point2D) -> Self {
        plancad_kernel_math::Point2::new(p.x, p.y)
    }
}

/// Which orthographic view a drawing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ViewKind {
    /// Plan: looking down, x east, y north.
    #[default]
    Top,
    /// Elevation: looking north at the south face, x east, y up.
    Front,
}

impl ViewKind {
    /// Both views, in sheet order.
    pub const ALL: [ViewKind; 2] = [ViewKind::Top, ViewKind::Front];

    /// Layer name used by the exporters.
    pub fn layer_name(self) -> &'static str {
        match self {
            ViewKind::Top => "TOP_VIEW",
            ViewKind::Front => "FRONT_VIEW",
        }
    }
}
