#![warn(missing_docs)]

//! Math types for the plancad synthesis kernel.
//!
//! Thin aliases over nalgebra plus the few helpers the templates share:
//! a primitive axis tag, tolerance constants, and axis-aligned bounds.
//! All lengths are meters unless a caller has applied a view scale.

use serde::{Deserialize, Serialize};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = nalgebra::Vector3<f64>;

/// A point in the 2D drawing plane.
pub type Point2 = nalgebra::Point2<f64>;

/// Coordinate axis, used for cylinder orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// East-west.
    X,
    /// South-north.
    Y,
    /// Vertical.
    #[default]
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::x(),
            Axis::Y => Vec3::y(),
            Axis::Z => Vec3::z(),
        }
    }

    /// The two axes perpendicular to this one, in right-handed order.
    pub fn perpendicular(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::Z, Axis::X),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in meters.
    pub linear: f64,
    /// Thinnest slab or panel worth emitting, in meters.
    pub min_thickness: f64,
}

impl Tolerance {
    /// Default tolerances (1e-9 m linear, 1 mm minimal thickness).
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        min_thickness: 1e-3,
    };

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if a length is too thin to be emitted.
    pub fn is_degenerate(&self, d: f64) -> bool {
        d <= self.min_thickness
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Point at `radius` from `center`, at `angle_deg` counter-clockwise from `+x`.
pub fn polar(center: Point2, radius: f64, angle_deg: f64) -> Point2 {
    let a = angle_deg.to_radians();
    Point2::new(center.x + radius * a.cos(), center.y + radius * a.sin())
}

/// Axis-aligned bounding rectangle in the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    /// Lower-left corner.
    pub min: Point2,
    /// Upper-right corner.
    pub max: Point2,
}

impl Bounds2 {
    /// Bounds covering a single point.
    pub fn from_point(p: Point2) -> Self {
        Self { min: p, max: p }
    }

    /// Grow to include a point.
    pub fn include(&mut self, p: Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Smallest bounds covering both.
    pub fn union(&self, other: &Bounds2) -> Bounds2 {
        let mut out = *self;
        out.include(other.min);
        out.include(other.max);
        out
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb3 {
    /// Box from a center and full extents.
    pub fn from_center_extents(center: Point3, extents: Vec3) -> Self {
        let half = extents / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Smallest box covering both.
    pub fn union(&self, other: &Aabb3) -> Aabb3 {
        Aabb3 {
            min: Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    /// Full extents.
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Whether the interiors of two boxes intersect by more than `tol`.
    pub fn overlaps(&self, other: &Aabb3, tol: f64) -> bool {
        self.min.x + tol < other.max.x
            && other.min.x + tol < self.max.x
            && self.min.y + tol < other.max.y
            && other.min.y + tol < self.max.y
            && self.min.z + tol < other.max.z
            && other.min.z + tol < self.max.z
    }
}
