#![warn(missing_docs)]

//! Primitive solid construction for plancad.
//!
//! Every object is approximated by a flat list of labeled primitives:
//! axis-aligned boxes, axis-aligned cylinders and closed triangle
//! polyhedra. Nothing is fused; exporters and the tessellator consume the
//! parts one by one.
//!
//! Coordinates are meters with `x` east, `y` north and `z` up. The footprint
//! is centered on the origin and the floor sits at `z = 0`.

pub mod templates;

pub use templates::{solids, PartBuilder};

use plancad_kernel_math::{Aabb3, Axis, Point3, Tolerance, Vec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A single solid shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    /// Axis-aligned box.
    Box {
        /// Center of the box.
        center: Point3,
        /// Full size along each axis.
        extents: Vec3,
    },
    /// Cylinder whose axis is parallel to a coordinate axis.
    Cylinder {
        /// Center of the cylinder (mid-height on the axis).
        center: Point3,
        /// Radius.
        radius: f64,
        /// Length along the axis.
        height: f64,
        /// Axis direction.
        axis: Axis,
    },
    /// Closed triangle mesh with outward counter-clockwise faces.
    Polyhedron {
        /// Vertex positions.
        vertices: Vec<Point3>,
        /// Triangles as indices into `vertices`.
        faces: Vec<[u32; 3]>,
    },
}

fn positive(v: f64) -> bool {
    v.is_finite() && !Tolerance::DEFAULT.is_zero(v) && v > 0.0
}

impl Primitive {
    /// Box spanning two opposite corners, or `None` if any side is not
    /// positive.
    pub fn cuboid(min: Point3, max: Point3) -> Option<Primitive> {
        let extents = max - min;
        if !(positive(extents.x) && positive(extents.y) && positive(extents.z)) {
            return None;
        }
        Some(Primitive::Box {
            center: midpoint(&min, &max),
            extents,
        })
    }

    /// Box covering `bounds`.
    pub fn from_aabb(bounds: &Aabb3) -> Option<Primitive> {
        Primitive::cuboid(bounds.min, bounds.max)
    }

    /// Cylinder, or `None` if the radius or height is not positive.
    pub fn cylinder(center: Point3, radius: f64, height: f64, axis: Axis) -> Option<Primitive> {
        (positive(radius) && positive(height)).then_some(Primitive::Cylinder {
            center,
            radius,
            height,
            axis,
        })
    }

    /// Polyhedron, or `None` if it has no faces or a face points past the
    /// vertex list.
    pub fn polyhedron(vertices: Vec<Point3>, faces: Vec<[u32; 3]>) -> Option<Primitive> {
        let n = vertices.len();
        let valid = !faces.is_empty() && faces.iter().flatten().all(|&i| (i as usize) < n);
        valid.then_some(Primitive::Polyhedron { vertices, faces })
    }

    /// Short tag for the shape kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Box { .. } => "box",
            Primitive::Cylinder { .. } => "cylinder",
            Primitive::Polyhedron { .. } => "polyhedron",
        }
    }

    /// Axis-aligned bounds.
    pub fn bounds(&self) -> Aabb3 {
        match self {
            Primitive::Box { center, extents } => Aabb3::from_center_extents(*center, *extents),
            Primitive::Cylinder {
                center,
                radius,
                height,
                axis,
            } => {
                let d = 2.0 * radius;
                let extents = match axis {
                    Axis::X => Vec3::new(*height, d, d),
                    Axis::Y => Vec3::new(d, *height, d),
                    Axis::Z => Vec3::new(d, d, *height),
                };
                Aabb3::from_center_extents(*center, extents)
            }
            Primitive::Polyhedron { vertices, .. } => {
                let mut it = vertices.iter();
                let Some(first) = it.next() else {
                    return Aabb3 {
                        min: Point3::origin(),
                        max: Point3::origin(),
                    };
                };
                it.fold(
                    Aabb3 {
                        min: *first,
                        max: *first,
                    },
                    |acc, p| acc.union(&Aabb3 { min: *p, max: *p }),
                )
            }
        }
    }

    /// Exact volume of the primitive.
    pub fn volume(&self) -> f64 {
        match self {
            Primitive::Box { extents, .. } => extents.x * extents.y * extents.z,
            Primitive::Cylinder { radius, height, .. } => PI * radius * radius * height,
            Primitive::Polyhedron { vertices, faces } => {
                // Divergence theorem over the closed surface.
                faces
                    .iter()
                    .map(|&[a, b, c]| {
                        let (a, b, c) = (
                            vertices[a as usize].coords,
                            vertices[b as usize].coords,
                            vertices[c as usize].coords,
                        );
                        a.dot(&b.cross(&c))
                    })
                    .sum::<f64>()
                    / 6.0
            }
        }
    }

    /// Copy moved by `offset`.
    pub fn translated(&self, offset: Vec3) -> Primitive {
        match self {
            Primitive::Box { center, extents } => Primitive::Box {
                center: *center + offset,
                extents: *extents,
            },
            Primitive::Cylinder {
                center,
                radius,
                height,
                axis,
            } => Primitive::Cylinder {
                center: *center + offset,
                radius: *radius,
                height: *height,
                axis: *axis,
            },
            Primitive::Polyhedron { vertices, faces } => Primitive::Polyhedron {
                vertices: vertices.iter().map(|v| *v + offset).collect(),
                faces: faces.clone(),
            },
        }
    }
}

fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    Point3::from((a.coords + b.coords) / 2.0)
}

/// A primitive with a stable part name such as `seat`, `leg_2` or
/// `wall_west_left`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidPart {
    /// Part name, unique within one object.
    pub name: String,
    /// The shape.
    #[serde(flatten)]
    pub shape: Primitive,
}

impl SolidPart {
    /// Label a primitive.
    pub fn new(name: impl Into<String>, shape: Primitive) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}

/// Bounds of a whole part list, or `None` when it is empty.
pub fn parts_bounds(parts: &[SolidPart]) -> Option<Aabb3> {
    parts
        .iter()
        .map(|p| p.shape.bounds())
        .reduce(|a, b| a.union(&b))
}
