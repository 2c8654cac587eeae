#![warn(missing_docs)]

//! Primitive to triangle mesh tessellation for plancad.
//!
//! Boxes and polyhedra are exact. Cylinders are approximated by a prism with
//! `circle_segments` sides and two triangle-fan caps. All faces wind
//! counter-clockwise seen from outside, so the mesh volume is positive.

use std::f64::consts::TAU;

use plancad_kernel_math::{Axis, Point3, Vec3};
use plancad_kernel_primitives::{Primitive, SolidPart};
use serde::{Deserialize, Serialize};

/// Output triangle mesh for export.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]` (f32).
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]` (u32).
    pub indices: Vec<u32>,
    /// Flat array of vertex normals: `[nx0, ny0, nz0, ...]` (f32). Same length as vertices.
    pub normals: Vec<f32>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            normals: Vec::new(),
        }
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Merge another mesh into this one.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.num_vertices() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices
            .extend(other.indices.iter().map(|&i| i + offset));
    }

    fn push_vertex(&mut self, p: Point3, n: Vec3) -> u32 {
        let index = self.num_vertices() as u32;
        self.vertices
            .extend_from_slice(&[p.x as f32, p.y as f32, p.z as f32]);
        self.normals
            .extend_from_slice(&[n.x as f32, n.y as f32, n.z as f32]);
        index
    }

    fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    fn position(&self, i: u32) -> Vec3 {
        let i = i as usize * 3;
        Vec3::new(
            f64::from(self.vertices[i]),
            f64::from(self.vertices[i + 1]),
            f64::from(self.vertices[i + 2]),
        )
    }

    fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|t| [self.position(t[0]), self.position(t[1]), self.position(t[2])])
    }

    /// Triangles with a unit facet normal each.
    ///
    /// The normal follows the winding. A sliver triangle with no usable
    /// winding falls back to the mean of its stored vertex normals.
    pub fn facets(&self) -> impl Iterator<Item = Facet> + '_ {
        self.indices.chunks_exact(3).map(|t| {
            let corners = [self.position(t[0]), self.position(t[1]), self.position(t[2])];
            let [a, b, c] = corners;
            let normal = (b - a)
                .cross(&(c - a))
                .try_normalize(1e-12)
                .or_else(|| {
                    let sum: Vec3 = t.iter().map(|&i| self.normal(i)).sum();
                    sum.try_normalize(1e-12)
                })
                .unwrap_or_else(Vec3::z);
            Facet { normal, corners }
        })
    }

    fn normal(&self, i: u32) -> Vec3 {
        let i = i as usize * 3;
        Vec3::new(
            f64::from(self.normals[i]),
            f64::from(self.normals[i + 1]),
            f64::from(self.normals[i + 2]),
        )
    }

    /// Signed enclosed volume, by the divergence theorem.
    pub fn volume(&self) -> f64 {
        self.triangles()
            .map(|[a, b, c]| a.dot(&b.cross(&c)))
            .sum::<f64>()
            / 6.0
    }

    /// Total triangle area.
    pub fn surface_area(&self) -> f64 {
        self.triangles()
            .map(|[a, b, c]| (b - a).cross(&(c - a)).norm() / 2.0)
            .sum()
    }
}

/// One triangle of a [`TriangleMesh`] with its outward normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    /// Unit normal.
    pub normal: Vec3,
    /// Corner positions in winding order.
    pub corners: [Vec3; 3],
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}

/// Tessellation parameters controlling mesh quality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationParams {
    /// Number of segments for circular features.
    pub circle_segments: u32,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            circle_segments: 32,
        }
    }
}

impl TessellationParams {
    /// Create params from a segment count hint.
    pub fn from_segments(segments: u32) -> Self {
        Self {
            circle_segments: segments.max(3),
        }
    }
}

fn component(v: &Vec3, axis: Axis) -> f64 {
    match axis {
        Axis::X => v.x,
        Axis::Y => v.y,
        Axis::Z => v.z,
    }
}

/// Tessellate a single primitive.
pub fn tessellate_primitive(shape: &Primitive, params: &TessellationParams) -> TriangleMesh {
    match shape {
        Primitive::Box { center, extents } => tessellate_box(center, extents),
        Primitive::Cylinder {
            center,
            radius,
            height,
            axis,
        } => tessellate_cylinder(center, *radius, *height, *axis, params.circle_segments),
        Primitive::Polyhedron { vertices, faces } => tessellate_polyhedron(vertices, faces),
    }
}

/// Tessellate every part into one mesh.
pub fn tessellate_parts(parts: &[SolidPart], params: &TessellationParams) -> TriangleMesh {
    let mut mesh = TriangleMesh::new();
    for part in parts {
        mesh.merge(&tessellate_primitive(&part.shape, params));
    }
    mesh
}

/// Six quads with flat normals, 24 vertices and 12 triangles.
fn tessellate_box(center: &Point3, extents: &Vec3) -> TriangleMesh {
    let mut mesh = TriangleMesh::new();
    let half = extents / 2.0;
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let (u, v) = axis.perpendicular();
        let (hu, hv) = (component(&half, u) * u.unit(), component(&half, v) * v.unit());
        for sign in [1.0, -1.0] {
            let n = sign * axis.unit();
            let c = *center + component(&half, axis) * n;
            let mut quad = [c - hu - hv, c + hu - hv, c + hu + hv, c - hu + hv];
            if sign < 0.0 {
                quad.reverse();
            }
            let ids = quad.map(|p| mesh.push_vertex(p, n));
            mesh.push_triangle(ids[0], ids[1], ids[2]);
            mesh.push_triangle(ids[0], ids[2], ids[3]);
        }
    }
    mesh
}

/// Prism side with smooth normals plus two fan caps.
fn tessellate_cylinder(
    center: &Point3,
    radius: f64,
    height: f64,
    axis: Axis,
    segments: u32,
) -> TriangleMesh {
    let n = segments.max(3);
    let (u, v) = axis.perpendicular();
    let (u, v, a) = (u.unit(), v.unit(), axis.unit());
    let bottom = *center - a * (height / 2.0);
    let top = *center + a * (height / 2.0);

    let radial: Vec<Vec3> = (0..n)
        .map(|i| {
            let t = TAU * f64::from(i) / f64::from(n);
            u * t.cos() + v * t.sin()
        })
        .collect();

    let mut mesh = TriangleMesh::new();

    // Side.
    let ring: Vec<(u32, u32)> = radial
        .iter()
        .map(|r| {
            (
                mesh.push_vertex(bottom + *r * radius, *r),
                mesh.push_vertex(top + *r * radius, *r),
            )
        })
        .collect();
    for i in 0..n as usize {
        let (b0, t0) = ring[i];
        let (b1, t1) = ring[(i + 1) % n as usize];
        mesh.push_triangle(b0, b1, t1);
        mesh.push_triangle(b0, t1, t0);
    }

    // Caps.
    for (base, normal, flip) in [(top, a, false), (bottom, -a, true)] {
        let hub = mesh.push_vertex(base, normal);
        let rim: Vec<u32> = radial
            .iter()
            .map(|r| mesh.push_vertex(base + *r * radius, normal))
            .collect();
        for i in 0..n as usize {
            let (p, q) = (rim[i], rim[(i + 1) % n as usize]);
            if flip {
                mesh.push_triangle(hub, q, p);
            } else {
                mesh.push_triangle(hub, p, q);
            }
        }
    }
    mesh
}

/// One flat-shaded triangle per face.
fn tessellate_polyhedron(vertices: &[Point3], faces: &[[u32; 3]]) -> TriangleMesh {
    let mut mesh = TriangleMesh::new();
    for face in faces {
        let [a, b, c] = face.map(|i| vertices[i as usize]);
        let normal = (b - a).cross(&(c - a));
        let normal = normal.try_normalize(f64::EPSILON).unwrap_or_else(Vec3::zeros);
        let ids = [a, b, c].map(|p| mesh.push_vertex(p, normal));
        mesh.push_triangle(ids[0], ids[1], ids[2]);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use plancad_ir::{Dimension, Features, ObjectSpec, ObjectType};
    use plancad_kernel_primitives::solids;
    use std::f64::consts::PI;

    fn unit_box() -> Primitive {
        Primitive::cuboid(Point3::new(-1.0, -2.0, 0.0), Point3::new(1.0, 2.0, 3.0)).unwrap()
    }

    #[test]
    fn test_box_mesh() {
        let mesh = tessellate_primitive(&unit_box(), &TessellationParams::default());
        assert_eq!(mesh.num_triangles(), 12);
        assert_eq!(mesh.num_vertices(), 24);
        assert_relative_eq!(mesh.volume(), 24.0, epsilon = 1e-4);
        assert_relative_eq!(mesh.surface_area(), 2.0 * (8.0 + 6.0 + 12.0), epsilon = 1e-4);
    }

    #[test]
    fn test_cylinder_mesh_each_axis() {
        let params = TessellationParams::from_segments(64);
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let c = Primitive::cylinder(Point3::new(1.0, 2.0, 3.0), 0.5, 2.0, axis).unwrap();
            let mesh = tessellate_primitive(&c, &params);
            assert_eq!(mesh.num_triangles(), 4 * 64);
            let expected = PI * 0.25 * 2.0;
            let vol = mesh.volume();
            assert!(
                (vol - expected).abs() < expected * 0.01,
                "{axis:?}: expected ~{expected}, got {vol}"
            );
        }
    }

    #[test]
    fn test_box_facets_point_outward() {
        let mesh = tessellate_primitive(&unit_box(), &TessellationParams::default());
        let center = Vec3::new(0.0, 0.0, 1.5);
        let facets: Vec<_> = mesh.facets().collect();
        assert_eq!(facets.len(), 12);
        for f in &facets {
            assert_relative_eq!(f.normal.norm(), 1.0, epsilon = 1e-9);
            let mid = (f.corners[0] + f.corners[1] + f.corners[2]) / 3.0;
            assert!(f.normal.dot(&(mid - center)) > 0.0);
        }
    }

    #[test]
    fn test_sliver_facet_uses_vertex_normals() {
        let mut mesh = TriangleMesh::new();
        let n = Vec3::new(0.0, -1.0, 0.0);
        let a = mesh.push_vertex(Point3::new(0.0, 0.0, 0.0), n);
        let b = mesh.push_vertex(Point3::new(1.0, 0.0, 0.0), n);
        let c = mesh.push_vertex(Point3::new(2.0, 0.0, 0.0), n);
        mesh.push_triangle(a, b, c);
        let facet = mesh.facets().next().unwrap();
        assert!((facet.normal - n).norm() < 1e-9);
    }

    #[test]
    fn test_segment_floor() {
        assert_eq!(TessellationParams::from_segments(1).circle_segments, 3);
    }

    #[test]
    fn test_merge_offsets_indices() {
        let params = TessellationParams::default();
        let mut mesh = tessellate_primitive(&unit_box(), &params);
        mesh.merge(&tessellate_primitive(&unit_box(), &params));
        assert_eq!(mesh.num_triangles(), 24);
        assert_eq!(mesh.indices.iter().copied().max(), Some(47));
        assert_relative_eq!(mesh.volume(), 48.0, epsilon = 1e-3);
    }

    #[test]
    fn test_chair_mesh_volume_matches_parts() {
        let spec = ObjectSpec::new(
            ObjectType::Chair,
            Dimension::new(0.4, 0.4, 0.45).unwrap(),
            Features::new(),
        );
        let parts = solids(&spec);
        let mesh = tessellate_parts(&parts, &TessellationParams::default());
        assert_eq!(mesh.num_triangles(), 12 * parts.len());
        let exact: f64 = parts.iter().map(|p| p.shape.volume()).sum();
        assert_relative_eq!(mesh.volume(), exact, epsilon = 1e-5);
    }
}
