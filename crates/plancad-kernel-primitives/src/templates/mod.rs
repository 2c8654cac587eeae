//! 3D solid template registry.
//!
//! Templates build in corner coordinates (the same frame the wall layout
//! and the 2D views use) and [`PartBuilder`] shifts every part so the
//! footprint ends up centered on the origin.

pub mod cabinet;
pub mod chair;
pub mod generic;
pub mod house;
pub mod room;
pub mod sofa;
pub mod table;

use plancad_ir::{Dimension, ObjectSpec, ObjectType};
use plancad_kernel_math::{Aabb3, Axis, Point3, Vec3};
use tracing::debug;

use crate::{Primitive, SolidPart};

/// Collects labeled parts in corner coordinates and centers them.
///
/// Parts whose size collapses to zero are dropped rather than emitted.
#[derive(Debug, Clone)]
pub struct PartBuilder {
    offset: Vec3,
    parts: Vec<SolidPart>,
}

impl PartBuilder {
    /// Builder for an object whose corner-origin footprint is `dims`.
    pub fn centered(dims: &Dimension) -> Self {
        Self {
            offset: Vec3::new(-dims.width / 2.0, -dims.length / 2.0, 0.0),
            parts: Vec::new(),
        }
    }

    fn push(&mut self, name: String, shape: Option<Primitive>) -> bool {
        match shape {
            Some(shape) => {
                self.parts
                    .push(SolidPart::new(name, shape.translated(self.offset)));
                true
            }
            None => {
                debug!(part = %name, "dropping zero-size part");
                false
            }
        }
    }

    /// Box between two corners. Returns whether the part was kept.
    pub fn cuboid(&mut self, name: impl Into<String>, min: [f64; 3], max: [f64; 3]) -> bool {
        let shape = Primitive::cuboid(Point3::from(min), Point3::from(max));
        self.push(name.into(), shape)
    }

    /// Box covering `bounds`.
    pub fn aabb(&mut self, name: impl Into<String>, bounds: &Aabb3) -> bool {
        self.push(name.into(), Primitive::from_aabb(bounds))
    }

    /// Cylinder centered on `center`.
    pub fn cylinder(
        &mut self,
        name: impl Into<String>,
        center: [f64; 3],
        radius: f64,
        height: f64,
        axis: Axis,
    ) -> bool {
        let shape = Primitive::cylinder(Point3::from(center), radius, height, axis);
        self.push(name.into(), shape)
    }

    /// Closed triangle mesh.
    pub fn polyhedron(
        &mut self,
        name: impl Into<String>,
        vertices: Vec<Point3>,
        faces: Vec<[u32; 3]>,
    ) -> bool {
        self.push(name.into(), Primitive::polyhedron(vertices, faces))
    }

    /// The finished part list.
    pub fn finish(self) -> Vec<SolidPart> {
        self.parts
    }
}

/// A solid template function.
pub type SolidFn = fn(&ObjectSpec) -> Vec<SolidPart>;

fn template(object_type: ObjectType) -> SolidFn {
    match object_type {
        ObjectType::Chair => chair::solids,
        ObjectType::Table => table::solids,
        ObjectType::Sofa => sofa::solids,
        ObjectType::Cabinet => cabinet::solids,
        ObjectType::Room => room::solids,
        ObjectType::House => house::solids,
        ObjectType::Generic => generic::solids,
    }
}

/// Labeled primitives approximating the object.
///
/// Dimensions are assumed valid; the `plancad` facade checks them
/// before calling in.
pub fn solids(spec: &ObjectSpec) -> Vec<SolidPart> {
    template(spec.object_type)(spec)
}
