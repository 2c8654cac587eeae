//! Fallback: the bounding box itself.

use plancad_ir::ObjectSpec;

use super::PartBuilder;
use crate::SolidPart;

/// One box filling the bounding box, centered at half height.
pub fn solids(spec: &ObjectSpec) -> Vec<SolidPart> {
    let d = spec.dimensions;
    let mut parts = PartBuilder::centered(&d);
    parts.cuboid("body", [0.0, 0.0, 0.0], [d.width, d.length, d.height]);
    parts.finish()
}
