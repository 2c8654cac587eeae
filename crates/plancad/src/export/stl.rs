//! Binary STL export of tessellated parts.

use std::path::Path;

use plancad_kernel_primitives::SolidPart;
use plancad_kernel_tessellate::{tessellate_parts, TessellationParams, TriangleMesh};
use tracing::info;

use crate::error::Result;

const HEADER_TAG: &[u8] = b"plancad STL export";

/// Encode a mesh as binary STL: an 80-byte header, a little-endian
/// triangle count, then one 50-byte record per facet.
pub fn stl_bytes(mesh: &TriangleMesh) -> Vec<u8> {
    let mut data = Vec::with_capacity(84 + mesh.num_triangles() * 50);

    let mut header = [b' '; 80];
    header[..HEADER_TAG.len()].copy_from_slice(HEADER_TAG);
    data.extend_from_slice(&header);
    data.extend_from_slice(&(mesh.num_triangles() as u32).to_le_bytes());

    for facet in mesh.facets() {
        for v in std::iter::once(facet.normal).chain(facet.corners) {
            for c in [v.x, v.y, v.z] {
                data.extend_from_slice(&(c as f32).to_le_bytes());
            }
        }
        data.extend_from_slice(&0u16.to_le_bytes());
    }
    data
}

/// Tessellate `parts` and write them to a binary STL file.
pub fn export_stl(
    parts: &[SolidPart],
    params: &TessellationParams,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let mesh = tessellate_parts(parts, params);
    std::fs::write(path, stl_bytes(&mesh))?;
    info!(
        path = %path.display(),
        triangles = mesh.num_triangles(),
        "wrote STL"
    );
    Ok(())
}
