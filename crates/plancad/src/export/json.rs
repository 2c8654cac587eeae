//! JSON dump of labeled primitives.

use std::path::Path;

use plancad_kernel_primitives::SolidPart;
use tracing::info;

use crate::error::Result;

/// Pretty-printed JSON array of parts.
pub fn parts_json(parts: &[SolidPart]) -> Result<String> {
    Ok(serde_json::to_string_pretty(parts)?)
}

/// Write parts to a JSON file.
pub fn export_json(parts: &[SolidPart], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, parts_json(parts)?)?;
    info!(path = %path.display(), parts = parts.len(), "wrote JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesize_3d;
    use plancad_ir::{Dimension, Features, ObjectSpec, ObjectType};

    #[test]
    fn test_parts_round_trip() {
        let spec = ObjectSpec::new(
            ObjectType::House,
            Dimension::new(8.0, 10.0, 3.5).unwrap(),
            Features::new(),
        );
        let parts = synthesize_3d(&spec).unwrap();
        let json = parts_json(&parts).unwrap();
        assert!(json.contains(r#""name": "roof""#));
        assert!(json.contains(r#""type": "polyhedron""#));
        let back: Vec<SolidPart> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), parts.len());
    }
}
