//! SVG export of a drawing sheet.

use std::fmt::Write as _;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::sheet::Sheet;

/// Render `sheet` as a standalone SVG document.
///
/// Sheet coordinates are y-up; SVG is y-down, so every point is flipped
/// against the sheet height. Each view is a `<g>` with one `<path>` per
/// subpath.
pub fn svg_string(sheet: &Sheet) -> String {
    let (w, h) = (sheet.width, sheet.height);
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.2}" height="{h:.2}" viewBox="0 0 {w:.2} {h:.2}">"#
    );
    for (kind, path) in sheet.views() {
        let _ = writeln!(
            out,
            r#"  <g id="{}" fill="none" stroke="black" stroke-width="1">"#,
            kind.layer_name().to_ascii_lowercase()
        );
        for stroke in path.subpaths() {
            let mut d = String::new();
            for (i, p) in stroke.iter().enumerate() {
                let cmd = if i == 0 { 'M' } else { 'L' };
                let _ = write!(d, "{cmd}{:.3},{:.3} ", p.x, h - p.y);
            }
            let _ = writeln!(out, r#"    <path d="{}"/>"#, d.trim_end());
        }
        let _ = writeln!(out, "  </g>");
    }
    out.push_str("</svg>\n");
    out
}

/// Write `sheet` to an SVG file.
pub fn export_svg(sheet: &Sheet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, svg_string(sheet))?;
    info!(path = %path.display(), "wrote SVG");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render_sheet, SheetSettings};
    use plancad_ir::{Dimension, Features, ObjectSpec, ObjectType};

    #[test]
    fn test_svg_paths_and_flip() {
        let spec = ObjectSpec::new(
            ObjectType::Generic,
            Dimension::new(1.0, 2.0, 3.0).unwrap(),
            Features::new(),
        );
        let sheet = render_sheet(&spec, &SheetSettings::SVG).unwrap();
        let svg = svg_string(&sheet);
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<path ").count(), 2);
        assert!(svg.contains(r#"id="top_view""#));
        assert!(svg.contains(r#"id="front_view""#));
        // Top view starts at sheet (20, 20), which is 20 above the bottom edge.
        let flipped_y = sheet.height - 20.0;
        assert!(svg.contains(&format!("M20.000,{flipped_y:.3}")));
    }
}
