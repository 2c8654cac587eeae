//! DXF R12 export of a drawing sheet.
//!
//! Each view goes on its own layer (`TOP_VIEW`, `FRONT_VIEW`) and each
//! subpath becomes one `POLYLINE` with its `VERTEX` run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use plancad_kernel_drafting::{Point2D, ViewKind};
use tracing::info;

use crate::error::Result;
use crate::sheet::Sheet;

/// Write `sheet` as DXF R12.
pub fn write_dxf(sheet: &Sheet, writer: &mut impl Write) -> std::io::Result<()> {
    // Header
    writeln!(writer, "0")?;
    writeln!(writer, "SECTION")?;
    writeln!(writer, "2")?;
    writeln!(writer, "HEADER")?;
    writeln!(writer, "9")?;
    writeln!(writer, "$ACADVER")?;
    writeln!(writer, "1")?;
    writeln!(writer, "AC1009")?; // DXF R12
    writeln!(writer, "9")?;
    writeln!(writer, "$EXTMIN")?;
    write_point(writer, 0.0, 0.0)?;
    writeln!(writer, "9")?;
    writeln!(writer, "$EXTMAX")?;
    write_point(writer, sheet.width, sheet.height)?;
    writeln!(writer, "0")?;
    writeln!(writer, "ENDSEC")?;

    // Tables
    writeln!(writer, "0")?;
    writeln!(writer, "SECTION")?;
    writeln!(writer, "2")?;
    writeln!(writer, "TABLES")?;
    write_ltype_table(writer)?;
    write_layer_table(writer)?;
    writeln!(writer, "0")?;
    writeln!(writer, "ENDSEC")?;

    // Entities
    writeln!(writer, "0")?;
    writeln!(writer, "SECTION")?;
    writeln!(writer, "2")?;
    writeln!(writer, "ENTITIES")?;
    for (kind, path) in sheet.views() {
        for stroke in path.subpaths() {
            write_polyline(writer, kind.layer_name(), stroke)?;
        }
    }
    writeln!(writer, "0")?;
    writeln!(writer, "ENDSEC")?;

    writeln!(writer, "0")?;
    writeln!(writer, "EOF")?;
    Ok(())
}

/// Write `sheet` to a DXF file.
pub fn export_dxf(sheet: &Sheet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_dxf(sheet, &mut writer)?;
    writer.flush()?;
    info!(path = %path.display(), "wrote DXF");
    Ok(())
}

fn write_point(writer: &mut impl Write, x: f64, y: f64) -> std::io::Result<()> {
    writeln!(writer, "10")?;
    writeln!(writer, "{:.6}", x)?;
    writeln!(writer, "20")?;
    writeln!(writer, "{:.6}", y)?;
    Ok(())
}

fn write_ltype_table(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "0")?;
    writeln!(writer, "TABLE")?;
    writeln!(writer, "2")?;
    writeln!(writer, "LTYPE")?;
    writeln!(writer, "70")?;
    writeln!(writer, "1")?;

    writeln!(writer, "0")?;
    writeln!(writer, "LTYPE")?;
    writeln!(writer, "2")?;
    writeln!(writer, "CONTINUOUS")?;
    writeln!(writer, "70")?;
    writeln!(writer, "0")?;
    writeln!(writer, "3")?;
    writeln!(writer, "Solid line")?;
    writeln!(writer, "72")?;
    writeln!(writer, "65")?;
    writeln!(writer, "73")?;
    writeln!(writer, "0")?;
    writeln!(writer, "40")?;
    writeln!(writer, "0.0")?;

    writeln!(writer, "0")?;
    writeln!(writer, "ENDTAB")?;
    Ok(())
}

fn write_layer_table(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer, "0")?;
    writeln!(writer, "TABLE")?;
    writeln!(writer, "2")?;
    writeln!(writer, "LAYER")?;
    writeln!(writer, "70")?;
    writeln!(writer, "{}", ViewKind::ALL.len())?;

    for (kind, color) in ViewKind::ALL.into_iter().zip([7, 5]) {
        writeln!(writer, "0")?;
        writeln!(writer, "LAYER")?;
        writeln!(writer, "2")?;
        writeln!(writer, "{}", kind.layer_name())?;
        writeln!(writer, "70")?;
        writeln!(writer, "0")?;
        writeln!(writer, "62")?;
        writeln!(writer, "{color}")?;
        writeln!(writer, "6")?;
        writeln!(writer, "CONTINUOUS")?;
    }

    writeln!(writer, "0")?;
    writeln!(writer, "ENDTAB")?;
    Ok(())
}

fn write_polyline(writer: &mut impl Write, layer: &str, points: &[Point2D]) -> std::io::Result<()> {
    writeln!(writer, "0")?;
    writeln!(writer, "POLYLINE")?;
    writeln!(writer, "8")?;
    writeln!(writer, "{layer}")?;
    writeln!(writer, "66")?;
    writeln!(writer, "1")?; // Vertices follow
    writeln!(writer, "70")?;
    writeln!(writer, "0")?; // Open; closed strokes repeat their first point
    for p in points {
        writeln!(writer, "0")?;
        writeln!(writer, "VERTEX")?;
        writeln!(writer, "8")?;
        writeln!(writer, "{layer}")?;
        write_point(writer, p.x, p.y)?;
    }
    writeln!(writer, "0")?;
    writeln!(writer, "SEQEND")?;
    writeln!(writer, "8")?;
    writeln!(writer, "{layer}")?;
    Ok(())
}
