//! plancad CLI - render object descriptions to drawings and meshes
//!
//! Reads `.json` or `.toml` object requests and writes DXF, SVG, STL and
//! JSON files next to each other in an output directory.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use plancad::export::{self, Format};
use plancad::ir::defaults::{default_dimensions, default_table, FALLBACK_DIMENSIONS};
use plancad::{load_spec, render_sheet, synthesize_3d, ObjectType, PlancadConfig};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plancad")]
#[command(about = "Parametric drawings and solids for furniture, rooms and houses", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render object descriptions to files
    Render {
        /// Object request files (.json or .toml)
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
        /// Comma-separated formats: dxf, svg, stl, json
        #[arg(long, value_delimiter = ',', default_value = "dxf,svg,stl,json")]
        formats: Vec<Format>,
        /// TOML settings file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Show resolved dimensions and geometry counts for a request
    Info {
        /// Object request file (.json or .toml)
        file: PathBuf,
    },
    /// Print the default dimensions used when a request omits them
    Defaults {
        /// Only this type
        #[arg(value_name = "TYPE")]
        object_type: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            files,
            out,
            formats,
            config,
        } => render_all(&files, &out, &formats, config.as_deref()),
        Commands::Info { file } => show_info(&file),
        Commands::Defaults { object_type } => {
            show_defaults(object_type.as_deref());
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render_all(
    files: &[PathBuf],
    out: &Path,
    formats: &[Format],
    config: Option<&Path>,
) -> Result<()> {
    let config = match config {
        Some(path) => PlancadConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PlancadConfig::default(),
    };
    std::fs::create_dir_all(out)
        .with_context(|| format!("failed to create {}", out.display()))?;

    let stems = output_stems(files);
    let failures: Vec<String> = files
        .par_iter()
        .zip(stems.par_iter())
        .filter_map(|(file, stem)| {
            render_one(file, stem, out, formats, &config)
                .map_err(|e| {
                    error!(file = %file.display(), "{e:#}");
                    file.display().to_string()
                })
                .err()
        })
        .collect();

    if !failures.is_empty() {
        bail!("{} of {} files failed: {}", failures.len(), files.len(), failures.join(", "));
    }
    info!(files = files.len(), "done");
    Ok(())
}

fn file_stem(file: &Path) -> &str {
    file.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("object")
}

/// One output name per input file. Inputs sharing a stem (`a/chair.json`,
/// `b/chair.json`) get `-2`, `-3`, ... suffixes in input order so parallel
/// renders never write the same file.
fn output_stems(files: &[PathBuf]) -> Vec<String> {
    let mut taken: HashSet<String> = files.iter().map(|f| file_stem(f).to_string()).collect();
    let mut first_use: HashSet<&str> = HashSet::new();

    files
        .iter()
        .map(|file| {
            let stem = file_stem(file);
            if first_use.insert(stem) {
                return stem.to_string();
            }
            let name = (2..)
                .map(|n| format!("{stem}-{n}"))
                .find(|name| !taken.contains(name))
                .unwrap_or_else(|| stem.to_string());
            warn!(file = %file.display(), output = %name, "duplicate file name, renaming output");
            taken.insert(name.clone());
            name
        })
        .collect()
}

fn render_one(
    file: &Path,
    stem: &str,
    out: &Path,
    formats: &[Format],
    config: &PlancadConfig,
) -> Result<()> {
    let spec = load_spec(file).with_context(|| format!("failed to read {}", file.display()))?;

    for &format in formats {
        let target = out.join(format!("{stem}.{}", format.extension()));
        match format {
            Format::Dxf => {
                let sheet = render_sheet(&spec, &config.dxf)?;
                export::export_dxf(&sheet, &target)?;
            }
            Format::Svg => {
                let sheet = render_sheet(&spec, &config.svg)?;
                export::export_svg(&sheet, &target)?;
            }
            Format::Stl => {
                let parts = synthesize_3d(&spec)?;
                export::export_stl(&parts, &config.mesh, &target)?;
            }
            Format::Json => {
                let parts = synthesize_3d(&spec)?;
                export::export_json(&parts, &target)?;
            }
        }
    }
    Ok(())
}

fn show_info(file: &Path) -> Result<()> {
    let spec = load_spec(file).with_context(|| format!("failed to read {}", file.display()))?;
    let views = plancad::synthesize_2d(&spec)?;
    let parts = synthesize_3d(&spec)?;

    println!("File: {}", file.display());
    println!("Type: {}", spec.object_type);
    println!("Dimensions: {}", spec.dimensions);
    if !spec.features.is_empty() {
        println!("Features:");
        for (key, value) in spec.features.iter() {
            println!("  {key}: {value:?}");
        }
    }
    println!("Top view: {} subpaths", views.top.len());
    println!("Front view: {} subpaths", views.front.len());
    println!("Solid: {} primitives", parts.len());
    for part in &parts {
        println!("  {} ({})", part.name, part.shape.kind());
    }
    Ok(())
}

fn show_defaults(object_type: Option<&str>) {
    match object_type {
        Some(tag) => {
            let ty = ObjectType::from_tag(tag);
            println!("{ty}: {}", default_dimensions(ty));
        }
        None => {
            for (ty, dims) in default_table() {
                println!("{ty}: {dims}");
            }
            println!("other: {FALLBACK_DIMENSIONS}");
        }
    }
}
