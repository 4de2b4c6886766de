//! navkit CLI - navmesh snapshot extraction.
//!
//! Single binary that provides:
//! - `navkit submeshes` - per-area submeshes, optionally as OBJ
//! - `navkit boundary` - boundary points
//! - `navkit edges` - directed boundary edges
//! - `navkit links` - off-mesh links, optionally corrected onto the ground
//! - `navkit extract` - all of the above in one document

mod config;
mod snapshot;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use navkit_core::Vec3;
use navkit_extract::{
    detect_boundary_points, extract_all, extract_links, multi_mesh, reconstruct_edges,
    single_mesh, write_compact_obj, write_obj, EdgeParams, ExportError,
};
use navkit_mesh::TriNavMesh;

use crate::config::CliConfig;
use crate::snapshot::Snapshot;

#[derive(Debug, Parser)]
#[command(name = "navkit")]
#[command(about = "Navmesh snapshot extraction", version)]
struct Cli {
    /// YAML file with extraction tuning
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write the JSON result here instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Partition the triangulation by area tag
    Submeshes {
        snapshot: PathBuf,

        /// One compacted mesh per area instead of one shared vertex buffer
        #[arg(long)]
        multi: bool,

        /// Also write the meshes as Wavefront OBJ
        #[arg(long)]
        obj: Option<PathBuf>,
    },

    /// Detect vertices on the walkable boundary
    Boundary { snapshot: PathBuf },

    /// Reconstruct directed boundary edges
    Edges {
        snapshot: PathBuf,

        /// Only test point pairs at most this far apart
        #[arg(long)]
        pair_radius: Option<f32>,
    },

    /// Extract off-mesh links
    Links {
        snapshot: PathBuf,

        /// Snap link ends onto the ground and drop invalid links
        #[arg(long)]
        correct: bool,
    },

    /// Run every extraction pass
    Extract { snapshot: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::load_or_default(cli.config.as_deref())?;
    let output = cli.output.as_deref();

    match cli.command {
        Commands::Submeshes {
            snapshot,
            multi,
            obj,
        } => {
            let snapshot = load_snapshot(&snapshot)?;
            if multi {
                let meshes = multi_mesh(&snapshot.triangulation);
                if let Some(path) = &obj {
                    write_obj_file(path, |w| write_compact_obj(&meshes, w))?;
                }
                emit(output, &meshes)
            } else {
                let export = single_mesh(&snapshot.triangulation);
                if let Some(path) = &obj {
                    write_obj_file(path, |w| write_obj(&export, w))?;
                }
                emit(output, &export)
            }
        }
        Commands::Boundary { snapshot } => {
            let snapshot = load_snapshot(&snapshot)?;
            let mesh = backend(&snapshot, &config);
            let points = boundary_points(&snapshot, &mesh, &config.edges);
            tracing::info!(points = points.len(), "Detected boundary points");
            emit(output, &points)
        }
        Commands::Edges {
            snapshot,
            pair_radius,
        } => {
            let snapshot = load_snapshot(&snapshot)?;
            let mesh = backend(&snapshot, &config);
            let mut params = config.edges;
            if pair_radius.is_some() {
                params.pair_radius = pair_radius;
            }
            let points = boundary_points(&snapshot, &mesh, &params);
            let edges = reconstruct_edges(&points, &mesh, &params);
            tracing::info!(points = points.len(), edges = edges.len(), "Reconstructed edges");
            emit(output, &edges)
        }
        Commands::Links { snapshot, correct } => {
            let snapshot = load_snapshot(&snapshot)?;
            let mesh = backend(&snapshot, &config);
            let mut params = config.links;
            params.correct |= correct;
            let links = extract_links(
                &snapshot.off_mesh_links,
                &snapshot.settings,
                &params,
                &mesh,
                &mesh,
            );
            tracing::info!(
                raw = snapshot.off_mesh_links.len(),
                kept = links.len(),
                "Extracted off-mesh links"
            );
            emit(output, &links)
        }
        Commands::Extract { snapshot } => {
            let snapshot = load_snapshot(&snapshot)?;
            let mesh = backend(&snapshot, &config);
            let extraction = extract_all(
                &snapshot.triangulation,
                snapshot.bounds,
                &snapshot.off_mesh_links,
                &snapshot.settings,
                &config.edges,
                &config.links,
                &mesh,
            );
            tracing::info!(
                submeshes = extraction.submeshes.len(),
                points = extraction.boundary_points.len(),
                edges = extraction.edges.len(),
                links = extraction.links.len(),
                "Extraction complete"
            );
            emit(output, &extraction)
        }
    }
}

fn load_snapshot(path: &Path) -> Result<Snapshot> {
    Snapshot::load(path).with_context(|| format!("Failed to load snapshot {}", path.display()))
}

fn backend(snapshot: &Snapshot, config: &CliConfig) -> TriNavMesh {
    TriNavMesh::from_triangulation(&snapshot.triangulation).with_query_extent(config.query_extent)
}

/// Boundary points within the snapshot's bounds. A snapshot without any
/// vertices has none.
fn boundary_points(snapshot: &Snapshot, mesh: &TriNavMesh, params: &EdgeParams) -> Vec<Vec3> {
    match snapshot.effective_bounds() {
        Some(bounds) => detect_boundary_points(
            &snapshot.triangulation,
            &bounds,
            snapshot.settings.agent_radius,
            mesh,
            params,
        ),
        None => Vec::new(),
    }
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn write_obj_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), ExportError>,
{
    let mut writer = create(path)?;
    write(&mut writer).with_context(|| format!("Failed to write OBJ to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write OBJ to {}", path.display()))?;
    Ok(())
}

fn emit<T: Serialize>(output: Option<&Path>, value: &T) -> Result<()> {
    match output {
        Some(path) => {
            let mut writer = create(path)?;
            serde_json::to_writer_pretty(&mut writer, value)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writeln!(writer)?;
            writer
                .flush()
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, value).context("Failed to write to stdout")?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
