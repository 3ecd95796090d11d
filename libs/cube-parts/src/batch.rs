//! # Batch Generation
//!
//! Runs a list of part jobs on rayon's pool. Every generator is a pure
//! function of its parameters, so jobs share nothing but the read-only
//! marker source and exporter. A failed job is reported and skipped; it
//! never stops the others.

use config::params::{
    CubeConfig, EdgeBlockConfig, MarkerConfig, OpenCubeConfig, PlateConfig, Tolerances,
};
use joinery_mesh::Mesh;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cube::{cube_markers, open_top_cube, DEFAULT_WALL_IDS};
use crate::edge_block::generate_edge_block;
use crate::error::{PartError, Result};
use crate::marker::{marker_tiles, MarkerSource};
use crate::plate::generate_plate;
use crate::slots::{plate_plug, slot_frustums};

/// Marker ids of the kit's five marked faces.
pub const DEFAULT_FACE_IDS: [(&str, u32); 5] =
    [("top", 0), ("side1", 1), ("side2", 2), ("side3", 3), ("side4", 4)];

/// What to build. Loaded from a flat parameter file, e.g.
/// `{ "kind": "plate", "size": 100.0 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartKind {
    /// Universal face plate.
    Plate(PlateConfig),
    /// L-shaped edge block.
    EdgeBlock(EdgeBlockConfig),
    /// All five cutters merged into one mesh.
    SlotCutters(CubeConfig),
    /// Plug plate for one slot.
    PlatePlug(CubeConfig),
    /// Inlay tiles for one face-down plate.
    MarkerInlay {
        /// Marker looked up in the marker source.
        marker_id: u32,
        /// Grid and tile dimensions.
        #[serde(default)]
        config: MarkerConfig,
    },
    /// Open-top test cube walls.
    OpenCube(OpenCubeConfig),
    /// Marker tiles for the test cube's five walls, ids from [`DEFAULT_WALL_IDS`].
    CubeMarkers(OpenCubeConfig),
}

/// A named part job. The name is handed to the exporter unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartJob {
    /// Output name.
    pub name: String,
    /// Part and its parameters.
    pub part: PartKind,
}

impl PartJob {
    /// Creates a job.
    pub fn new(name: impl Into<String>, part: PartKind) -> Self {
        Self {
            name: name.into(),
            part,
        }
    }
}

/// Receives finished meshes. File formats and paths are its business.
pub trait PartExporter: Sync {
    /// Writes `mesh` under `name`.
    fn export(&self, name: &str, mesh: &Mesh) -> Result<()>;
}

/// Outcome of a batch, in job order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Jobs handed to the exporter.
    pub exported: Vec<String>,
    /// Jobs whose mesh came out empty (e.g. an all-white marker).
    pub skipped_empty: Vec<String>,
    /// Jobs that failed, with their error.
    pub failed: Vec<(String, PartError)>,
}

impl BatchReport {
    /// True when no job failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// The default kit: one universal plate, one inlay per marked face and one
/// edge block.
pub fn default_kit_jobs() -> Vec<PartJob> {
    let mut jobs = vec![PartJob::new(
        "plate_white",
        PartKind::Plate(PlateConfig::default()),
    )];
    jobs.extend(DEFAULT_FACE_IDS.iter().map(|&(_, marker_id)| {
        PartJob::new(
            format!("plate_black_{marker_id}"),
            PartKind::MarkerInlay {
                marker_id,
                config: MarkerConfig::default(),
            },
        )
    }));
    jobs.push(PartJob::new(
        "edge_block",
        PartKind::EdgeBlock(EdgeBlockConfig::default()),
    ));
    jobs
}

/// Builds one part.
pub fn generate_part(
    part: &PartKind,
    markers: &dyn MarkerSource,
    tolerances: &Tolerances,
) -> Result<Mesh> {
    match part {
        PartKind::Plate(cfg) => generate_plate(cfg, tolerances),
        PartKind::EdgeBlock(cfg) => generate_edge_block(cfg, tolerances),
        PartKind::SlotCutters(cfg) => {
            let cutters = slot_frustums(cfg, tolerances)?;
            Ok(Mesh::concatenate(cutters.into_iter().map(|(_, mesh)| mesh)))
        }
        PartKind::PlatePlug(cfg) => plate_plug(cfg, tolerances),
        PartKind::MarkerInlay { marker_id, config } => {
            marker_tiles(markers, *marker_id, config, tolerances)
        }
        PartKind::OpenCube(cfg) => open_top_cube(cfg, tolerances),
        PartKind::CubeMarkers(cfg) => cube_markers(markers, &DEFAULT_WALL_IDS, cfg, tolerances),
    }
}

/// Generates every job in parallel and exports the non-empty results.
pub fn generate_batch(
    jobs: &[PartJob],
    markers: &dyn MarkerSource,
    exporter: &dyn PartExporter,
    tolerances: &Tolerances,
) -> BatchReport {
    let outcomes: Vec<(&str, Result<bool>)> = jobs
        .par_iter()
        .map(|job| {
            let outcome = generate_part(&job.part, markers, tolerances).and_then(|mesh| {
                if mesh.is_empty() {
                    return Ok(false);
                }
                exporter.export(&job.name, &mesh)?;
                tracing::debug!(
                    part = %job.name,
                    triangles = mesh.triangle_count(),
                    "exported part"
                );
                Ok(true)
            });
            (job.name.as_str(), outcome)
        })
        .collect();

    let mut report = BatchReport::default();
    for (name, outcome) in outcomes {
        match outcome {
            Ok(true) => report.exported.push(name.to_string()),
            Ok(false) => report.skipped_empty.push(name.to_string()),
            Err(err) => {
                tracing::warn!(part = %name, error = %err, "part failed");
                report.failed.push((name.to_string(), err));
            }
        }
    }

    tracing::info!(
        jobs = jobs.len(),
        exported = report.exported.len(),
        skipped = report.skipped_empty.len(),
        failed = report.failed.len(),
        "batch finished"
    );
    report
}
