//! # Marker Inlay Tiles
//!
//! A fiducial marker becomes a set of flat tiles, one per black module,
//! printed as the first material of a face-down plate. The module bitmap
//! itself comes from an external [`MarkerSource`]; this crate never decodes
//! marker dictionaries.
//!
//! Tiles come in two placements: flat inlays for a face-down plate
//! ([`marker_tiles`]) and tiles sunk into a wall of the open-top cube
//! ([`tiles_on_face`]).

use std::collections::HashMap;

use config::params::{MarkerConfig, OpenCubeConfig, Tolerances};
use glam::DVec3;
use joinery_mesh::primitives::{tapered_frustum, FrustumParams};
use joinery_mesh::{cleanup, Mesh, MeshError};

use crate::cube::CubeWall;
use crate::error::{PartError, Result};

/// Square grid of module flags, row-major with row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    cells: Vec<bool>,
}

impl ModuleGrid {
    /// An all-white grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Builds a grid from rows; `None` unless the rows form a square.
    pub fn from_rows(rows: &[Vec<bool>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self {
            size,
            cells: rows.concat(),
        })
    }

    /// Modules per side.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Out-of-range cells read as white.
    pub fn is_black(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[row * self.size + col]
    }

    /// Sets one module; out-of-range cells are ignored.
    pub fn set(&mut self, row: usize, col: usize, black: bool) {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col] = black;
        }
    }

    /// Number of black modules.
    pub fn black_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// Supplies the module grid of a marker, border included.
pub trait MarkerSource: Sync {
    /// The `grid_size × grid_size` grid of `marker_id`.
    fn module_grid(&self, marker_id: u32, grid_size: usize) -> Result<ModuleGrid>;
}

impl MarkerSource for HashMap<u32, ModuleGrid> {
    fn module_grid(&self, marker_id: u32, _grid_size: usize) -> Result<ModuleGrid> {
        self.get(&marker_id)
            .cloned()
            .ok_or_else(|| PartError::marker(marker_id, "unknown marker id"))
    }
}

/// Inlay tiles for one marker, centered on the plate at `z ∈ [0, inlay_depth]`.
///
/// # Errors
///
/// [`PartError::Marker`] when the source fails or returns a grid of the
/// wrong size; configuration error for a non-positive marker size or depth.
pub fn marker_tiles(
    source: &dyn MarkerSource,
    marker_id: u32,
    cfg: &MarkerConfig,
    tolerances: &Tolerances,
) -> Result<Mesh> {
    let grid = module_grid_checked(source, marker_id, cfg)?;
    tiles_from_grid(&grid, cfg, tolerances)
}

/// Fetches a grid and checks it has the size `cfg` expects.
pub(crate) fn module_grid_checked(
    source: &dyn MarkerSource,
    marker_id: u32,
    cfg: &MarkerConfig,
) -> Result<ModuleGrid> {
    let expected = cfg.grid_size();
    let grid = source.module_grid(marker_id, expected)?;
    if grid.size() != expected {
        return Err(PartError::marker(
            marker_id,
            format!("grid is {0}x{0}, expected {1}x{1}", grid.size(), expected),
        ));
    }
    Ok(grid)
}

/// One `module × module × inlay_depth` box per black module.
///
/// An all-white grid is "no feature" and yields an empty mesh.
pub fn tiles_from_grid(
    grid: &ModuleGrid,
    cfg: &MarkerConfig,
    tolerances: &Tolerances,
) -> Result<Mesh> {
    for (parameter, value) in [
        ("marker_size", cfg.marker_size),
        ("inlay_depth", cfg.inlay_depth),
    ] {
        if !(value > 0.0) {
            return Err(MeshError::configuration(parameter, value, "must be positive").into());
        }
    }

    let n = grid.size();
    if grid.black_count() == 0 {
        return Ok(Mesh::new());
    }

    let module = cfg.marker_size / n as f64;
    let tile = tapered_frustum(
        &FrustumParams::new(cfg.inlay_depth, module, module, 0.0),
        tolerances,
    )?;

    let half = n as f64 / 2.0;
    let mut tiles = Vec::with_capacity(grid.black_count());
    for row in 0..n {
        for col in 0..n {
            if !grid.is_black(row, col) {
                continue;
            }
            let x = (col as f64 - half + 0.5) * module;
            let y = (half - row as f64 - 0.5) * module;
            tiles.push(tile.clone().translated(DVec3::new(x, y, cfg.inlay_depth / 2.0)));
        }
    }

    let mesh = cleanup(Mesh::concatenate(tiles), tolerances)?;
    tracing::debug!(
        modules = n,
        black = grid.black_count(),
        triangles = mesh.triangle_count(),
        "built marker tiles"
    );
    Ok(mesh)
}

/// Tiles for one wall of the open-top cube.
///
/// The marker, shrunk by `marker_inset` on every side, is centered on the
/// wall's outer face. Row 0 runs along the top of the image (`+v`) and
/// column 0 along its left (`-u`) in the wall's [`CubeWall::frame`]. Each
/// tile is `inlay_depth` thick and sinks `marker_embed` into the wall.
///
/// # Errors
///
/// Configuration error when the inset leaves no marker, or for a
/// non-positive tile thickness or cube edge.
pub fn tiles_on_face(
    grid: &ModuleGrid,
    wall: CubeWall,
    cfg: &OpenCubeConfig,
    tolerances: &Tolerances,
) -> Result<Mesh> {
    let usable = cfg.usable_marker_size();
    if !(usable > 0.0) {
        return Err(MeshError::configuration(
            "marker_inset",
            cfg.marker_inset,
            format!("leaves no room on a {} marker", cfg.marker.marker_size),
        )
        .into());
    }
    for (parameter, value) in [
        ("inlay_depth", cfg.marker.inlay_depth),
        ("outer_edge", cfg.outer_edge),
    ] {
        if !(value > 0.0) {
            return Err(MeshError::configuration(parameter, value, "must be positive").into());
        }
    }
    if grid.black_count() == 0 {
        return Ok(Mesh::new());
    }

    let n = grid.size();
    let cell = usable / n as f64;
    let thickness = cfg.marker.inlay_depth;
    let (u, v, normal) = wall.frame();
    let (axis, _) = wall.axis();
    let tile = tapered_frustum(
        &FrustumParams::new(thickness, cell, cell, 0.0).with_axis(axis, true),
        tolerances,
    )?;

    // Top-left corner of the marker on the face.
    let origin = normal * (cfg.outer_edge / 2.0) - u * (usable / 2.0) + v * (usable / 2.0);
    let lift = normal * (thickness / 2.0 - cfg.marker_embed);

    let mut tiles = Vec::with_capacity(grid.black_count());
    for row in 0..n {
        for col in 0..n {
            if !grid.is_black(row, col) {
                continue;
            }
            let center = origin + u * ((col as f64 + 0.5) * cell)
                - v * ((row as f64 + 0.5) * cell)
                + lift;
            tiles.push(tile.clone().translated(center));
        }
    }

    let mesh = cleanup(Mesh::concatenate(tiles), tolerances)?;
    tracing::debug!(
        ?wall,
        black = grid.black_count(),
        triangles = mesh.triangle_count(),
        "built wall marker tiles"
    );
    Ok(mesh)
}
