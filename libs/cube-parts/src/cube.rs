//! # Open-Top Test Cube
//!
//! A hollow cube with its top face missing, assembled from five wall boxes
//! that overlap along the cube edges. The walls are not unioned; a slicer
//! fuses them. The marker tiles for each wall are a separate mesh so they
//! can be printed in the second material.

use config::params::{OpenCubeConfig, Tolerances};
use glam::DVec3;
use joinery_mesh::primitives::{tapered_frustum, FrustumParams};
use joinery_mesh::{cleanup, Axis, Mesh, MeshError};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::marker::{module_grid_checked, tiles_on_face, MarkerSource};

/// One of the five walls of the open-top cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CubeWall {
    /// The floor, facing `-z`.
    Bottom,
    /// Facing `+x`.
    PosX,
    /// Facing `-x`.
    NegX,
    /// Facing `+y`.
    PosY,
    /// Facing `-y`.
    NegY,
}

/// Marker ids of the five walls in the default test cube.
pub const DEFAULT_WALL_IDS: [(CubeWall, u32); 5] = [
    (CubeWall::Bottom, 0),
    (CubeWall::PosX, 1),
    (CubeWall::NegX, 2),
    (CubeWall::PosY, 3),
    (CubeWall::NegY, 4),
];

impl CubeWall {
    /// Every wall, floor first.
    pub const ALL: [CubeWall; 5] = [
        CubeWall::Bottom,
        CubeWall::PosX,
        CubeWall::NegX,
        CubeWall::PosY,
        CubeWall::NegY,
    ];

    /// Axis of the outward normal and whether it points along the positive side.
    pub fn axis(self) -> (Axis, bool) {
        match self {
            CubeWall::Bottom => (Axis::Z, false),
            CubeWall::PosX => (Axis::X, true),
            CubeWall::NegX => (Axis::X, false),
            CubeWall::PosY => (Axis::Y, true),
            CubeWall::NegY => (Axis::Y, false),
        }
    }

    /// Outward unit normal.
    pub fn normal(self) -> DVec3 {
        let (axis, positive) = self.axis();
        if positive {
            axis.unit()
        } else {
            -axis.unit()
        }
    }

    /// Right-handed frame `(u, v, n)` of the outer face seen from outside.
    ///
    /// `u` points right and `v` up in the marker image. For the side walls
    /// `v` is `+z`; the floor uses `+y` as its reference instead.
    pub fn frame(self) -> (DVec3, DVec3, DVec3) {
        let n = self.normal();
        let reference = if n.z.abs() > 0.95 { DVec3::Y } else { DVec3::Z };
        let u = reference.cross(n).normalize();
        let v = n.cross(u);
        (u, v, n)
    }
}

/// The cube centered at the origin with the `+z` face open.
///
/// Five boxes built from untapered frustums: a full `L × L × t` floor and
/// four full-height walls. Neighbouring walls overlap at the edges, so the
/// result is closed per wall but not a single manifold.
///
/// # Errors
///
/// Configuration error for a non-positive edge or wall thickness, or a wall
/// of at least half the edge.
pub fn open_top_cube(cfg: &OpenCubeConfig, tolerances: &Tolerances) -> Result<Mesh> {
    let edge = cfg.outer_edge;
    let wall = cfg.wall_thickness;
    if !(edge > 0.0) {
        return Err(MeshError::configuration("outer_edge", edge, "must be positive").into());
    }
    if !(wall > 0.0) || wall * 2.0 >= edge {
        return Err(MeshError::configuration(
            "wall_thickness",
            wall,
            format!("must be positive and less than half of {edge}"),
        )
        .into());
    }

    let seat = edge / 2.0 - wall / 2.0;
    let walls = CubeWall::ALL
        .into_iter()
        .map(|w| -> Result<Mesh> {
            let (axis, _) = w.axis();
            // Thin along the wall's own axis, full edge across it.
            let extents = DVec3::splat(edge) - axis.unit() * (edge - wall);
            let params = FrustumParams::new(extents.z, extents.x, extents.y, 0.0);
            Ok(tapered_frustum(&params, tolerances)?.translated(w.normal() * seat))
        })
        .collect::<Result<Vec<_>>>()?;

    let mesh = cleanup(Mesh::concatenate(walls), tolerances)?;
    tracing::debug!(
        edge,
        wall,
        triangles = mesh.triangle_count(),
        "built open-top cube"
    );
    Ok(mesh)
}

/// Marker tiles for every `(wall, marker_id)` pair, merged into one mesh.
///
/// A wall whose marker is all white contributes nothing.
///
/// # Errors
///
/// [`crate::PartError::Marker`] when the source fails or returns a grid of
/// the wrong size; configuration errors from [`tiles_on_face`].
pub fn cube_markers(
    source: &dyn MarkerSource,
    walls: &[(CubeWall, u32)],
    cfg: &OpenCubeConfig,
    tolerances: &Tolerances,
) -> Result<Mesh> {
    let mut parts = Vec::with_capacity(walls.len());
    for &(wall, marker_id) in walls {
        let grid = module_grid_checked(source, marker_id, &cfg.marker)?;
        parts.push(tiles_on_face(&grid, wall, cfg, tolerances)?);
    }
    Ok(cleanup(Mesh::concatenate(parts), tolerances)?)
}
