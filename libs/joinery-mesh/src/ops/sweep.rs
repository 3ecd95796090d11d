//! # Profile Sweep
//!
//! Extrudes a 2D cross-section along a straight run into an uncapped wall.
//! Every profile segment becomes one quad. No end caps are emitted: an open
//! profile gives an open sheet, and a closed profile gives a tube whose ends
//! stay open.

use glam::DVec2;

use super::loft::{loft_into, Ring};
use crate::axis::Axis;
use crate::error::{MeshError, Result};
use crate::mesh::Mesh;
use crate::profile::Profile2D;

/// A straight run `[start, end]` along `axis`, with the profile's origin
/// moved to `offset` in the plane across the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPath {
    /// Direction of the run
    pub axis: Axis,
    /// Position along `axis` where the sweep begins
    pub start: f64,
    /// Position along `axis` where the sweep ends
    pub end: f64,
    /// Plane position of the profile origin
    pub offset: DVec2,
}

impl SweepPath {
    /// A run with the profile origin on the axis.
    pub fn new(axis: Axis, start: f64, end: f64) -> Self {
        Self {
            axis,
            start,
            end,
            offset: DVec2::ZERO,
        }
    }

    /// Moves the profile origin to `offset`.
    pub fn with_offset(mut self, offset: DVec2) -> Self {
        self.offset = offset;
        self
    }

    /// Signed run length, `end - start`.
    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

/// Sweeps `profile` along `path`, producing `2 * (N - 1)` triangles.
///
/// Winding follows the loft convention: a counter-clockwise profile with
/// `outward = true` faces away from the region it encloses.
///
/// # Errors
///
/// [`MeshError::Configuration`] when the run is empty or reversed.
pub fn sweep_profile(profile: &Profile2D, path: &SweepPath, outward: bool) -> Result<Mesh> {
    if !(path.start.is_finite() && path.end.is_finite()) || path.end <= path.start {
        return Err(MeshError::configuration(
            "sweep_end",
            path.end,
            format!("must be greater than sweep start {}", path.start),
        ));
    }

    let placed = profile.clone().translated(path.offset);
    let near = Ring::lift(&placed, path.axis, path.start);
    let far = Ring::lift(&placed, path.axis, path.end);

    let mut mesh = Mesh::with_capacity(4 * profile.len(), 2 * profile.len());
    loft_into(&mut mesh, &near, &far, outward)?;

    tracing::debug!(
        axis = ?path.axis,
        points = profile.len(),
        triangles = mesh.triangle_count(),
        "swept profile"
    );
    Ok(mesh)
}
