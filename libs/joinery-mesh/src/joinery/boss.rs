//! # Bosses
//!
//! Reinforcing collar around a peg root: an annulus extruded straight up.

use config::params::Tolerances;
use glam::DVec2;

use crate::error::{require_positive, MeshError, Result};
use crate::mesh::Mesh;
use crate::ops::extrude::extrude_prismatic;
use crate::profile::Polygon2D;

/// Parameters for [`boss`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossParams {
    /// Collar axis position in the plate plane
    pub center: DVec2,
    /// Outside diameter of the collar
    pub outer_diameter: f64,
    /// Bore of the collar, normally the peg diameter
    pub inner_diameter: f64,
    /// Collar height above `z = 0`
    pub height: f64,
    /// Segments around both circles
    pub segments: u32,
}

/// Builds a collar from `z = 0` to `z = height`, centered on `center`.
///
/// # Errors
///
/// [`MeshError::Configuration`] when the outer diameter does not exceed the
/// inner one, the inner diameter or height is not positive, or there are
/// fewer than 3 segments.
pub fn boss(params: &BossParams, tolerances: &Tolerances) -> Result<Mesh> {
    let inner = require_positive("boss_inner_diameter", params.inner_diameter)?;
    let height = require_positive("boss_height", params.height)?;
    if !(params.outer_diameter > inner) {
        return Err(MeshError::configuration(
            "boss_outer_diameter",
            params.outer_diameter,
            format!("must exceed the inner diameter {inner}"),
        ));
    }
    if params.segments < 3 {
        return Err(MeshError::configuration(
            "segments",
            f64::from(params.segments),
            "at least 3 segments are required",
        ));
    }

    let collar = Polygon2D::annulus(params.center, params.outer_diameter, inner, params.segments);
    extrude_prismatic(&collar, height, tolerances)
}
