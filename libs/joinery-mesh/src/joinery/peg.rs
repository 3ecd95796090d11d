//! # Pegs
//!
//! A stud: a cylinder topped by a chamfered cone tip, axis +Z, root at
//! `z = 0`.

use config::constants::approx_zero;
use config::params::Tolerances;

use crate::error::{require_non_negative, require_positive, Result};
use crate::mesh::Mesh;
use crate::ops::cleanup::cleanup;
use crate::primitives::revolve_stations;

/// Parameters for [`peg`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PegParams {
    /// Shaft diameter
    pub diameter: f64,
    /// Total height, tip included
    pub length: f64,
    /// Requested height of the cone tip
    pub tip_chamfer: f64,
    /// Segments around the shaft
    pub segments: u32,
}

impl PegParams {
    /// Height of the cone tip, limited to `max_tip_fraction` of the length.
    pub fn tip_height(&self, tolerances: &Tolerances) -> f64 {
        self.tip_chamfer
            .min(self.length * tolerances.max_tip_fraction)
            .max(0.0)
    }

    /// Height of the cylindrical part below the tip.
    pub fn cylinder_height(&self, tolerances: &Tolerances) -> f64 {
        (self.length - self.tip_height(tolerances)).max(0.0)
    }
}

/// Builds a peg as one solid of revolution.
///
/// The cylinder and the cone share the ring at the cylinder top, so the cone
/// base sits exactly on the cylinder with no gap and no internal cap.
///
/// # Errors
///
/// [`crate::MeshError::Configuration`] for a non-positive diameter or length,
/// a negative chamfer, or fewer than 3 segments.
pub fn peg(params: &PegParams, tolerances: &Tolerances) -> Result<Mesh> {
    let diameter = require_positive("peg_diameter", params.diameter)?;
    let length = require_positive("peg_length", params.length)?;
    require_non_negative("tip_chamfer", params.tip_chamfer)?;

    let r = diameter / 2.0;
    let tip = params.tip_height(tolerances);
    let cylinder = params.cylinder_height(tolerances);

    // A band thinner than EPSILON would only produce slivers.
    let stations: Vec<(f64, f64)> = match (!approx_zero(cylinder), !approx_zero(tip)) {
        (true, true) => vec![(0.0, r), (cylinder, r), (length, 0.0)],
        (false, _) => vec![(0.0, r), (length, 0.0)],
        (true, false) => vec![(0.0, r), (length, r)],
    };

    let mesh = revolve_stations(&stations, params.segments)?;
    tracing::debug!(diameter, length, tip, cylinder, "built peg");
    cleanup(mesh, tolerances)
}
