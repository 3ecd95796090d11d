//! # Sockets
//!
//! Open-mouthed receiving channels for pegs. The cross-section is a "C":
//! a flat opening segment on `u = 0` and a half-circle bore behind it on the
//! `-u` side. Sweeping it gives a channel with no end caps, so the mouth on
//! the face where the sweep starts stays open.

use std::f64::consts::PI;

use glam::DVec2;

use crate::error::{require_non_negative, require_positive, MeshError, Result};
use crate::mesh::Mesh;
use crate::ops::sweep::{sweep_profile, SweepPath};
use crate::profile::Profile2D;

/// Builds the closed, counter-clockwise C-profile.
///
/// Order: `(0, -w/2)`, `(0, +w/2)`, then `sections` arc samples from
/// `(0, r)` through `(-r, 0)` to `(0, -r)`, then the closing point. The
/// profile has `sections + 3` points.
///
/// # Errors
///
/// [`MeshError::Configuration`] for a non-positive radius or opening width,
/// or fewer than 2 arc sections.
pub fn socket_profile(radius: f64, opening_width: f64, sections: u32) -> Result<Profile2D> {
    let radius = require_positive("socket_radius", radius)?;
    let half_open = require_positive("opening_width", opening_width)? / 2.0;
    if sections < 2 {
        return Err(MeshError::configuration(
            "sections",
            f64::from(sections),
            "the socket arc needs at least 2 sections",
        ));
    }

    let mut points = Vec::with_capacity(sections as usize + 3);
    points.push(DVec2::new(0.0, -half_open));
    points.push(DVec2::new(0.0, half_open));
    let last = sections - 1;
    for i in 0..sections {
        // Arc ends are pinned to u = 0 exactly.
        let p = match i {
            0 => DVec2::new(0.0, radius),
            i if i == last => DVec2::new(0.0, -radius),
            i => {
                let theta = PI / 2.0 + PI * f64::from(i) / f64::from(last);
                radius * DVec2::new(theta.cos(), theta.sin())
            }
        };
        points.push(p);
    }
    points.push(DVec2::new(0.0, -half_open));

    Ok(Profile2D::new(points))
}

/// Sweeps a socket profile into a receiving channel.
///
/// The channel is a cavity, so its walls face into it (`outward = false`).
pub fn socket_channel(profile: &Profile2D, path: &SweepPath) -> Result<Mesh> {
    sweep_profile(profile, path, false)
}

/// Peg/bore fit. The peg must be strictly thinner than the bore; the only
/// compensation for print over-extrusion is the explicit clearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointFit {
    /// Diameter of the peg entering the bore
    pub peg_diameter: f64,
    /// Nominal bore diameter
    pub bore_diameter: f64,
    /// Extra mouth width over the peg diameter
    pub clearance: f64,
}

impl JointFit {
    /// Width of the slot mouth: peg diameter plus clearance.
    pub fn opening_width(&self) -> f64 {
        self.peg_diameter + self.clearance
    }

    /// # Errors
    ///
    /// [`MeshError::Configuration`] when the peg is not thinner than the bore
    /// or the clearance is negative.
    pub fn validate(&self) -> Result<()> {
        require_positive("peg_diameter", self.peg_diameter)?;
        require_positive("bore_diameter", self.bore_diameter)?;
        require_non_negative("clearance", self.clearance)?;
        if self.peg_diameter >= self.bore_diameter {
            return Err(MeshError::configuration(
                "peg_diameter",
                self.peg_diameter,
                format!("must be smaller than the bore diameter {}", self.bore_diameter),
            ));
        }
        Ok(())
    }
}
