//! # Solids of Revolution
//!
//! Stacked cylinder and cone bands around the Z axis, built from a list of
//! `(z, radius)` stations. Adjacent bands share their ring, so a stack has no
//! internal caps and no gap between bands.

use std::f64::consts::TAU;

use glam::DVec3;

use crate::error::{MeshError, Result};
use crate::mesh::Mesh;

/// Revolves the station list into a closed solid.
///
/// A station with radius zero collapses to a single apex vertex. The first
/// and last stations get flat caps unless they are apexes.
///
/// # Errors
///
/// [`MeshError::Configuration`] when there are fewer than two stations or
/// three segments, when `z` does not strictly increase, when a radius is
/// negative, or when every radius is zero.
///
/// # Example
///
/// ```rust
/// use joinery_mesh::primitives::revolve_stations;
///
/// // Cylinder of radius 2 and height 5 topped by a 1 mm cone
/// let mesh = revolve_stations(&[(0.0, 2.0), (5.0, 2.0), (6.0, 0.0)], 32).unwrap();
/// assert!(mesh.is_watertight());
/// ```
pub fn revolve_stations(stations: &[(f64, f64)], segments: u32) -> Result<Mesh> {
    if segments < 3 {
        return Err(MeshError::configuration(
            "segments",
            f64::from(segments),
            "at least 3 segments are required",
        ));
    }
    if stations.len() < 2 {
        return Err(MeshError::configuration(
            "stations",
            stations.len() as f64,
            "at least 2 stations are required",
        ));
    }
    for pair in stations.windows(2) {
        if !(pair[1].0 > pair[0].0) {
            return Err(MeshError::configuration(
                "station_z",
                pair[1].0,
                format!("must be greater than the previous station at {}", pair[0].0),
            ));
        }
    }
    if let Some(&(_, r)) = stations.iter().find(|(_, r)| !(r.is_finite() && *r >= 0.0)) {
        return Err(MeshError::configuration("station_radius", r, "must be non-negative"));
    }
    if stations.iter().all(|&(_, r)| r == 0.0) {
        return Err(MeshError::configuration(
            "station_radius",
            0.0,
            "at least one radius must be positive",
        ));
    }

    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(stations.len() * n, 2 * stations.len() * n);

    // Ring indices per station, or a single apex.
    let rings: Vec<Vec<u32>> = stations
        .iter()
        .map(|&(z, r)| {
            if r > 0.0 {
                (0..n)
                    .map(|j| {
                        let theta = TAU * j as f64 / n as f64;
                        mesh.add_vertex(DVec3::new(r * theta.cos(), r * theta.sin(), z))
                    })
                    .collect()
            } else {
                vec![mesh.add_vertex(DVec3::new(0.0, 0.0, z))]
            }
        })
        .collect();

    for pair in rings.windows(2) {
        let (bottom, top) = (&pair[0], &pair[1]);
        match (bottom.len() > 1, top.len() > 1) {
            (true, true) => {
                for j in 0..n {
                    let j_next = (j + 1) % n;
                    mesh.add_triangle(bottom[j], bottom[j_next], top[j_next]);
                    mesh.add_triangle(bottom[j], top[j_next], top[j]);
                }
            }
            (true, false) => {
                for j in 0..n {
                    mesh.add_triangle(bottom[j], bottom[(j + 1) % n], top[0]);
                }
            }
            (false, true) => {
                for j in 0..n {
                    mesh.add_triangle(bottom[0], top[(j + 1) % n], top[j]);
                }
            }
            // Two apexes in a row are a line, not a surface.
            (false, false) => {}
        }
    }

    if let Some(first) = rings.first().filter(|ring| ring.len() > 1) {
        for j in 1..n - 1 {
            mesh.add_triangle(first[0], first[j + 1], first[j]);
        }
    }
    if let Some(last) = rings.last().filter(|ring| ring.len() > 1) {
        for j in 1..n - 1 {
            mesh.add_triangle(last[0], last[j], last[j + 1]);
        }
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cylinder_band() {
        let mesh = revolve_stations(&[(0.0, 5.0), (10.0, 5.0)], 32).unwrap();
        assert_eq!(mesh.vertex_count(), 64);
        assert_eq!(mesh.triangle_count(), 64 + 2 * 30);
        assert!(mesh.is_watertight());

        let (min, max) = mesh.bounding_box();
        assert_eq!(min.z, 0.0);
        assert_eq!(max.z, 10.0);
    }

    #[test]
    fn test_cone_volume() {
        let segments = 256;
        let mesh = revolve_stations(&[(0.0, 1.0), (3.0, 0.0)], segments).unwrap();
        assert!(mesh.is_watertight());
        let base = 0.5 * segments as f64 * (TAU / segments as f64).sin();
        assert_relative_eq!(mesh.signed_volume(), base * 3.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inverted_cone_is_outward() {
        let mesh = revolve_stations(&[(0.0, 0.0), (2.0, 1.0)], 16).unwrap();
        assert!(mesh.is_watertight());
        assert!(mesh.signed_volume() > 0.0);
    }

    #[test]
    fn test_stacked_bands_share_rings() {
        let mesh = revolve_stations(&[(0.0, 2.0), (1.0, 2.0), (2.0, 1.0), (3.0, 0.0)], 12).unwrap();
        assert_eq!(mesh.vertex_count(), 12 * 3 + 1);
        assert!(mesh.is_watertight());
    }

    #[test]
    fn test_invalid_stations() {
        assert!(revolve_stations(&[(0.0, 1.0)], 16).is_err());
        assert!(revolve_stations(&[(0.0, 1.0), (1.0, 1.0)], 2).is_err());
        assert!(revolve_stations(&[(1.0, 1.0), (1.0, 1.0)], 16).is_err());
        assert!(revolve_stations(&[(0.0, -1.0), (1.0, 1.0)], 16).is_err());
        assert!(revolve_stations(&[(0.0, 0.0), (1.0, 0.0)], 16).is_err());
    }
}
