//! # Symmetric Feature Placement
//!
//! Evenly spaced feature centers along the four edges of a square, and the
//! one-dimensional run used along a single edge.

use std::collections::HashSet;

use config::constants::rounded_key;
use config::params::Tolerances;
use glam::DVec2;

use crate::error::{MeshError, Result};

/// `count` evenly spaced samples from `lo` to `hi`, both ends included.
pub fn running_positions(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { hi } else { lo + step * i as f64 })
                .collect()
        }
    }
}

/// Positions along a run of `length`, keeping `margin` clear at both ends.
///
/// # Errors
///
/// [`MeshError::Configuration`] when `count < 2` or the margin leaves no room.
pub fn positions_along(length: f64, count: usize, margin: f64) -> Result<Vec<f64>> {
    require_count(count)?;
    let (lo, hi) = (margin, length - margin);
    if !(hi > lo) {
        return Err(MeshError::configuration(
            "end_margin",
            margin,
            format!("leaves no placement room along {length}"),
        ));
    }
    Ok(running_positions(lo, hi, count))
}

fn require_count(count: usize) -> Result<()> {
    if count < 2 {
        return Err(MeshError::configuration(
            "count_per_edge",
            count as f64,
            "at least 2 features per edge are required",
        ));
    }
    Ok(())
}

/// Feature centers along the four edges of a square centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLayout {
    /// Square edge length
    pub size: f64,
    /// Distance of the feature line from the outer edge, toward the center
    pub edge_offset: f64,
    /// Features requested on each edge, corners counted per edge
    pub count_per_edge: usize,
    /// Clearance kept from the corners along each edge
    pub end_margin: f64,
}

impl EdgeLayout {
    /// Running coordinates shared by all four edges.
    ///
    /// # Errors
    ///
    /// [`MeshError::Configuration`] when `count_per_edge < 2` or `end_margin`
    /// leaves an empty range.
    pub fn running(&self) -> Result<Vec<f64>> {
        require_count(self.count_per_edge)?;
        let h = self.size / 2.0;
        let (lo, hi) = (-h + self.end_margin, h - self.end_margin);
        if !(hi > lo) {
            return Err(MeshError::configuration(
                "end_margin",
                self.end_margin,
                format!("leaves no placement room on a {} square", self.size),
            ));
        }
        Ok(running_positions(lo, hi, self.count_per_edge))
    }

    /// Distinct centers in north, south, east, west order.
    ///
    /// A center shared by two edges appears once; centers are compared after
    /// rounding to `placement_decimals`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::params::Tolerances;
    /// use joinery_mesh::joinery::EdgeLayout;
    ///
    /// let layout = EdgeLayout { size: 120.0, edge_offset: 12.0, count_per_edge: 5, end_margin: 25.0 };
    /// assert_eq!(layout.centers(&Tolerances::default()).unwrap().len(), 20);
    /// ```
    pub fn centers(&self, tolerances: &Tolerances) -> Result<Vec<DVec2>> {
        let ts = self.running()?;
        let fixed = self.size / 2.0 - self.edge_offset;

        let north = ts.iter().map(|&x| DVec2::new(x, fixed));
        let south = ts.iter().map(|&x| DVec2::new(x, -fixed));
        let east = ts.iter().map(|&y| DVec2::new(fixed, y));
        let west = ts.iter().map(|&y| DVec2::new(-fixed, y));

        let decimals = tolerances.placement_decimals;
        let mut seen = HashSet::new();
        let centers: Vec<DVec2> = north
            .chain(south)
            .chain(east)
            .chain(west)
            .filter(|p| seen.insert((rounded_key(p.x, decimals), rounded_key(p.y, decimals))))
            .collect();

        tracing::debug!(
            size = self.size,
            count_per_edge = self.count_per_edge,
            centers = centers.len(),
            "placed edge features"
        );
        Ok(centers)
    }
}
