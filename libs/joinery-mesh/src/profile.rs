//! # 2D Profiles
//!
//! Cross-sections and polygon outlines in a local `(u, v)` plane. A profile
//! is closed iff its first point equals its last point.

use std::f64::consts::TAU;

use glam::DVec2;

/// An ordered sequence of 2D points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile2D {
    points: Vec<DVec2>,
}

impl Profile2D {
    /// Wraps points as given; no closing point is added.
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    /// Points in traversal order, closing point included.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Number of stored points, closing duplicate included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True for a profile without points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when the first point equals the last.
    pub fn is_closed(&self) -> bool {
        self.points.len() >= 2 && self.points.first() == self.points.last()
    }

    /// Appends the first point if the profile is not closed yet.
    pub fn closed(mut self) -> Self {
        if !self.is_closed() {
            if let Some(&first) = self.points.first() {
                self.points.push(first);
            }
        }
        self
    }

    /// Points without the repeated closing point.
    pub fn unique_points(&self) -> &[DVec2] {
        if self.is_closed() {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points
        }
    }

    /// Same points in opposite order.
    pub fn reversed(mut self) -> Self {
        self.points.reverse();
        self
    }

    /// Swaps `u` and `v` in every point.
    ///
    /// The swap mirrors the profile, so the order is reversed as well to keep
    /// its orientation.
    pub fn transposed(self) -> Self {
        let mut points: Vec<DVec2> = self
            .points
            .into_iter()
            .map(|p| DVec2::new(p.y, p.x))
            .collect();
        points.reverse();
        Self { points }
    }

    /// Moves every point by `offset`.
    pub fn translated(mut self, offset: DVec2) -> Self {
        for p in &mut self.points {
            *p += offset;
        }
        self
    }

    /// Shoelace area; positive for counter-clockwise loops.
    pub fn signed_area(&self) -> f64 {
        let pts = self.unique_points();
        if pts.len() < 3 {
            return 0.0;
        }
        let mut twice = 0.0;
        for (i, a) in pts.iter().enumerate() {
            let b = pts[(i + 1) % pts.len()];
            twice += a.perp_dot(b);
        }
        0.5 * twice
    }

    /// Returns the loop oriented counter-clockwise (or clockwise).
    pub fn oriented(self, counter_clockwise: bool) -> Self {
        if (self.signed_area() > 0.0) == counter_clockwise {
            self
        } else {
            self.reversed()
        }
    }

    /// Closed, counter-clockwise square of edge `size` centered at the origin.
    pub fn square(size: f64) -> Self {
        let h = size / 2.0;
        Self::rectangle(DVec2::splat(-h), DVec2::splat(h))
    }

    /// Closed, counter-clockwise axis-aligned rectangle.
    pub fn rectangle(min: DVec2, max: DVec2) -> Self {
        Self::new(vec![
            min,
            DVec2::new(max.x, min.y),
            max,
            DVec2::new(min.x, max.y),
            min,
        ])
    }

    /// Closed, counter-clockwise regular polygon approximating a circle.
    ///
    /// The first sample sits at angle zero and is repeated as the closing point.
    pub fn circle(center: DVec2, diameter: f64, segments: u32) -> Self {
        let radius = diameter / 2.0;
        let mut points: Vec<DVec2> = (0..segments)
            .map(|i| {
                let angle = TAU * f64::from(i) / f64::from(segments);
                center + radius * DVec2::new(angle.cos(), angle.sin())
            })
            .collect();
        if let Some(&first) = points.first() {
            points.push(first);
        }
        Self { points }
    }
}

/// A closed outer loop with zero or more holes.
///
/// Holes must lie inside the outer loop and must not overlap each other.
/// That precondition is not checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon2D {
    /// Counter-clockwise boundary
    pub outer: Profile2D,
    /// Clockwise hole loops
    pub holes: Vec<Profile2D>,
}

impl Polygon2D {
    /// A polygon without holes.
    pub fn new(outer: Profile2D) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// A polygon with the given holes.
    pub fn with_holes(outer: Profile2D, holes: Vec<Profile2D>) -> Self {
        Self { outer, holes }
    }

    /// Ring between two concentric circles.
    pub fn annulus(center: DVec2, outer_diameter: f64, inner_diameter: f64, segments: u32) -> Self {
        Self::with_holes(
            Profile2D::circle(center, outer_diameter, segments),
            vec![Profile2D::circle(center, inner_diameter, segments).reversed()],
        )
    }

    /// True when at least one hole is present.
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// Outer area minus hole areas.
    pub fn area(&self) -> f64 {
        let holes: f64 = self.holes.iter().map(|h| h.signed_area().abs()).sum();
        self.outer.signed_area().abs() - holes
    }
}
