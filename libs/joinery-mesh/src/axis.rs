//! Principal axes and the plane-to-space embedding used by rings and sweeps.

use glam::{DVec2, DVec3};

/// One of the three principal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Plane coordinates map to `(y, z)`.
    X,
    /// Plane coordinates map to `(z, x)`.
    Y,
    /// Plane coordinates map to `(x, y)`.
    Z,
}

impl Axis {
    /// All axes in order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Maps plane coordinates `(u, v)` and a position `along` the axis to 3D.
    ///
    /// The mapping is a cyclic permutation, so `u × v` always points along the
    /// axis and a counter-clockwise profile stays counter-clockwise seen from
    /// the positive end.
    #[inline]
    pub fn embed(self, uv: DVec2, along: f64) -> DVec3 {
        match self {
            Axis::X => DVec3::new(along, uv.x, uv.y),
            Axis::Y => DVec3::new(uv.y, along, uv.x),
            Axis::Z => DVec3::new(uv.x, uv.y, along),
        }
    }

    /// Inverse of [`Axis::embed`]: returns `(u, v)` and the position along the axis.
    #[inline]
    pub fn project(self, point: DVec3) -> (DVec2, f64) {
        match self {
            Axis::X => (DVec2::new(point.y, point.z), point.x),
            Axis::Y => (DVec2::new(point.z, point.x), point.y),
            Axis::Z => (DVec2::new(point.x, point.y), point.z),
        }
    }

    /// Unit vector along the axis.
    #[inline]
    pub fn unit(self) -> DVec3 {
        self.embed(DVec2::ZERO, 1.0)
    }

    /// Component of `point` along the axis.
    #[inline]
    pub fn component(self, point: DVec3) -> f64 {
        self.project(point).1
    }

    /// Reflects `point` through the plane perpendicular to the axis.
    pub fn mirror(self, point: DVec3) -> DVec3 {
        let (uv, along) = self.project(point);
        self.embed(uv, -along)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_is_right_handed() {
        for axis in Axis::ALL {
            let u = axis.embed(DVec2::X, 0.0);
            let v = axis.embed(DVec2::Y, 0.0);
            assert_eq!(u.cross(v), axis.unit(), "{axis:?}");
        }
    }

    #[test]
    fn test_project_inverts_embed() {
        let uv = DVec2::new(1.5, -2.0);
        for axis in Axis::ALL {
            let p = axis.embed(uv, 7.0);
            assert_eq!(axis.project(p), (uv, 7.0));
            assert_eq!(axis.component(p), 7.0);
        }
    }

    #[test]
    fn test_mirror_flips_only_axis_component() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(Axis::X.mirror(p), DVec3::new(-1.0, 2.0, 3.0));
        assert_eq!(Axis::Y.mirror(p), DVec3::new(1.0, -2.0, 3.0));
        assert_eq!(Axis::Z.mirror(p), DVec3::new(1.0, 2.0, -3.0));
    }
}
