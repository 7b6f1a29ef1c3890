//! Core types for planar Voronoi computation.

use bytemuck::{Pod, Zeroable};
use glam::DVec2;

/// A point in the plane.
///
/// This type provides a small `#[repr(C)]` representation with a stable layout,
/// so slices of sites and vertices can be handed to renderers without copying.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create from any type implementing `Point2Like`.
    #[inline]
    pub fn from_like<P: Point2Like>(p: &P) -> Self {
        Self::new(p.x(), p.y())
    }

    #[inline]
    pub fn to_glam(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn from_glam(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        self.to_glam().distance(other.to_glam())
    }

    /// Returns true if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2> for (f64, f64) {
    #[inline]
    fn from(p: Point2) -> Self {
        (p.x, p.y)
    }
}

impl From<DVec2> for Point2 {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self::from_glam(v)
    }
}

impl From<Point2> for DVec2 {
    #[inline]
    fn from(p: Point2) -> DVec2 {
        p.to_glam()
    }
}

/// Trait for types that can be used as input sites.
///
/// This allows zero-copy input from tuples, arrays, and math library vectors.
pub trait Point2Like {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Point2Like for Point2 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl Point2Like for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl Point2Like for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Point2Like for DVec2 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point2_basics() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert!(b.is_finite());
        assert!(!Point2::new(f64::NAN, 0.0).is_finite());
    }

    #[test]
    fn test_from_array_and_tuple() {
        let p: Point2 = [1.0, 2.0].into();
        assert_eq!(p.y, 2.0);
        let q: Point2 = (1.0, 2.0).into();
        assert_eq!(p, q);
        let t: (f64, f64) = q.into();
        assert_eq!(t, (1.0, 2.0));
    }

    #[test]
    fn test_point2_like_trait() {
        fn accepts_like<P: Point2Like>(p: &P) -> f64 {
            p.x() + p.y()
        }

        let pt = Point2::new(1.0, 2.0);
        let arr = [1.0f64, 2.0];
        let tuple = (1.0f64, 2.0f64);
        let glam_v = DVec2::new(1.0, 2.0);

        assert_eq!(accepts_like(&pt), 3.0);
        assert_eq!(accepts_like(&arr), 3.0);
        assert_eq!(accepts_like(&tuple), 3.0);
        assert_eq!(accepts_like(&glam_v), 3.0);
    }

    #[test]
    fn test_from_like() {
        assert_eq!(Point2::from_like(&[1.5, -2.0]), Point2::new(1.5, -2.0));
        assert_eq!(Point2::from_like(&DVec2::new(3.0, 4.0)), Point2::new(3.0, 4.0));
    }

    #[test]
    fn test_pod_layout() {
        let pts = [Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)];
        let flat: &[f64] = bytemuck::cast_slice(&pts);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0]);
    }
}
