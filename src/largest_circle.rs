//! Largest empty circle restricted to Voronoi vertex centers.
//!
//! A non-degenerate Voronoi vertex is equidistant from the three sites that
//! generate it and farther from every other site, so its third-nearest site
//! distance is the radius of the empty circle centered there.

use crate::{Point2, Point2Like};
use glam::DVec2;

/// A circle centered at a Voronoi vertex with no site strictly inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmptyCircle {
    pub center: Point2,
    pub radius: f64,
}

impl EmptyCircle {
    /// `((x, y), radius)`.
    #[inline]
    pub fn to_tuple(self) -> ((f64, f64), f64) {
        (self.center.into(), self.radius)
    }
}

/// Find the largest empty circle(s) centered at one of `vertices`.
///
/// Every vertex whose radius equals the maximum is returned, in vertex order.
/// Empty when there are no vertices or fewer than three sites.
pub fn largest_circle<S: Point2Like, V: Point2Like>(sites: &[S], vertices: &[V]) -> Vec<EmptyCircle> {
    if sites.len() < 3 {
        return Vec::new();
    }
    let sites: Vec<DVec2> = sites.iter().map(|s| DVec2::new(s.x(), s.y())).collect();

    let mut distances = Vec::with_capacity(sites.len());
    let mut best = Vec::new();
    let mut max_radius = f64::NEG_INFINITY;

    for v in vertices {
        let center = DVec2::new(v.x(), v.y());
        let radius = third_nearest(center, &sites, &mut distances);

        if radius > max_radius {
            max_radius = radius;
            best.clear();
            best.push(EmptyCircle {
                center: Point2::from_glam(center),
                radius,
            });
        } else if radius == max_radius {
            best.push(EmptyCircle {
                center: Point2::from_glam(center),
                radius,
            });
        }
    }

    best
}

/// Distance from `center` to its third-nearest site. Requires 3+ sites.
fn third_nearest(center: DVec2, sites: &[DVec2], scratch: &mut Vec<f64>) -> f64 {
    scratch.clear();
    scratch.extend(sites.iter().map(|&s| center.distance(s)));
    let (_, third, _) = scratch.select_nth_unstable_by(2, f64::total_cmp);
    *third
}
