//! Geometry primitives for the sweep: bounding box, parabola breakpoints and
//! circle-event prediction.
//!
//! The sweep line is vertical and advances in +x. Each arc is the locus of
//! points equidistant from its focus and the directrix `x = l`, so parabolas
//! open toward -x.

use glam::DVec2;

/// Axis-aligned box enclosing all sites plus a margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BoundingBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl BoundingBox {
    /// Box around `sites`, always containing the origin, grown on each axis by
    /// `(span + 1) * margin_fraction`.
    pub fn around(sites: &[DVec2], margin_fraction: f64) -> Self {
        let mut min = DVec2::ZERO;
        let mut max = DVec2::ZERO;
        for &s in sites {
            min = min.min(s);
            max = max.max(s);
        }
        let margin = (max - min + DVec2::ONE) * margin_fraction;
        Self {
            min: min - margin,
            max: max + margin,
        }
    }

    /// Synthetic sweep position used to close edges that never meet a vertex.
    #[inline]
    pub fn far_sweep(&self, factor: f64) -> f64 {
        let span = self.max - self.min;
        factor * (self.max.x + span.x + span.y)
    }
}

/// Signed area test for the triple `(a, b, c)`.
///
/// Positive for counter-clockwise, negative for clockwise, zero for colinear.
#[inline]
pub(crate) fn orientation(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// y-coordinate of the breakpoint between the arc with focus `p1` (below)
/// and the arc with focus `p2` (above), for directrix `x = l`.
pub(crate) fn breakpoint_y(p1: DVec2, p2: DVec2, l: f64) -> f64 {
    if p1.x == p2.x {
        (p1.y + p2.y) / 2.0
    } else if p2.x == l {
        p2.y
    } else if p1.x == l {
        p1.y
    } else {
        let z0 = 2.0 * (p1.x - l);
        let z1 = 2.0 * (p2.x - l);

        let a = 1.0 / z0 - 1.0 / z1;
        let b = -2.0 * (p1.y / z0 - p2.y / z1);
        let c = (p1.y * p1.y + p1.x * p1.x - l * l) / z0 - (p2.y * p2.y + p2.x * p2.x - l * l) / z1;

        // Mathematically non-negative for two foci behind the directrix.
        let disc = (b * b - 4.0 * a * c).max(0.0);
        (-b - disc.sqrt()) / (2.0 * a)
    }
}

/// x-coordinate of the point at height `y` on the parabola with `focus` and
/// directrix `x = l`. `None` when the focus lies on the directrix.
#[inline]
pub(crate) fn parabola_x(focus: DVec2, y: f64, l: f64) -> Option<f64> {
    let denom = 2.0 * focus.x - 2.0 * l;
    if denom == 0.0 {
        return None;
    }
    let dy = focus.y - y;
    Some((focus.x * focus.x + dy * dy - l * l) / denom)
}

/// Breakpoint between the arcs with foci `p1` and `p2` for directrix `x = l`.
///
/// Returns `None` when the breakpoint has no finite x (both foci on the
/// directrix).
pub(crate) fn breakpoint(p1: DVec2, p2: DVec2, l: f64) -> Option<DVec2> {
    let y = breakpoint_y(p1, p2, l);
    // Evaluate on a focus that is not on the directrix.
    let focus = if p1.x == l && p1.x != p2.x { p2 } else { p1 };
    let x = parabola_x(focus, y, l)?;
    let p = DVec2::new(x, y);
    p.is_finite().then_some(p)
}

/// Predicted circle event for three consecutive arc foci.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CircleEvent {
    /// Sweep position at which the middle arc vanishes (`center.x + radius`).
    pub x: f64,
    /// Circumcenter, the Voronoi vertex to emit.
    pub center: DVec2,
}

/// Circumcircle of `(a, b, c)` if the triple converges.
///
/// Counter-clockwise (diverging) and colinear triples yield `None`.
pub(crate) fn circle(a: DVec2, b: DVec2, c: DVec2) -> Option<CircleEvent> {
    if orientation(a, b, c) > 0.0 {
        return None;
    }

    // O'Rourke, Computational Geometry in C, 2nd ed. p.189
    let ab = b - a;
    let ac = c - a;
    let e = ab.x * (a.x + b.x) + ab.y * (a.y + b.y);
    let f = ac.x * (a.x + c.x) + ac.y * (a.y + c.y);
    let g = 2.0 * (ab.x * (c.y - b.y) - ab.y * (c.x - b.x));

    if g == 0.0 {
        return None;
    }

    let center = DVec2::new((ac.y * e - ab.y * f) / g, (ab.x * f - ac.x * e) / g);
    if !center.is_finite() {
        return None;
    }
    let radius = a.distance(center);

    Some(CircleEvent {
        x: center.x + radius,
        center,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn equidistant(p: DVec2, a: DVec2, b: DVec2) -> bool {
        (p.distance(a) - p.distance(b)).abs() < 1e-6
    }

    #[test]
    fn test_bounding_box_includes_origin_and_margin() {
        let sites = [DVec2::new(5.0, 5.0), DVec2::new(10.0, 20.0)];
        let bbox = BoundingBox::around(&sites, 0.2);
        // x span 0..10 -> margin 11/5, y span 0..20 -> margin 21/5
        assert!((bbox.min.x + 2.2).abs() < EPS);
        assert!((bbox.max.x - 12.2).abs() < EPS);
        assert!((bbox.min.y + 4.2).abs() < EPS);
        assert!((bbox.max.y - 24.2).abs() < EPS);
    }

    #[test]
    fn test_far_sweep() {
        let bbox = BoundingBox {
            min: DVec2::new(-1.0, -1.0),
            max: DVec2::new(1.0, 3.0),
        };
        assert!((bbox.far_sweep(2.0) - 2.0 * (1.0 + 2.0 + 4.0)).abs() < EPS);
    }

    #[test]
    fn test_orientation_sign() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(1.0, 0.0);
        let c = DVec2::new(0.0, 1.0);
        assert!(orientation(a, b, c) > 0.0);
        assert!(orientation(a, c, b) < 0.0);
        assert_eq!(orientation(a, b, DVec2::new(2.0, 0.0)), 0.0);
    }

    #[test]
    fn test_breakpoint_same_x_is_midpoint() {
        let y = breakpoint_y(DVec2::new(0.0, 0.0), DVec2::new(0.0, 10.0), 4.0);
        assert_eq!(y, 5.0);
    }

    #[test]
    fn test_breakpoint_focus_on_directrix() {
        let p1 = DVec2::new(0.0, 0.0);
        let p2 = DVec2::new(10.0, 0.0);
        assert_eq!(breakpoint_y(p1, p2, 10.0), 0.0);
        let bp = breakpoint(p1, p2, 10.0).unwrap();
        assert!((bp.x - 5.0).abs() < EPS);
    }

    #[test]
    fn test_breakpoint_is_on_bisector() {
        let p1 = DVec2::new(0.0, 0.0);
        let p2 = DVec2::new(5.0, 10.0);
        let bp = breakpoint(p1, p2, 10.0).unwrap();
        assert!(equidistant(bp, p1, p2));
        // ...and at the same distance from the directrix.
        assert!((bp.distance(p1) - (10.0 - bp.x)).abs() < 1e-6);
        // Lower branch: below the upper focus.
        assert!(bp.y < 10.0);
    }

    #[test]
    fn test_breakpoint_far_sweep_heads_outward() {
        let p1 = DVec2::new(0.0, 0.0);
        let p2 = DVec2::new(10.0, 0.0);
        let down = breakpoint(p1, p2, 82.0).unwrap();
        let up = breakpoint(p2, p1, 82.0).unwrap();
        assert!((down.x - 5.0).abs() < 1e-6);
        assert!((up.x - 5.0).abs() < 1e-6);
        assert!(down.y < -50.0);
        assert!(up.y > 50.0);
    }

    #[test]
    fn test_breakpoint_both_foci_on_directrix() {
        let p1 = DVec2::new(3.0, 0.0);
        let p2 = DVec2::new(3.0, 4.0);
        assert!(breakpoint(p1, p2, 3.0).is_none());
    }

    #[test]
    fn test_circle_clockwise_triangle() {
        let a = DVec2::new(10.0, 0.0);
        let b = DVec2::new(0.0, 0.0);
        let c = DVec2::new(5.0, 10.0);
        let ev = circle(a, b, c).expect("clockwise triple converges");
        assert!((ev.center.x - 5.0).abs() < EPS);
        assert!((ev.center.y - 3.75).abs() < EPS);
        assert!((ev.x - 11.25).abs() < EPS);
    }

    #[test]
    fn test_circle_rejects_counter_clockwise() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(10.0, 0.0);
        let c = DVec2::new(5.0, 10.0);
        assert!(circle(a, b, c).is_none());
    }

    #[test]
    fn test_circle_rejects_colinear() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(1.0, 1.0);
        let c = DVec2::new(2.0, 2.0);
        assert!(circle(a, b, c).is_none());
        // Repeated focus (split arc around a new site).
        assert!(circle(a, DVec2::new(5.0, 10.0), a).is_none());
    }
}
