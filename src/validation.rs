//! Geometric validation for planar Voronoi diagrams.
//!
//! Provides functions to verify the structural guarantees of a diagram.
//! Useful for debugging, testing, and catching numerical issues.

use crate::PlanarVoronoi;
use glam::DVec2;

/// Default relative tolerance for the equidistance check.
pub const DEFAULT_EQUIDISTANCE_EPS: f64 = 1e-6;

/// Detailed validation report for a planar Voronoi diagram.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Number of sites.
    pub num_sites: usize,
    /// Number of vertices in the diagram.
    pub num_vertices: usize,
    /// Number of edge segments.
    pub num_edges: usize,

    /// Upper bound on vertices: 2n - 5 for n >= 3 sites, 0 otherwise.
    pub max_vertices: usize,

    /// Vertices whose three nearest sites are not equidistant within tolerance.
    pub non_equidistant_vertices: usize,
    /// Largest relative spread between first and third nearest site distance.
    pub max_equidistance_error: f64,

    /// Segments with a NaN or infinite coordinate.
    pub non_finite_edges: usize,
    /// Segments whose endpoints coincide.
    pub zero_length_edges: usize,
}

impl ValidationReport {
    /// Check the hard guarantees: vertex bound, empty-circle vertices and
    /// finite edges. Zero-length edges are tolerated.
    pub fn is_valid(&self) -> bool {
        self.num_vertices <= self.max_vertices
            && self.non_equidistant_vertices == 0
            && self.non_finite_edges == 0
    }

    /// Strict check: valid and no zero-length edges.
    pub fn is_perfect(&self) -> bool {
        self.is_valid() && self.zero_length_edges == 0
    }

    /// Format a summary of any issues found.
    pub fn summary(&self) -> String {
        if self.is_perfect() {
            return "Perfect".to_string();
        }

        let mut issues = Vec::new();

        if self.num_vertices > self.max_vertices {
            issues.push(format!(
                "V={} (at most {})",
                self.num_vertices, self.max_vertices
            ));
        }
        if self.non_equidistant_vertices > 0 {
            issues.push(format!(
                "{} vertices not equidistant to their 3 nearest sites (max err {:.2e})",
                self.non_equidistant_vertices, self.max_equidistance_error
            ));
        }
        if self.non_finite_edges > 0 {
            issues.push(format!("{} non-finite edges", self.non_finite_edges));
        }
        if self.zero_length_edges > 0 {
            issues.push(format!("{} zero-length edges", self.zero_length_edges));
        }

        issues.join(", ")
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ValidationReport {{ n={}, V={}, E={}, {} }}",
            self.num_sites,
            self.num_vertices,
            self.num_edges,
            self.summary()
        )
    }
}

/// Validate a planar Voronoi diagram with the default tolerance.
///
/// Checks:
/// - Vertex count (V <= 2n - 5)
/// - Each vertex is equidistant from its three nearest sites
/// - All edge coordinates are finite
pub fn validate(diagram: &PlanarVoronoi) -> ValidationReport {
    validate_with_tolerance(diagram, DEFAULT_EQUIDISTANCE_EPS)
}

/// Validate with an explicit relative tolerance for the equidistance check.
pub fn validate_with_tolerance(diagram: &PlanarVoronoi, eps: f64) -> ValidationReport {
    let num_sites = diagram.num_sites();
    let max_vertices = if num_sites >= 3 { 2 * num_sites - 5 } else { 0 };

    let sites: Vec<DVec2> = diagram.sites.iter().map(|s| s.to_glam()).collect();
    let mut distances = Vec::with_capacity(sites.len());

    let mut non_equidistant_vertices = 0usize;
    let mut max_equidistance_error = 0.0f64;
    for v in &diagram.vertices {
        let v = v.to_glam();
        distances.clear();
        distances.extend(sites.iter().map(|&s| v.distance(s)));
        if distances.len() < 3 {
            non_equidistant_vertices += 1;
            continue;
        }
        let (closer, &mut third, _) = distances.select_nth_unstable_by(2, f64::total_cmp);
        let nearest = closer[0].min(closer[1]);
        let err = if third > 0.0 {
            (third - nearest) / third
        } else {
            0.0
        };
        if err.is_nan() || err > eps {
            non_equidistant_vertices += 1;
        }
        max_equidistance_error = max_equidistance_error.max(err);
    }

    let mut non_finite_edges = 0usize;
    let mut zero_length_edges = 0usize;
    for e in &diagram.edges {
        if !e.is_finite() {
            non_finite_edges += 1;
        } else if e.start == e.end {
            zero_length_edges += 1;
        }
    }

    ValidationReport {
        num_sites,
        num_vertices: diagram.num_vertices(),
        num_edges: diagram.num_edges(),
        max_vertices,
        non_equidistant_vertices,
        max_equidistance_error,
        non_finite_edges,
        zero_length_edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point2, Segment};

    fn diagram(vertices: Vec<Point2>, edges: Vec<Segment>) -> PlanarVoronoi {
        let sites = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(5.0, 10.0),
        ];
        let bounds = (Point2::new(-2.2, -2.2), Point2::new(12.2, 12.2));
        PlanarVoronoi::from_parts(sites, vertices, edges, bounds)
    }

    #[test]
    fn test_valid_triangle() {
        let v = Point2::new(5.0, 3.75);
        let d = diagram(
            vec![v],
            vec![Segment::new(v, Point2::new(5.0, -80.0))],
        );
        let report = validate(&d);
        assert!(report.is_perfect(), "{}", report);
        assert_eq!(report.max_vertices, 1);
        assert_eq!(report.summary(), "Perfect");
    }

    #[test]
    fn test_flags_misplaced_vertex() {
        let d = diagram(vec![Point2::new(5.0, 3.333)], Vec::new());
        let report = validate(&d);
        assert!(!report.is_valid());
        assert_eq!(report.non_equidistant_vertices, 1);
        assert!(report.summary().contains("not equidistant"));
    }

    #[test]
    fn test_flags_excess_vertices_and_bad_edges() {
        let v = Point2::new(5.0, 3.75);
        let d = diagram(
            vec![v, v],
            vec![
                Segment::new(v, v),
                Segment::new(v, Point2::new(f64::INFINITY, 0.0)),
            ],
        );
        let report = validate(&d);
        assert!(!report.is_valid());
        assert_eq!(report.non_finite_edges, 1);
        assert_eq!(report.zero_length_edges, 1);
        assert!(report.to_string().contains("V=2 (at most 1)"));
    }
}
