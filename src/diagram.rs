//! Planar Voronoi diagram storage and access.

use crate::largest_circle::{largest_circle, EmptyCircle};
use crate::Point2;
use bytemuck::{Pod, Zeroable};
use glam::DVec2;

/// A finished Voronoi edge segment.
///
/// Edges that reach the unbounded exterior end at a far synthetic point
/// rather than at a viewport boundary.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    #[inline]
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// `(x1, y1, x2, y2)`.
    #[inline]
    pub fn to_tuple(self) -> (f64, f64, f64, f64) {
        (self.start.x, self.start.y, self.end.x, self.end.y)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.start.distance(self.end)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Returns true if either endpoint lies within `eps` of `p`.
    #[inline]
    pub fn touches(self, p: Point2, eps: f64) -> bool {
        self.start.distance(p) <= eps || self.end.distance(p) <= eps
    }
}

/// A planar Voronoi diagram.
///
/// The diagram consists of:
/// - Sites (input points after duplicate removal)
/// - Vertices, in the order the sweep discovered them
/// - Edge segments
#[derive(Debug, Clone)]
pub struct PlanarVoronoi {
    /// Sites (input), in input order.
    pub sites: Vec<Point2>,

    /// Voronoi vertices in sweep discovery order.
    pub vertices: Vec<Point2>,

    /// Completed edge segments.
    pub edges: Vec<Segment>,

    /// Box the sweep worked in: site extent plus margin.
    bounds: (Point2, Point2),
}

impl PlanarVoronoi {
    /// Create a diagram from raw parts.
    pub fn from_parts(
        sites: Vec<Point2>,
        vertices: Vec<Point2>,
        edges: Vec<Segment>,
        bounds: (Point2, Point2),
    ) -> Self {
        Self {
            sites,
            vertices,
            edges,
            bounds,
        }
    }

    /// Internal constructor used by the sweep backend.
    pub(crate) fn from_raw_parts(
        sites: &[DVec2],
        vertices: Vec<DVec2>,
        segments: Vec<(DVec2, DVec2)>,
        bounds: (DVec2, DVec2),
    ) -> Self {
        Self {
            sites: sites.iter().map(|&s| Point2::from_glam(s)).collect(),
            vertices: vertices.into_iter().map(Point2::from_glam).collect(),
            edges: segments
                .into_iter()
                .map(|(a, b)| Segment::new(Point2::from_glam(a), Point2::from_glam(b)))
                .collect(),
            bounds: (Point2::from_glam(bounds.0), Point2::from_glam(bounds.1)),
        }
    }

    #[inline]
    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn site(&self, index: usize) -> Point2 {
        self.sites[index]
    }

    #[inline]
    pub fn vertex(&self, index: usize) -> Point2 {
        self.vertices[index]
    }

    #[inline]
    pub fn edge(&self, index: usize) -> Segment {
        self.edges[index]
    }

    /// Min and max corners of the working box.
    #[inline]
    pub fn bounds(&self) -> (Point2, Point2) {
        self.bounds
    }

    /// Edges as `(x1, y1, x2, y2)` tuples.
    pub fn edge_tuples(&self) -> Vec<(f64, f64, f64, f64)> {
        self.edges.iter().map(|e| e.to_tuple()).collect()
    }

    /// Vertices as `(x, y)` pairs.
    pub fn vertex_pairs(&self) -> Vec<(f64, f64)> {
        self.vertices.iter().map(|&v| v.into()).collect()
    }

    /// Largest empty circles centered at a vertex of this diagram.
    pub fn largest_circles(&self) -> Vec<EmptyCircle> {
        largest_circle(&self.sites, &self.vertices)
    }
}
