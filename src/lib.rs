//! Planar Voronoi diagrams (R2) via Fortune's sweep-line algorithm.
//!
//! This crate computes the Voronoi diagram of a finite set of points in the
//! plane, and the largest empty circle centered at one of its vertices.
//!
//! # Example
//!
//! ```
//! use r2_voronoi::{compute, Point2};
//!
//! let sites = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(5.0, 10.0),
//! ];
//!
//! let output = compute(&sites).expect("computation should succeed");
//! assert_eq!(output.diagram.num_vertices(), 1);
//! assert_eq!(output.diagram.num_edges(), 3);
//!
//! let circles = output.largest_circles();
//! assert_eq!(circles.len(), 1);
//! assert!((circles[0].radius - 6.25).abs() < 1e-9);
//! ```

mod diagram;
mod error;
mod largest_circle;
mod types;
pub mod validation;

// Internal modules
pub(crate) mod fortune;

pub use diagram::{PlanarVoronoi, Segment};
pub use error::VoronoiError;
pub use largest_circle::{largest_circle, EmptyCircle};
pub use types::{Point2, Point2Like};

use glam::DVec2;

/// Output from Voronoi computation, including diagram and diagnostics.
#[derive(Debug, Clone)]
pub struct VoronoiOutput {
    /// The computed Voronoi diagram.
    pub diagram: PlanarVoronoi,
    /// Diagnostic information about the computation.
    pub diagnostics: VoronoiDiagnostics,
}

impl VoronoiOutput {
    /// Largest empty circles centered at a vertex of the diagram.
    pub fn largest_circles(&self) -> Vec<EmptyCircle> {
        self.diagram.largest_circles()
    }
}

/// Diagnostic information from Voronoi computation.
///
/// Degenerate configurations never abort the sweep; they are counted here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoronoiDiagnostics {
    /// Sites dropped because they exactly repeat an earlier site.
    pub duplicate_sites: usize,
    /// Sites that hit no arc (every candidate shared their x) and were
    /// appended at the end of the beachline.
    pub tail_appends: usize,
    /// Neighbor triples rejected as diverging, colinear or out of range.
    pub rejected_circle_events: usize,
    /// Invalidated vertex events discarded when dequeued.
    pub stale_events: usize,
    /// Edge halves that never got an end point (omitted from the output).
    pub unresolved_edges: usize,
}

impl VoronoiDiagnostics {
    /// Returns true if no degeneracy affected the output.
    ///
    /// Rejected and stale events are part of normal operation and are not
    /// considered issues.
    pub fn is_clean(&self) -> bool {
        self.duplicate_sites == 0 && self.tail_appends == 0 && self.unresolved_edges == 0
    }
}

/// Configuration for Voronoi computation.
#[derive(Debug, Clone)]
pub struct VoronoiConfig {
    /// Fraction of each axis span (plus one) added around the sites to form
    /// the working box.
    pub margin_fraction: f64,

    /// Multiplier on the box-derived far sweep position used to close edges
    /// that extend to infinity. Larger values push their endpoints farther out.
    pub far_sweep_factor: f64,

    /// If true, drop sites that exactly repeat an earlier site before the sweep.
    ///
    /// Coincident sites have no defined breakpoint; disabling this feeds them
    /// through unchanged.
    pub dedup_sites: bool,
}

impl Default for VoronoiConfig {
    fn default() -> Self {
        Self {
            margin_fraction: 0.2,
            far_sweep_factor: 2.0,
            dedup_sites: true,
        }
    }
}

/// Compute a planar Voronoi diagram with default settings.
///
/// Returns a diagram plus diagnostics. Errors are reserved for non-finite
/// input coordinates or unrecoverable internal failures; an empty site list
/// yields an empty diagram.
pub fn compute<P: Point2Like>(points: &[P]) -> Result<VoronoiOutput, VoronoiError> {
    compute_with(points, VoronoiConfig::default())
}

/// Compute a planar Voronoi diagram with explicit configuration.
pub fn compute_with<P: Point2Like>(
    points: &[P],
    config: VoronoiConfig,
) -> Result<VoronoiOutput, VoronoiError> {
    let mut sites: Vec<DVec2> = Vec::with_capacity(points.len());
    for (index, p) in points.iter().enumerate() {
        let site = Point2::from_like(p).to_glam();
        if !site.is_finite() {
            return Err(VoronoiError::NonFiniteSite { index });
        }
        sites.push(site);
    }

    let mut diagnostics = VoronoiDiagnostics::default();
    if config.dedup_sites {
        let dedup = fortune::dedup_exact(sites);
        if dedup.num_removed > 0 {
            log::debug!("dropped {} duplicate sites", dedup.num_removed);
        }
        diagnostics.duplicate_sites = dedup.num_removed;
        sites = dedup.effective_sites;
    }

    let out = fortune::compute_fortune(&sites, &config)?;

    diagnostics.tail_appends = out.stats.tail_appends;
    diagnostics.rejected_circle_events = out.stats.rejected_circle_events;
    diagnostics.stale_events = out.stats.stale_events;
    diagnostics.unresolved_edges = out.unresolved_edges;

    let diagram = PlanarVoronoi::from_raw_parts(&sites, out.vertices, out.segments, out.bounds);

    Ok(VoronoiOutput {
        diagram,
        diagnostics,
    })
}
