//! Planar Voronoi computation via Fortune's sweep-line algorithm.
//!
//! A vertical sweep line advances in +x over a schedule of site and circle
//! events. The beachline of parabolic arcs is a linked sequence over an index
//! arena; circle events are invalidated lazily and skipped when popped.
//! Edges that are still open when the schedule drains are extended to a far
//! synthetic sweep position rather than clipped to a viewport.

mod beachline;
mod geometry;
mod preprocess;
mod schedule;
mod sweep;
mod timing;

use crate::{VoronoiConfig, VoronoiError};
use beachline::HalfEdge;
use glam::DVec2;
use sweep::Sweep;
use timing::{LapTimer, TimingBuilder};

pub(crate) use preprocess::dedup_exact;
pub(crate) use sweep::SweepStats;

/// Finished sweep with edge halves joined into segments.
#[derive(Debug)]
pub(crate) struct FortuneOutput {
    pub vertices: Vec<DVec2>,
    pub segments: Vec<(DVec2, DVec2)>,
    pub bounds: (DVec2, DVec2),
    pub stats: SweepStats,
    /// Edge halves that never received an end point.
    pub unresolved_edges: usize,
}

pub(crate) fn compute_fortune(
    sites: &[DVec2],
    config: &VoronoiConfig,
) -> Result<FortuneOutput, VoronoiError> {
    let mut tb = TimingBuilder::new();
    let mut lap = LapTimer::start();

    let mut sweep = Sweep::new(sites, config.margin_fraction);
    tb.set_seed(lap.lap());

    sweep.run()?;
    tb.set_sweep(lap.lap());

    sweep.complete_edges(config.far_sweep_factor);
    tb.set_completion(lap.lap());

    let out = sweep.finish();
    let (segments, unresolved_edges) = join_edges(&out.edges);
    tb.set_assemble(lap.lap());

    tb.finish().report(sites.len());

    if unresolved_edges > 0 {
        log::warn!("{} edge halves left without an end point", unresolved_edges);
    }

    Ok(FortuneOutput {
        vertices: out.vertices,
        segments,
        bounds: (out.bbox.min, out.bbox.max),
        stats: out.stats,
        unresolved_edges,
    })
}

/// Join twin halves into single segments, in creation order of the first
/// half. Halves without an end point are dropped and counted.
fn join_edges(edges: &[HalfEdge]) -> (Vec<(DVec2, DVec2)>, usize) {
    let mut segments = Vec::with_capacity(edges.len());
    let mut unresolved = 0;

    for (i, edge) in edges.iter().enumerate() {
        match edge.twin {
            Some(t) if (t as usize) < i => {}
            Some(t) => match (edge.end, edges[t as usize].end) {
                (Some(a), Some(b)) => segments.push((a, b)),
                (Some(a), None) => {
                    segments.push((edge.start, a));
                    unresolved += 1;
                }
                (None, Some(b)) => {
                    segments.push((edge.start, b));
                    unresolved += 1;
                }
                (None, None) => unresolved += 2,
            },
            None => match edge.end {
                Some(end) => segments.push((edge.start, end)),
                None => unresolved += 1,
            },
        }
    }

    (segments, unresolved)
}
