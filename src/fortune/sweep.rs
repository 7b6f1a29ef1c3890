//! Sweep controller: drains the event schedule, mutates the beachline and
//! collects the vertex and edge lists.

use super::beachline::{Beachline, CircleCheck, EdgeId, HalfEdge};
use super::geometry::BoundingBox;
use super::schedule::{Event, EventId, EventKind, EventSchedule};
use crate::VoronoiError;
use glam::DVec2;

/// Event and degeneracy counters for one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SweepStats {
    pub site_events: usize,
    pub circle_events: usize,
    /// Invalidated circle events discarded when popped.
    pub stale_events: usize,
    /// Neighbor triples that did not yield a vertex prediction.
    pub rejected_circle_events: usize,
    /// Sites that hit no arc and were appended at the tail.
    pub tail_appends: usize,
    /// Edges closed by the end-of-sweep completion pass.
    pub edges_closed_at_end: usize,
}

/// Raw output of a sweep, before edge halves are joined.
#[derive(Debug)]
pub(crate) struct SweepOutput {
    /// Vertices in discovery order.
    pub vertices: Vec<DVec2>,
    pub edges: Vec<HalfEdge>,
    pub bbox: BoundingBox,
    pub stats: SweepStats,
}

pub(crate) struct Sweep {
    schedule: EventSchedule,
    beachline: Beachline,
    edges: Vec<HalfEdge>,
    vertices: Vec<DVec2>,
    bbox: BoundingBox,
    stats: SweepStats,
    /// Sweep position of the last event acted on.
    last_x: f64,
}

impl Sweep {
    /// Seed the schedule with one site event per site, in input order.
    pub fn new(sites: &[DVec2], margin_fraction: f64) -> Self {
        let bbox = BoundingBox::around(sites, margin_fraction);
        let mut schedule = EventSchedule::with_capacity(3 * sites.len());
        for &site in sites {
            schedule.schedule(site.x, site, EventKind::Site);
        }

        log::debug!(
            "sweep: {} sites, bbox ({:.3}, {:.3})..({:.3}, {:.3})",
            sites.len(),
            bbox.min.x,
            bbox.min.y,
            bbox.max.x,
            bbox.max.y
        );

        Self {
            schedule,
            beachline: Beachline::with_capacity(sites.len()),
            edges: Vec::with_capacity(3 * sites.len()),
            vertices: Vec::with_capacity(2 * sites.len()),
            bbox,
            stats: SweepStats::default(),
            last_x: f64::NEG_INFINITY,
        }
    }

    /// Process events until the schedule is empty.
    pub fn run(&mut self) -> Result<(), VoronoiError> {
        while let Some((id, event)) = self.schedule.pop() {
            match event.kind {
                EventKind::Site => self.handle_site(event.point),
                EventKind::Circle { .. } => self.handle_circle(id, event)?,
            }
        }
        Ok(())
    }

    fn handle_site(&mut self, point: DVec2) {
        log::trace!("site event at ({}, {})", point.x, point.y);
        self.stats.site_events += 1;
        self.last_x = point.x;
        self.beachline
            .insert_arc(point, &mut self.schedule, &mut self.edges, &self.bbox);
    }

    fn handle_circle(&mut self, id: EventId, event: Event) -> Result<(), VoronoiError> {
        let EventKind::Circle { arc } = event.kind else {
            return Ok(());
        };
        if !event.valid {
            self.stats.stale_events += 1;
            return Ok(());
        }
        if !self.beachline.is_alive(arc) {
            return Err(VoronoiError::ComputationFailed(format!(
                "valid event {} refers to removed arc {}",
                id, arc
            )));
        }

        let vertex = event.point;
        log::trace!("vertex at ({}, {}), sweep x={}", vertex.x, vertex.y, event.x);
        self.stats.circle_events += 1;
        self.last_x = event.x;

        let edge = self.edges.len() as EdgeId;
        self.edges.push(HalfEdge::new(vertex));
        self.vertices.push(vertex);

        let (prev, next) = self
            .beachline
            .remove_arc(arc, edge, vertex, &mut self.edges);

        let floor = self.bbox.min.x;
        for neighbor in [prev, next].into_iter().flatten() {
            let check = self
                .beachline
                .check_circle_event(neighbor, &mut self.schedule, floor);
            if let CircleCheck::Scheduled(next_event) = check {
                log::trace!("arc {} rescheduled as event {}", neighbor, next_event);
            }
        }
        Ok(())
    }

    /// Close edges still open after the last event, extending them to the
    /// breakpoint at a synthetic far sweep position.
    ///
    /// The position never falls behind the last event: a breakpoint evaluated
    /// there would lie on the wrong side of its vertex.
    pub fn complete_edges(&mut self, far_sweep_factor: f64) {
        let far_x = self.completion_x(far_sweep_factor);
        self.stats.edges_closed_at_end = self.beachline.complete_edges(&mut self.edges, far_x);
    }

    fn completion_x(&self, far_sweep_factor: f64) -> f64 {
        let far_x = self.bbox.far_sweep(far_sweep_factor);
        let span = self.bbox.max - self.bbox.min;
        let past_last = self.last_x + span.x + span.y;
        if past_last > far_x {
            log::debug!(
                "last event at x={} is past the far sweep {}, completing at {}",
                self.last_x,
                far_x,
                past_last
            );
            past_last
        } else {
            far_x
        }
    }

    pub fn finish(self) -> SweepOutput {
        let mut stats = self.stats;
        stats.rejected_circle_events = self.beachline.stats.rejected_circles;
        stats.tail_appends = self.beachline.stats.tail_appends;

        let arcs = self.beachline.stats;
        log::debug!(
            "sweep done: {} site + {} vertex events of {} scheduled ({} stale, {} rejected)",
            stats.site_events,
            stats.circle_events,
            self.schedule.total_scheduled(),
            stats.stale_events,
            stats.rejected_circle_events
        );
        log::debug!(
            "  {} vertices, {} edges ({} closed at far sweep), {} splits, {} arcs removed",
            self.vertices.len(),
            self.edges.len(),
            stats.edges_closed_at_end,
            arcs.splits,
            arcs.removals
        );

        SweepOutput {
            vertices: self.vertices,
            edges: self.edges,
            bbox: self.bbox,
            stats,
        }
    }
}
