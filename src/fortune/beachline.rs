//! Beachline: the ordered sequence of parabolic arcs under the sweep line.
//!
//! Arcs live in an append-only arena and link to their neighbors by index.
//! The sequence runs from `head` (lowest y) to `tail` (highest y). Removed
//! arcs are marked dead and never reused, so a stale circle event can still
//! name its arc safely; the event's validity flag decides whether it acts.

use super::geometry::{self, BoundingBox};
use super::schedule::{EventId, EventKind, EventSchedule};
use glam::DVec2;

pub(crate) type ArcId = u32;
pub(crate) type EdgeId = u32;

/// A Voronoi edge under construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HalfEdge {
    pub start: DVec2,
    pub end: Option<DVec2>,
    /// The opposite half traced from the same breakpoint, if any.
    pub twin: Option<EdgeId>,
}

impl HalfEdge {
    pub fn new(start: DVec2) -> Self {
        Self {
            start,
            end: None,
            twin: None,
        }
    }

    /// Set the end point. Only the first call has any effect.
    #[inline]
    pub fn complete(&mut self, end: DVec2) {
        if self.end.is_none() {
            self.end = Some(end);
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.end.is_some()
    }
}

#[derive(Debug, Clone, Copy)]
struct Arc {
    focus: DVec2,
    prev: Option<ArcId>,
    next: Option<ArcId>,
    /// Pending circle event that would remove this arc.
    event: Option<EventId>,
    /// Edge traced by the breakpoint with `prev`.
    edge1: Option<EdgeId>,
    /// Edge traced by the breakpoint with `next`.
    edge2: Option<EdgeId>,
    alive: bool,
}

impl Arc {
    fn new(focus: DVec2, prev: Option<ArcId>, next: Option<ArcId>) -> Self {
        Self {
            focus,
            prev,
            next,
            event: None,
            edge1: None,
            edge2: None,
            alive: true,
        }
    }
}

/// Outcome of re-checking an arc for a vertex event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CircleCheck {
    /// The arc lacks a neighbor on one side.
    NoTriple,
    /// Diverging, colinear, or predicted before the sweep floor.
    Rejected,
    Scheduled(EventId),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct BeachlineStats {
    pub splits: usize,
    pub tail_appends: usize,
    pub rejected_circles: usize,
    pub removals: usize,
}

#[derive(Debug, Default)]
pub(crate) struct Beachline {
    arcs: Vec<Arc>,
    head: Option<ArcId>,
    tail: Option<ArcId>,
    pub stats: BeachlineStats,
}

impl Beachline {
    /// Beachline sized for `num_sites` insertions (at most two arcs each).
    pub fn with_capacity(num_sites: usize) -> Self {
        Self {
            arcs: Vec::with_capacity(2 * num_sites),
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_alive(&self, arc: ArcId) -> bool {
        self.arcs.get(arc as usize).is_some_and(|a| a.alive)
    }

    #[inline]
    pub fn focus(&self, arc: ArcId) -> DVec2 {
        self.arcs[arc as usize].focus
    }

    #[cfg(test)]
    pub fn next(&self, arc: ArcId) -> Option<ArcId> {
        self.arcs[arc as usize].next
    }

    /// Live arcs in order, head to tail.
    pub fn iter(&self) -> impl Iterator<Item = ArcId> + '_ {
        std::iter::successors(self.head, move |&a| self.arcs[a as usize].next)
    }

    fn push_arc(&mut self, arc: Arc) -> ArcId {
        let id = self.arcs.len() as ArcId;
        self.arcs.push(arc);
        id
    }

    /// Where the parabola of a new site at `point` would hit `arc`.
    ///
    /// The sweep sits at `point.x`. Returns the hit point on `arc` if
    /// `point.y` lies between the arc's breakpoints with its neighbors. An arc
    /// whose focus shares the site's x is never hit.
    pub fn intersect(&self, point: DVec2, arc: ArcId) -> Option<DVec2> {
        let a = &self.arcs[arc as usize];
        if a.focus.x == point.x {
            return None;
        }
        let l = point.x;

        let above_lower = match a.prev {
            Some(prev) => geometry::breakpoint_y(self.focus(prev), a.focus, l) <= point.y,
            None => true,
        };
        let below_upper = match a.next {
            Some(next) => point.y <= geometry::breakpoint_y(a.focus, self.focus(next), l),
            None => true,
        };

        if above_lower && below_upper {
            let x = geometry::parabola_x(a.focus, point.y, l)?;
            Some(DVec2::new(x, point.y))
        } else {
            None
        }
    }

    /// Insert the arc for a new site.
    ///
    /// Splits the arc under the site into two copies flanking the new arc and
    /// opens twin edges at the hit point. When no arc is hit the new arc is
    /// appended at the tail, with an edge starting on the box's left side.
    pub fn insert_arc(
        &mut self,
        site: DVec2,
        schedule: &mut EventSchedule,
        edges: &mut Vec<HalfEdge>,
        bbox: &BoundingBox,
    ) {
        let Some(head) = self.head else {
            let id = self.push_arc(Arc::new(site, None, None));
            self.head = Some(id);
            self.tail = Some(id);
            return;
        };

        let mut cursor = Some(head);
        while let Some(i) = cursor {
            if let Some(z) = self.intersect(site, i) {
                self.split_arc(i, site, z, schedule, edges, bbox.min.x);
                return;
            }
            cursor = self.arcs[i as usize].next;
        }

        // Nothing hit: only possible when every candidate shares the site's x.
        let Some(last) = self.tail else {
            return;
        };
        let id = self.push_arc(Arc::new(site, Some(last), None));
        self.arcs[last as usize].next = Some(id);
        self.tail = Some(id);

        let last_focus = self.arcs[last as usize].focus;
        let start = DVec2::new(bbox.min.x, (site.y + last_focus.y) / 2.0);
        let edge = push_edge(edges, HalfEdge::new(start));
        self.arcs[last as usize].edge2 = Some(edge);
        self.arcs[id as usize].edge1 = Some(edge);
        self.stats.tail_appends += 1;
    }

    fn split_arc(
        &mut self,
        i: ArcId,
        site: DVec2,
        z: DVec2,
        schedule: &mut EventSchedule,
        edges: &mut Vec<HalfEdge>,
        floor: f64,
    ) {
        let old = self.arcs[i as usize];

        // i -> new -> copy -> old.next
        let copy = self.push_arc(Arc::new(old.focus, None, old.next));
        let new = self.push_arc(Arc::new(site, Some(i), Some(copy)));
        self.arcs[copy as usize].prev = Some(new);
        self.arcs[copy as usize].edge2 = old.edge2;
        self.arcs[i as usize].next = Some(new);
        match old.next {
            Some(n) => self.arcs[n as usize].prev = Some(copy),
            None => self.tail = Some(copy),
        }

        let lower = push_edge(edges, HalfEdge::new(z));
        let upper = push_edge(edges, HalfEdge::new(z));
        edges[lower as usize].twin = Some(upper);
        edges[upper as usize].twin = Some(lower);

        self.arcs[i as usize].edge2 = Some(lower);
        self.arcs[new as usize].edge1 = Some(lower);
        self.arcs[new as usize].edge2 = Some(upper);
        self.arcs[copy as usize].edge1 = Some(upper);
        self.stats.splits += 1;

        self.check_circle_event(new, schedule, floor);
        self.check_circle_event(i, schedule, floor);
        self.check_circle_event(copy, schedule, floor);
    }

    /// Drop any pending event on `arc` and predict a new one from its
    /// neighbors' foci. Predictions at or before `floor` are rejected.
    pub fn check_circle_event(
        &mut self,
        arc: ArcId,
        schedule: &mut EventSchedule,
        floor: f64,
    ) -> CircleCheck {
        let a = &mut self.arcs[arc as usize];
        if let Some(event) = a.event.take() {
            schedule.invalidate(event);
        }
        let (Some(prev), Some(next)) = (a.prev, a.next) else {
            return CircleCheck::NoTriple;
        };
        let focus = a.focus;

        match geometry::circle(self.focus(prev), focus, self.focus(next)) {
            Some(c) if c.x > floor => {
                let id = schedule.schedule(c.x, c.center, EventKind::Circle { arc });
                self.arcs[arc as usize].event = Some(id);
                CircleCheck::Scheduled(id)
            }
            _ => {
                self.stats.rejected_circles += 1;
                CircleCheck::Rejected
            }
        }
    }

    /// Unlink `arc`, wiring `edge` between its former neighbors and closing
    /// the two edges that bordered it at `vertex`. Returns the neighbors.
    pub fn remove_arc(
        &mut self,
        arc: ArcId,
        edge: EdgeId,
        vertex: DVec2,
        edges: &mut [HalfEdge],
    ) -> (Option<ArcId>, Option<ArcId>) {
        let a = self.arcs[arc as usize];

        match a.prev {
            Some(p) => {
                self.arcs[p as usize].next = a.next;
                self.arcs[p as usize].edge2 = Some(edge);
            }
            None => self.head = a.next,
        }
        match a.next {
            Some(n) => {
                self.arcs[n as usize].prev = a.prev;
                self.arcs[n as usize].edge1 = Some(edge);
            }
            None => self.tail = a.prev,
        }

        for e in [a.edge1, a.edge2].into_iter().flatten() {
            edges[e as usize].complete(vertex);
        }

        let dead = &mut self.arcs[arc as usize];
        dead.alive = false;
        dead.event = None;
        self.stats.removals += 1;

        (a.prev, a.next)
    }

    /// Close every still-open edge between adjacent arcs at the breakpoint
    /// for a far sweep position `far_x`. Returns how many edges were closed.
    pub fn complete_edges(&self, edges: &mut [HalfEdge], far_x: f64) -> usize {
        let mut closed = 0;
        for arc in self.iter() {
            let a = &self.arcs[arc as usize];
            let (Some(next), Some(edge)) = (a.next, a.edge2) else {
                continue;
            };
            let edge = &mut edges[edge as usize];
            if edge.is_done() {
                continue;
            }
            if let Some(p) = geometry::breakpoint(a.focus, self.focus(next), far_x) {
                edge.complete(p);
                closed += 1;
            }
        }
        closed
    }
}

#[inline]
fn push_edge(edges: &mut Vec<HalfEdge>, edge: HalfEdge) -> EdgeId {
    let id = edges.len() as EdgeId;
    edges.push(edge);
    id
}
