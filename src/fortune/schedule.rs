//! Event schedule: a min-priority queue over sweep positions with lazy
//! invalidation.
//!
//! Events live in an append-only arena and the heap only stores keys. Equal
//! sweep positions order site events before circle events, then by ascending
//! y, then by id. Ids grow monotonically, so the last tie-break is insertion
//! order. Invalidated events stay in the heap and are discarded when popped.
//!
//! Sites sharing an x therefore reach the beachline bottom to top whatever
//! their input order, which keeps tail appends in y order.

use super::beachline::ArcId;
use glam::DVec2;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

pub(crate) type EventId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EventKind {
    Site,
    /// Vertex candidate that removes `arc` when it fires.
    Circle { arc: ArcId },
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Event {
    /// Sweep position at which the event fires.
    pub x: f64,
    /// Site location, or predicted circumcenter for circle events.
    pub point: DVec2,
    pub kind: EventKind,
    pub valid: bool,
}

#[derive(Debug, Clone, Copy)]
struct Key {
    x: f64,
    circle: bool,
    y: f64,
    id: EventId,
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    // Reversed: BinaryHeap is a max-heap and we pop the smallest key.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .x
            .total_cmp(&self.x)
            .then_with(|| other.circle.cmp(&self.circle))
            .then_with(|| other.y.total_cmp(&self.y))
            .then_with(|| other.id.cmp(&self.id))
    }
}

#[derive(Debug, Default)]
pub(crate) struct EventSchedule {
    events: Vec<Event>,
    heap: BinaryHeap<Key>,
}

impl EventSchedule {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            events: Vec::with_capacity(n),
            heap: BinaryHeap::with_capacity(n),
        }
    }

    /// Insert an event keyed by `x`. Returns its id.
    pub fn schedule(&mut self, x: f64, point: DVec2, kind: EventKind) -> EventId {
        let id = self.events.len() as EventId;
        self.events.push(Event {
            x,
            point,
            kind,
            valid: true,
        });
        self.heap.push(Key {
            x,
            circle: matches!(kind, EventKind::Circle { .. }),
            y: point.y,
            id,
        });
        id
    }

    /// Remove and return the minimum-key event, whether or not it is still valid.
    pub fn pop(&mut self) -> Option<(EventId, Event)> {
        let key = self.heap.pop()?;
        Some((key.id, self.events[key.id as usize]))
    }

    /// Mark a scheduled event as void. It stays queued and is skipped on pop.
    #[inline]
    pub fn invalidate(&mut self, id: EventId) {
        self.events[id as usize].valid = false;
    }

    #[cfg(test)]
    pub fn is_valid(&self, id: EventId) -> bool {
        self.events[id as usize].valid
    }

    /// Number of events still queued (valid or not).
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of events ever scheduled.
    #[inline]
    pub fn total_scheduled(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(schedule: &mut EventSchedule, x: f64, y: f64) -> EventId {
        schedule.schedule(x, DVec2::new(x, y), EventKind::Site)
    }

    #[test]
    fn test_pops_in_ascending_x() {
        let mut schedule = EventSchedule::default();
        site(&mut schedule, 3.0, 0.0);
        site(&mut schedule, -1.0, 0.0);
        site(&mut schedule, 2.0, 0.0);

        let xs: Vec<f64> = std::iter::from_fn(|| schedule.pop().map(|(_, e)| e.x)).collect();
        assert_eq!(xs, vec![-1.0, 2.0, 3.0]);
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_equal_x_sites_pop_bottom_to_top() {
        let mut schedule = EventSchedule::default();
        let top = site(&mut schedule, 0.0, 20.0);
        let mid = site(&mut schedule, 0.0, 10.0);
        let low = site(&mut schedule, 0.0, 0.0);

        let ids: Vec<EventId> = std::iter::from_fn(|| schedule.pop().map(|(id, _)| id)).collect();
        assert_eq!(ids, vec![low, mid, top]);
    }

    #[test]
    fn test_sites_precede_circles_at_equal_x() {
        let mut schedule = EventSchedule::default();
        let circle = schedule.schedule(1.0, DVec2::new(0.0, -50.0), EventKind::Circle { arc: 0 });
        let upper = site(&mut schedule, 1.0, 5.0);
        let lower = site(&mut schedule, 1.0, -5.0);

        let ids: Vec<EventId> = std::iter::from_fn(|| schedule.pop().map(|(id, _)| id)).collect();
        assert_eq!(ids, vec![lower, upper, circle]);
    }

    #[test]
    fn test_full_ties_break_by_insertion_order() {
        let mut schedule = EventSchedule::default();
        let center = DVec2::new(5.0, 5.0);
        let first = schedule.schedule(12.0, center, EventKind::Circle { arc: 3 });
        let second = schedule.schedule(12.0, center, EventKind::Circle { arc: 1 });

        let ids: Vec<EventId> = std::iter::from_fn(|| schedule.pop().map(|(id, _)| id)).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_invalidated_event_is_still_popped() {
        let mut schedule = EventSchedule::default();
        let id = schedule.schedule(4.0, DVec2::ZERO, EventKind::Circle { arc: 7 });
        schedule.invalidate(id);
        assert!(!schedule.is_valid(id));
        assert_eq!(schedule.len(), 1);

        let (popped, event) = schedule.pop().unwrap();
        assert_eq!(popped, id);
        assert!(!event.valid);
        assert_eq!(event.kind, EventKind::Circle { arc: 7 });
        assert_eq!(schedule.total_scheduled(), 1);
    }
}
