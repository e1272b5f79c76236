//! Pending Roadmap Saves
//!
//! Debounce bookkeeping for roadmap saves. Each change replaces the
//! pending snapshot and gets a ticket; only the newest ticket may take it
//! when its timer fires. `flush` takes whatever is pending right away, for
//! when the page goes away before the timer.

use crate::models::Roadmap;

/// Snapshot waiting to be written
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSave {
    pub course_id: String,
    pub roadmap: Roadmap,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaveQueue {
    generation: u64,
    pending: Option<PendingSave>,
}

impl SaveQueue {
    /// Replace the pending snapshot and return its ticket
    pub fn schedule(&mut self, course_id: impl Into<String>, roadmap: Roadmap) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(PendingSave {
            course_id: course_id.into(),
            roadmap,
        });
        self.generation
    }

    /// Take the snapshot if `ticket` is still the newest one
    pub fn take_if_current(&mut self, ticket: u64) -> Option<PendingSave> {
        if ticket != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Take the snapshot regardless of tickets. Outstanding timers find
    /// nothing afterwards.
    pub fn flush(&mut self) -> Option<PendingSave> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Position, RoadmapNode};

    fn roadmap(title: &str) -> Roadmap {
        Roadmap {
            nodes: vec![RoadmapNode {
                id: "a".into(),
                title: title.into(),
                description: String::new(),
                completed: false,
                completion_time: None,
                deadline: None,
                time_needed: 1.0,
                time_consumed: 0.0,
                children: vec![],
                position: Position { x: 0.0, y: 0.0 },
            }],
            edges: vec![],
        }
    }

    #[test]
    fn test_only_latest_ticket_saves() {
        let mut q = SaveQueue::default();
        let first = q.schedule("c1", roadmap("one"));
        let second = q.schedule("c1", roadmap("two"));

        assert_eq!(q.take_if_current(first), None);
        let saved = q.take_if_current(second).unwrap();
        assert_eq!(saved.roadmap.nodes[0].title, "two");
        assert_eq!(q.take_if_current(second), None);
    }

    #[test]
    fn test_flush_takes_pending_before_timer() {
        let mut q = SaveQueue::default();
        let ticket = q.schedule("c1", roadmap("edited"));

        let flushed = q.flush().unwrap();
        assert_eq!(flushed.course_id, "c1");
        assert_eq!(flushed.roadmap.nodes[0].title, "edited");
        assert!(!q.is_pending());

        // The timer that fires after leaving the page has nothing to write
        assert_eq!(q.take_if_current(ticket), None);
    }

    #[test]
    fn test_flush_with_nothing_pending() {
        let mut q = SaveQueue::default();
        assert_eq!(q.flush(), None);
    }

    #[test]
    fn test_queue_outlives_page_owner() {
        use leptos::prelude::*;

        let queue = ArcRwSignal::new(SaveQueue::default());
        let page = Owner::new();
        let ticket = page.with(|| {
            let queue = queue.clone();
            let nodes = RwSignal::new(roadmap("kept").nodes);
            let snapshot = Roadmap { nodes: nodes.get_untracked(), edges: vec![] };
            queue.try_update(|q| q.schedule("c1", snapshot)).unwrap()
        });
        page.cleanup();

        // Timer body after the page is gone
        let taken = queue.try_update(|q| q.take_if_current(ticket)).flatten();
        assert_eq!(taken.unwrap().roadmap.nodes[0].title, "kept");
    }
}
