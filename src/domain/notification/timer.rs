// SPDX-License-Identifier: MPL-2.0
//! Auto-hide timers.
//!
//! Each timer is a fire-once deadline keyed by notification id. The store
//! drains due timers on every tick and removes the matching records. A
//! timer that is cancelled or drained is forgotten, so it can never fire a
//! second time.

use super::record::NotificationId;
use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

/// Pending auto-hide deadlines.
#[derive(Debug, Default, Clone)]
pub struct Timers {
    /// Deadline per notification.
    deadlines: HashMap<NotificationId, Instant>,
    /// Same entries ordered by deadline, for cheap draining.
    queue: BTreeSet<(Instant, NotificationId)>,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a timer for `id`. Replaces any existing deadline.
    pub fn schedule(&mut self, id: NotificationId, deadline: Instant) {
        if let Some(previous) = self.deadlines.insert(id, deadline) {
            self.queue.remove(&(previous, id));
        }
        self.queue.insert((deadline, id));
    }

    /// Cancels the timer for `id`.
    ///
    /// Returns `true` if a timer was pending.
    pub fn cancel(&mut self, id: NotificationId) -> bool {
        match self.deadlines.remove(&id) {
            Some(deadline) => {
                self.queue.remove(&(deadline, id));
                true
            }
            None => false,
        }
    }

    /// Cancels every pending timer.
    pub fn cancel_all(&mut self) {
        self.deadlines.clear();
        self.queue.clear();
    }

    /// Removes and returns every timer whose deadline is at or before `now`,
    /// earliest first.
    pub fn drain_due(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut due = Vec::new();
        while let Some(&(deadline, id)) = self.queue.first() {
            if deadline > now {
                break;
            }
            self.queue.pop_first();
            self.deadlines.remove(&id);
            due.push(id);
        }
        due
    }

    /// The earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.first().map(|(deadline, _)| *deadline)
    }

    #[must_use]
    pub fn is_scheduled(&self, id: NotificationId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Number of pending timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}
