// SPDX-License-Identifier: MPL-2.0
//! Read-on-view tracking.
//!
//! A notification counts as read once it has been continuously visible, in
//! the floating stack or the open center, for the read delay. The tracker
//! only reports ids; marking them read is left to the caller.

use crate::domain::notification::{floating, FloatingPolicy, NotificationId, ReadDelay, Store};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Remembers when each unread notification first appeared on screen.
#[derive(Debug, Clone)]
pub struct ReadTracker {
    first_seen: HashMap<NotificationId, Instant>,
    read_after: Duration,
}

impl Default for ReadTracker {
    fn default() -> Self {
        Self::new(ReadDelay::default())
    }
}

impl ReadTracker {
    #[must_use]
    pub fn new(read_after: ReadDelay) -> Self {
        Self {
            first_seen: HashMap::new(),
            read_after: read_after.as_duration(),
        }
    }

    pub fn set_read_after(&mut self, read_after: ReadDelay) {
        self.read_after = read_after.as_duration();
    }

    /// Records the unread ids visible at `now` and returns those that have
    /// been visible for at least the read delay.
    ///
    /// Ids missing from `visible` are forgotten, so a notification that
    /// leaves the screen starts over when it comes back. Returned ids are
    /// forgotten too: they are about to be marked read.
    pub fn observe<I>(&mut self, visible: I, now: Instant) -> Vec<NotificationId>
    where
        I: IntoIterator<Item = NotificationId>,
    {
        let mut still_visible = HashMap::new();
        let mut due = Vec::new();

        for id in visible {
            if still_visible.contains_key(&id) || due.contains(&id) {
                continue;
            }
            let since = self.first_seen.get(&id).copied().unwrap_or(now);
            if now.saturating_duration_since(since) >= self.read_after {
                due.push(id);
            } else {
                still_visible.insert(id, since);
            }
        }

        self.first_seen = still_visible;
        due
    }

    /// True while some visible notification is waiting to become read.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        !self.first_seen.is_empty()
    }

    pub fn clear(&mut self) {
        self.first_seen.clear();
    }
}

/// Unread notifications currently on screen: the floating stack, plus
/// everything in the store while the center is open.
pub fn visible_unread<E>(
    store: &Store<E>,
    now: Instant,
    policy: FloatingPolicy,
    center_open: bool,
) -> Vec<NotificationId> {
    if center_open {
        return store
            .iter()
            .filter(|n| !n.is_read())
            .map(|n| n.id())
            .collect();
    }
    floating(store, now, policy)
        .into_iter()
        .filter(|n| !n.is_read())
        .map(|n| n.id())
        .collect()
}
