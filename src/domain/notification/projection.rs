// SPDX-License-Identifier: MPL-2.0
//! Read-only projections over the store used by the views.
//!
//! Nothing here mutates the store. The countdown fraction in particular is
//! cosmetic: removal is driven only by the store's timers.

use super::record::Notification;
use super::store::Store;
use std::time::{Duration, Instant};

/// Default number of floating notifications shown at once.
pub const FLOATING_MAX_VISIBLE: usize = 3;

/// Default age after which a notification leaves the floating stack.
pub const FLOATING_WINDOW: Duration = Duration::from_secs(10);

/// Which notifications the floating toast stack shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingPolicy {
    pub max_visible: usize,
    pub window: Duration,
}

impl Default for FloatingPolicy {
    fn default() -> Self {
        Self {
            max_visible: FLOATING_MAX_VISIBLE,
            window: FLOATING_WINDOW,
        }
    }
}

impl FloatingPolicy {
    /// Whether a notification qualifies for the floating stack at `now`.
    #[must_use]
    pub fn admits<E>(&self, notification: &Notification<E>, now: Instant) -> bool {
        !notification.is_persistent() && notification.age(now) <= self.window.min(FLOATING_WINDOW)
    }

    /// Cards shown at once, never above [`FLOATING_MAX_VISIBLE`].
    #[must_use]
    pub fn limit(&self) -> usize {
        self.max_visible.min(FLOATING_MAX_VISIBLE)
    }
}

/// Selects the floating notifications: non-persistent, recent, newest first,
/// at most `policy.limit()`.
///
/// A policy can narrow the stack but never widen it past three cards or
/// ten seconds.
pub fn floating<'a, E>(
    store: &'a Store<E>,
    now: Instant,
    policy: FloatingPolicy,
) -> Vec<&'a Notification<E>> {
    store
        .iter()
        .filter(|n| policy.admits(n, now))
        .take(policy.limit())
        .collect()
}

/// Remaining share of the auto-hide delay, from 1.0 (just created) down to
/// 0.0 (due).
///
/// Returns `None` when the notification never auto-hides.
#[must_use]
pub fn remaining_fraction<E>(notification: &Notification<E>, now: Instant) -> Option<f32> {
    if !notification.expires() {
        return None;
    }
    let total = notification.hide_after();
    if total.is_zero() {
        return Some(0.0);
    }
    let elapsed = notification.age(now).min(total);
    Some(1.0 - elapsed.as_secs_f32() / total.as_secs_f32())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::clock::{Clock, ManualClock};
    use crate::domain::notification::record::NotificationDraft;
    use std::sync::Arc;

    fn store_with_clock() -> (Store<()>, ManualClock) {
        let clock = ManualClock::new();
        (Store::with_clock(Arc::new(clock.clone())), clock)
    }

    #[test]
    fn floating_caps_at_max_visible_newest_first() {
        let (mut store, clock) = store_with_clock();
        let ids: Vec<_> = (0..5)
            .map(|i| store.add(NotificationDraft::info(format!("n{i}"), "")))
            .collect();

        let shown: Vec<_> = floating(&store, clock.now(), FloatingPolicy::default())
            .into_iter()
            .map(Notification::id)
            .collect();
        assert_eq!(shown, vec![ids[4], ids[3], ids[2]]);
    }

    #[test]
    fn floating_skips_persistent_notifications() {
        let (mut store, clock) = store_with_clock();
        let transient = store.add(NotificationDraft::info("t", ""));
        store.add(NotificationDraft::system("maintenance", "").persistent());

        let shown: Vec<_> = floating(&store, clock.now(), FloatingPolicy::default())
            .into_iter()
            .map(Notification::id)
            .collect();
        assert_eq!(shown, vec![transient]);
    }

    #[test]
    fn floating_drops_notifications_older_than_window() {
        let (mut store, clock) = store_with_clock();
        store.add(NotificationDraft::info("old", "").auto_hide(false));
        clock.advance(Duration::from_secs(11));
        let fresh = store.add(NotificationDraft::info("fresh", ""));

        let shown: Vec<_> = floating(&store, clock.now(), FloatingPolicy::default())
            .into_iter()
            .map(Notification::id)
            .collect();
        assert_eq!(shown, vec![fresh]);
    }

    #[test]
    fn wide_policy_is_capped_at_three_cards_and_ten_seconds() {
        let (mut store, clock) = store_with_clock();
        for i in 0..6 {
            store.add(NotificationDraft::info(format!("n{i}"), "").auto_hide(false));
        }
        let wide = FloatingPolicy {
            max_visible: 6,
            window: Duration::from_secs(60),
        };
        assert_eq!(floating(&store, clock.now(), wide).len(), 3);

        clock.advance(Duration::from_secs(10));
        assert_eq!(floating(&store, clock.now(), wide).len(), 3);

        clock.advance(Duration::from_millis(1));
        assert!(floating(&store, clock.now(), wide).is_empty());
    }

    #[test]
    fn remaining_fraction_counts_down() {
        let (mut store, clock) = store_with_clock();
        let id = store.add(NotificationDraft::info("t", "").hide_after(Duration::from_secs(4)));
        let start = clock.now();
        let n = store.get(id).expect("notification should exist");

        assert_eq!(remaining_fraction(n, start), Some(1.0));
        let half = remaining_fraction(n, start + Duration::from_secs(2)).expect("fraction");
        assert!((half - 0.5).abs() < 1e-6);
        assert_eq!(remaining_fraction(n, start + Duration::from_secs(9)), Some(0.0));
    }

    #[test]
    fn remaining_fraction_is_none_for_persistent() {
        let (mut store, clock) = store_with_clock();
        let id = store.add(NotificationDraft::info("t", "").persistent());
        let n = store.get(id).expect("notification should exist");
        assert_eq!(remaining_fraction(n, clock.now()), None);
    }
}
