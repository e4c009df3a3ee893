// SPDX-License-Identifier: MPL-2.0
//! The notification store.
//!
//! `Store` holds every notification of the running session, newest first,
//! and is the only place notifications are mutated. It owns the auto-hide
//! [`Timers`] so that every removal path also clears the matching timer.

use super::clock::{Clock, SystemClock};
use super::record::{Kind, Notification, NotificationDraft, NotificationId, Priority};
use super::record::{DEFAULT_HIDE_AFTER, URGENT_HIDE_AFTER};
use super::timer::Timers;
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Auto-hide delays applied when a draft does not set its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideDefaults {
    /// Delay for low, medium and high priority.
    pub standard: Duration,
    /// Delay for urgent priority.
    pub urgent: Duration,
}

impl HideDefaults {
    #[must_use]
    pub fn for_priority(&self, priority: Priority) -> Duration {
        match priority {
            Priority::Urgent => self.urgent,
            Priority::Low | Priority::Medium | Priority::High => self.standard,
        }
    }
}

impl Default for HideDefaults {
    fn default() -> Self {
        Self {
            standard: DEFAULT_HIDE_AFTER,
            urgent: URGENT_HIDE_AFTER,
        }
    }
}

/// In-memory notification store for one application session.
pub struct Store<E> {
    /// Notifications, newest first.
    records: VecDeque<Notification<E>>,
    timers: Timers,
    clock: Arc<dyn Clock>,
    hide_defaults: HideDefaults,
    /// Optional diagnostics handle for logging warnings/errors.
    diagnostics: Option<DiagnosticsHandle>,
}

impl<E> fmt::Debug for Store<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("len", &self.records.len())
            .field("unread", &self.unread_count())
            .field("pending_timers", &self.timers.pending())
            .finish()
    }
}

impl<E> Default for Store<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Store<E> {
    /// Creates an empty store driven by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store driven by the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: VecDeque::new(),
            timers: Timers::new(),
            clock,
            hide_defaults: HideDefaults::default(),
            diagnostics: None,
        }
    }

    /// Sets the delays used for drafts without an explicit `hide_after`.
    ///
    /// Only affects notifications added afterwards.
    pub fn set_hide_defaults(&mut self, defaults: HideDefaults) {
        self.hide_defaults = defaults;
    }

    #[must_use]
    pub fn hide_defaults(&self) -> HideDefaults {
        self.hide_defaults
    }

    /// Sets the diagnostics handle for logging warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// The clock the store reads time from.
    #[must_use]
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Adds a notification at the head of the store and returns its id.
    ///
    /// Applies the priority default when the draft has no `hide_after`, and
    /// schedules the auto-hide timer unless the notification is persistent
    /// or has auto-hide disabled.
    pub fn add(&mut self, draft: NotificationDraft<E>) -> NotificationId {
        let defaults = self.hide_defaults;
        let notification = Notification::from_draft(
            draft,
            self.clock.now(),
            self.clock.wall(),
            |priority| defaults.for_priority(priority),
        );
        let id = notification.id();

        self.log_to_diagnostics(&notification);

        if let Some(deadline) = notification.expires_at() {
            self.timers.schedule(id, deadline);
        }
        self.records.push_front(notification);
        id
    }

    /// Removes a notification and clears its timer.
    ///
    /// Returns `true` if the notification was present. Removing an unknown
    /// id is a no-op.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        self.timers.cancel(id);
        match self.position(id) {
            Some(pos) => {
                self.records.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Marks a notification as read. No-op for an unknown id.
    pub fn mark_read(&mut self, id: NotificationId) {
        if let Some(notification) = self.records.iter_mut().find(|n| n.id() == id) {
            notification.mark_read();
        }
    }

    /// Alias of [`Store::mark_read`].
    pub fn mark_as_read(&mut self, id: NotificationId) {
        self.mark_read(id);
    }

    /// Marks every notification as read.
    pub fn mark_all_read(&mut self) {
        for notification in &mut self.records {
            notification.mark_read();
        }
    }

    /// Removes every notification and cancels every timer.
    pub fn clear_all(&mut self) {
        self.records.clear();
        self.timers.cancel_all();
    }

    /// Removes every notification of the given kind.
    ///
    /// Useful when a condition resolves, e.g. clearing stale payment errors
    /// once a payment finally succeeds.
    pub fn clear_kind(&mut self, kind: Kind) -> usize {
        let before = self.records.len();
        let timers = &mut self.timers;
        self.records.retain(|n| {
            if n.kind() == kind {
                timers.cancel(n.id());
                false
            } else {
                true
            }
        });
        before - self.records.len()
    }

    /// Fires every auto-hide timer that is due at the clock's current time.
    ///
    /// Returns the ids of the notifications that were removed.
    pub fn tick(&mut self) -> Vec<NotificationId> {
        let now = self.clock.now();
        let due = self.timers.drain_due(now);
        for id in &due {
            if let Some(pos) = self.position(*id) {
                self.records.remove(pos);
            }
        }
        due
    }

    /// Number of unread notifications.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.records.iter().filter(|n| !n.is_read()).count()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification<E>> {
        self.records.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    /// Notifications, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification<E>> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether an auto-hide timer is still pending.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Whether an auto-hide timer is pending for `id`.
    #[must_use]
    pub fn is_scheduled(&self, id: NotificationId) -> bool {
        self.timers.is_scheduled(id)
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.records.iter().position(|n| n.id() == id)
    }

    fn log_to_diagnostics(&self, notification: &Notification<E>) {
        let Some(handle) = &self.diagnostics else {
            return;
        };
        let text = format!("{}: {}", notification.title(), notification.message());
        match notification.kind() {
            Kind::Warning => {
                let warning_type = WarningType::from_category(notification.category());
                handle.log_warning(WarningEvent::new(warning_type, text));
            }
            Kind::Error => {
                let error_type = ErrorType::from_category(notification.category());
                handle.log_error(ErrorEvent::new(error_type, text));
            }
            // Other kinds are not diagnostic events
            Kind::Success | Kind::Info | Kind::Booking | Kind::Payment | Kind::System => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::domain::notification::clock::ManualClock;

    fn store_with_clock() -> (Store<()>, ManualClock) {
        let clock = ManualClock::new();
        (Store::with_clock(Arc::new(clock.clone())), clock)
    }

    #[test]
    fn new_store_is_empty() {
        let store: Store<()> = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.unread_count(), 0);
        assert!(!store.has_pending_timers());
    }

    #[test]
    fn add_prepends() {
        let (mut store, _clock) = store_with_clock();
        let first = store.add(NotificationDraft::info("first", ""));
        let second = store.add(NotificationDraft::info("second", ""));

        let order: Vec<_> = store.iter().map(Notification::id).collect();
        assert_eq!(order, vec![second, first]);
    }

    #[test]
    fn add_schedules_timer_only_when_notification_expires() {
        let (mut store, _clock) = store_with_clock();
        let hiding = store.add(NotificationDraft::info("a", ""));
        let sticky = store.add(NotificationDraft::info("b", "").persistent());
        let manual = store.add(NotificationDraft::info("c", "").auto_hide(false));

        assert!(store.is_scheduled(hiding));
        assert!(!store.is_scheduled(sticky));
        assert!(!store.is_scheduled(manual));
    }

    #[test]
    fn remove_cancels_timer() {
        let (mut store, clock) = store_with_clock();
        let id = store.add(NotificationDraft::success("saved", ""));

        assert!(store.remove(id));
        assert!(!store.is_scheduled(id));

        clock.advance(Duration::from_secs(10));
        assert!(store.tick().is_empty());
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let (mut store, _clock) = store_with_clock();
        store.add(NotificationDraft::info("keep", ""));
        assert!(!store.remove(NotificationId::new()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn mark_read_unknown_id_is_noop() {
        let (mut store, _clock) = store_with_clock();
        store.add(NotificationDraft::info("keep", ""));
        store.mark_read(NotificationId::new());
        assert_eq!(store.unread_count(), 1);
    }

    #[test]
    fn tick_removes_expired_notifications_once() {
        let (mut store, clock) = store_with_clock();
        let id = store.add(NotificationDraft::info("bye", ""));

        clock.advance(Duration::from_millis(4999));
        assert!(store.tick().is_empty());
        assert!(store.contains(id));

        clock.advance(Duration::from_millis(1));
        assert_eq!(store.tick(), vec![id]);
        assert!(!store.contains(id));

        clock.advance(Duration::from_secs(30));
        assert!(store.tick().is_empty());
    }

    #[test]
    fn read_flag_survives_mark_all_read_twice() {
        let (mut store, _clock) = store_with_clock();
        let id = store.add(NotificationDraft::info("a", ""));
        store.mark_read(id);
        store.mark_all_read();
        store.mark_all_read();
        assert!(store.get(id).is_some_and(Notification::is_read));
    }

    #[test]
    fn clear_all_cancels_timers() {
        let (mut store, _clock) = store_with_clock();
        for i in 0..5 {
            store.add(NotificationDraft::info(format!("n{i}"), ""));
        }
        store.clear_all();
        assert!(store.is_empty());
        assert!(!store.has_pending_timers());
    }

    #[test]
    fn clear_kind_removes_only_that_kind() {
        let (mut store, _clock) = store_with_clock();
        let kept = store.add(NotificationDraft::success("ok", ""));
        let dropped = store.add(NotificationDraft::error("failed", ""));
        store.add(NotificationDraft::error("failed again", "").persistent());

        assert_eq!(store.clear_kind(Kind::Error), 2);
        assert!(store.contains(kept));
        assert!(!store.is_scheduled(dropped));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn hide_defaults_apply_to_new_notifications() {
        let (mut store, clock) = store_with_clock();
        store.set_hide_defaults(HideDefaults {
            standard: Duration::from_secs(1),
            urgent: Duration::from_secs(2),
        });
        let id = store.add(NotificationDraft::info("quick", ""));

        clock.advance(Duration::from_secs(1));
        assert_eq!(store.tick(), vec![id]);
    }

    #[test]
    fn errors_and_warnings_are_logged_to_diagnostics() {
        let mut collector = DiagnosticsCollector::default();
        let (mut store, _clock) = store_with_clock();
        store.set_diagnostics(collector.handle());

        store.add(
            NotificationDraft::error("Payment Failed", "gateway timeout").with_category("payment"),
        );
        store.add(NotificationDraft::warning("Low balance", ""));
        store.add(NotificationDraft::success("Booked", ""));

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }
}
