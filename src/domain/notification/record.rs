// SPDX-License-Identifier: MPL-2.0
//! Notification records and the drafts producers build them from.
//!
//! A [`NotificationDraft`] is what a producer hands to the store. The store
//! stamps it with an id and creation times and turns it into a
//! [`Notification`], which is immutable except for its read flag.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant, SystemTime};

/// Default auto-hide delay for every priority except [`Priority::Urgent`].
pub const DEFAULT_HIDE_AFTER: Duration = Duration::from_millis(5000);

/// Default auto-hide delay for [`Priority::Urgent`] notifications.
pub const URGENT_HIDE_AFTER: Duration = Duration::from_millis(8000);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new process-unique notification ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a notification is about. Drives the icon shown on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
    Booking,
    Payment,
    System,
}

impl Kind {
    /// All kinds, in display order.
    pub const ALL: [Kind; 7] = [
        Kind::Success,
        Kind::Error,
        Kind::Warning,
        Kind::Info,
        Kind::Booking,
        Kind::Payment,
        Kind::System,
    ];

    /// Stable lowercase name, used for i18n keys and diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
            Kind::Booking => "booking",
            Kind::Payment => "payment",
            Kind::System => "system",
        }
    }
}

/// Urgency of a notification. Affects the default visible duration and the
/// accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

/// A monetary amount in minor units (paisa for NPR).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    minor_units: i64,
    currency: String,
}

impl Amount {
    /// Creates an amount from minor units and an ISO currency code.
    pub fn from_minor(minor_units: i64, currency: impl Into<String>) -> Self {
        Self {
            minor_units,
            currency: currency.into(),
        }
    }

    /// Creates an amount in Nepalese rupees from whole rupees, saturating
    /// at the representable range.
    #[must_use]
    pub fn npr(rupees: i64) -> Self {
        Self::from_minor(rupees.saturating_mul(100), "NPR")
    }

    #[must_use]
    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl fmt::Display for Amount {
    /// Formats as `NPR 1,500.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minor_units < 0 { "-" } else { "" };
        let abs = self.minor_units.unsigned_abs();
        let major = (abs / 100).to_string();
        let minor = abs % 100;

        let mut grouped = String::with_capacity(major.len() + major.len() / 3);
        for (i, ch) in major.chars().enumerate() {
            if i > 0 && (major.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{} {sign}{grouped}.{minor:02}", self.currency)
    }
}

/// A completion percentage, guaranteed to be within 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percent(u8);

impl Percent {
    /// Creates a percentage, clamping to 100.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the percentage as a fraction in `[0, 1]`.
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

/// Optional domain values rendered under the message when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub amount: Option<Amount>,
    pub booking_id: Option<String>,
    pub progress: Option<Percent>,
    pub image_url: Option<String>,
}

impl Metadata {
    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.booking_id.is_none()
            && self.progress.is_none()
            && self.image_url.is_none()
    }

    #[must_use]
    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    #[must_use]
    pub fn with_booking_id(mut self, booking_id: impl Into<String>) -> Self {
        self.booking_id = Some(booking_id.into());
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: Percent) -> Self {
        self.progress = Some(progress);
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// A clickable action on a notification.
///
/// The `effect` belongs to the caller; the store only carries it around and
/// hands it back when the action is invoked.
#[derive(Debug, Clone, PartialEq)]
pub struct Action<E> {
    pub label: String,
    pub effect: E,
}

impl<E> Action<E> {
    pub fn new(label: impl Into<String>, effect: E) -> Self {
        Self {
            label: label.into(),
            effect,
        }
    }
}

/// Everything a producer specifies about a notification.
#[derive(Debug, Clone)]
pub struct NotificationDraft<E> {
    pub kind: Kind,
    pub priority: Priority,
    pub title: String,
    pub message: String,
    pub category: Option<String>,
    pub metadata: Metadata,
    pub actions: Vec<Action<E>>,
    pub persistent: bool,
    pub auto_hide: bool,
    /// Auto-hide delay. When `None`, the priority default applies.
    pub hide_after: Option<Duration>,
}

impl<E> NotificationDraft<E> {
    /// Creates a draft with medium priority that auto-hides after the
    /// priority default.
    pub fn new(kind: Kind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            priority: Priority::default(),
            title: title.into(),
            message: message.into(),
            category: None,
            metadata: Metadata::default(),
            actions: Vec::new(),
            persistent: false,
            auto_hide: true,
            hide_after: None,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::Error, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::Warning, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::Info, title, message)
    }

    pub fn booking(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::Booking, title, message)
    }

    pub fn payment(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::Payment, title, message)
    }

    pub fn system(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Kind::System, title, message)
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    #[must_use]
    pub fn with_action(mut self, label: impl Into<String>, effect: E) -> Self {
        self.actions.push(Action::new(label, effect));
        self
    }

    /// Marks the notification as persistent: it is never auto-removed.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    #[must_use]
    pub fn auto_hide(mut self, enabled: bool) -> Self {
        self.auto_hide = enabled;
        self
    }

    /// Overrides the priority default auto-hide delay.
    #[must_use]
    pub fn hide_after(mut self, delay: Duration) -> Self {
        self.hide_after = Some(delay);
        self
    }
}

/// A notification held by the store.
#[derive(Debug, Clone)]
pub struct Notification<E> {
    id: NotificationId,
    kind: Kind,
    priority: Priority,
    title: String,
    message: String,
    timestamp: SystemTime,
    created_at: Instant,
    category: Option<String>,
    metadata: Metadata,
    actions: Vec<Action<E>>,
    persistent: bool,
    auto_hide: bool,
    hide_after: Duration,
    read: bool,
}

impl<E> Notification<E> {
    /// Stamps a draft with a fresh id and the given creation times.
    pub(crate) fn from_draft(
        draft: NotificationDraft<E>,
        created_at: Instant,
        timestamp: SystemTime,
        default_hide_after: impl Fn(Priority) -> Duration,
    ) -> Self {
        let hide_after = draft
            .hide_after
            .unwrap_or_else(|| default_hide_after(draft.priority));

        Self {
            id: NotificationId::new(),
            kind: draft.kind,
            priority: draft.priority,
            title: draft.title,
            message: draft.message,
            timestamp,
            created_at,
            category: draft.category,
            metadata: draft.metadata,
            actions: draft.actions,
            persistent: draft.persistent,
            auto_hide: draft.auto_hide,
            hide_after,
            read: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Wall-clock creation time.
    #[must_use]
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    /// Monotonic creation time.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    #[must_use]
    pub fn actions(&self) -> &[Action<E>] {
        &self.actions
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    #[must_use]
    pub fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    #[must_use]
    pub fn hide_after(&self) -> Duration {
        self.hide_after
    }

    /// Whether the auto-hide timer applies to this notification.
    /// Persistence overrides `auto_hide`.
    #[must_use]
    pub fn expires(&self) -> bool {
        self.auto_hide && !self.persistent
    }

    /// The instant the auto-hide timer fires, if it applies.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        self.expires().then(|| self.created_at + self.hide_after)
    }

    #[must_use]
    pub fn is_read(&self) -> bool {
        self.read
    }

    /// Age of the notification relative to `now`.
    #[must_use]
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// Marks the notification as read. There is no way back to unread.
    pub(crate) fn mark_read(&mut self) {
        self.read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::store::HideDefaults;

    fn stamp(draft: NotificationDraft<()>) -> Notification<()> {
        let defaults = HideDefaults::default();
        Notification::from_draft(draft, Instant::now(), SystemTime::now(), |priority| {
            defaults.for_priority(priority)
        })
    }

    #[test]
    fn notification_ids_are_unique() {
        let a = NotificationId::new();
        let b = NotificationId::new();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn urgent_priority_has_longer_default() {
        let urgent = stamp(NotificationDraft::error("t", "m").with_priority(Priority::Urgent));
        assert_eq!(urgent.hide_after(), URGENT_HIDE_AFTER);
        for priority in [Priority::Low, Priority::Medium, Priority::High] {
            let n = stamp(NotificationDraft::info("t", "m").with_priority(priority));
            assert_eq!(n.hide_after(), DEFAULT_HIDE_AFTER);
        }
    }

    #[test]
    fn explicit_hide_after_overrides_priority_default() {
        let n = stamp(
            NotificationDraft::info("t", "m")
                .with_priority(Priority::Urgent)
                .hide_after(Duration::from_millis(1200)),
        );
        assert_eq!(n.hide_after(), Duration::from_millis(1200));
    }

    #[test]
    fn persistent_notification_never_expires() {
        let n = stamp(NotificationDraft::info("t", "m").persistent().auto_hide(true));
        assert!(!n.expires());
        assert!(n.expires_at().is_none());
    }

    #[test]
    fn disabled_auto_hide_never_expires() {
        let n = stamp(NotificationDraft::info("t", "m").auto_hide(false));
        assert!(n.expires_at().is_none());
    }

    #[test]
    fn new_notification_is_unread() {
        let mut n = stamp(NotificationDraft::success("t", "m"));
        assert!(!n.is_read());
        n.mark_read();
        assert!(n.is_read());
    }

    #[test]
    fn draft_builder_collects_actions_in_order() {
        let draft = NotificationDraft::booking("Booking Confirmed", "Kathmandu → Pokhara")
            .with_action("View", 1)
            .with_action("Share", 2);
        let labels: Vec<_> = draft.actions.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["View", "Share"]);
        assert_eq!(draft.actions[1].effect, 2);
    }

    #[test]
    fn amount_formats_with_grouping() {
        assert_eq!(Amount::npr(1500).to_string(), "NPR 1,500.00");
        assert_eq!(Amount::npr(1_234_567).to_string(), "NPR 1,234,567.00");
        assert_eq!(Amount::from_minor(99, "NPR").to_string(), "NPR 0.99");
        assert_eq!(Amount::from_minor(-250, "USD").to_string(), "USD -2.50");
    }

    #[test]
    fn huge_rupee_amounts_saturate() {
        assert_eq!(Amount::npr(i64::MAX).minor_units(), i64::MAX);
        assert_eq!(Amount::npr(i64::MIN).minor_units(), i64::MIN);
        assert_eq!(
            Amount::npr(i64::MAX).to_string(),
            "NPR 92,233,720,368,547,758.07"
        );
        assert_eq!(
            Amount::npr(i64::MIN).to_string(),
            "NPR -92,233,720,368,547,758.08"
        );
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(Percent::new(150).value(), 100);
        assert_eq!(Percent::new(40).value(), 40);
        assert!((Percent::new(50).as_fraction() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_metadata_reports_empty() {
        assert!(Metadata::default().is_empty());
        assert!(!Metadata::default().with_booking_id("BK-1").is_empty());
    }
}
