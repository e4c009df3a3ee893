// SPDX-License-Identifier: MPL-2.0
//! Drafts for the events the booking and payment flows report.
//!
//! Producers only build [`NotificationDraft`]s; handing them to the store is
//! left to the caller. Every producer is generic over the effect type, so the
//! caller decides what clicking an action button does.

use crate::domain::notification::{Amount, Kind, Metadata, NotificationDraft, Percent, Priority};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use std::fmt;
use std::path::Path;

/// Payment gateways a payment can go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gateway {
    Khalti,
    Esewa,
}

impl Gateway {
    pub const ALL: [Gateway; 2] = [Gateway::Khalti, Gateway::Esewa];

    /// Brand name as shown to customers.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Gateway::Khalti => "Khalti",
            Gateway::Esewa => "eSewa",
        }
    }
}

impl fmt::Display for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

pub const CATEGORY_BOOKING: &str = "booking";
pub const CATEGORY_PAYMENT: &str = "payment";
pub const CATEGORY_CONFIG: &str = "config";
pub const CATEGORY_EXPORT: &str = "export";

/// A booking went through.
pub fn booking_confirmed<E>(
    i18n: &I18n,
    booking_id: &str,
    route: &str,
    view_effect: E,
) -> NotificationDraft<E> {
    NotificationDraft::booking(
        i18n.tr("producer-booking-confirmed-title"),
        i18n.tr_with_args(
            "producer-booking-confirmed-message",
            &[("route", route), ("booking", booking_id)],
        ),
    )
    .with_priority(Priority::High)
    .with_category(CATEGORY_BOOKING)
    .with_metadata(Metadata::default().with_booking_id(booking_id))
    .with_action(i18n.tr("action-view-booking"), view_effect)
}

/// A payment was captured by the gateway.
pub fn payment_succeeded<E>(
    i18n: &I18n,
    gateway: Gateway,
    amount: Amount,
) -> NotificationDraft<E> {
    NotificationDraft::payment(
        i18n.tr("producer-payment-succeeded-title"),
        i18n.tr_with_args(
            "producer-payment-succeeded-message",
            &[("gateway", gateway.display_name())],
        ),
    )
    .with_priority(Priority::High)
    .with_category(CATEGORY_PAYMENT)
    .with_metadata(Metadata::default().with_amount(amount))
}

/// A payment was declined or timed out.
pub fn payment_failed<E>(
    i18n: &I18n,
    gateway: Gateway,
    reason: &str,
    retry_effect: E,
) -> NotificationDraft<E> {
    NotificationDraft::error(
        i18n.tr("producer-payment-failed-title"),
        i18n.tr_with_args(
            "producer-payment-failed-message",
            &[("gateway", gateway.display_name()), ("reason", reason)],
        ),
    )
    .with_priority(Priority::Urgent)
    .with_category(CATEGORY_PAYMENT)
    .with_action(i18n.tr("action-retry-payment"), retry_effect)
}

/// A payment is waiting on the gateway. Stays until replaced or dismissed.
pub fn payment_pending<E>(
    i18n: &I18n,
    gateway: Gateway,
    progress: Percent,
) -> NotificationDraft<E> {
    NotificationDraft::payment(
        i18n.tr("producer-payment-pending-title"),
        i18n.tr_with_args(
            "producer-payment-pending-message",
            &[("gateway", gateway.display_name())],
        ),
    )
    .with_category(CATEGORY_PAYMENT)
    .with_metadata(Metadata::default().with_progress(progress))
    .persistent()
}

/// A service announcement, e.g. planned maintenance.
pub fn system_notice<E>(
    title: impl Into<String>,
    message: impl Into<String>,
) -> NotificationDraft<E> {
    NotificationDraft::system(title, message)
        .with_priority(Priority::Low)
        .persistent()
}

/// The settings file could not be read. `key` is the i18n key returned by
/// [`crate::config::load`].
pub fn config_warning<E>(i18n: &I18n, key: &str) -> NotificationDraft<E> {
    NotificationDraft::warning(i18n.tr("producer-config-warning-title"), i18n.tr(key))
        .with_category(CATEGORY_CONFIG)
}

/// The diagnostics report was written.
pub fn export_succeeded<E>(i18n: &I18n, path: &Path) -> NotificationDraft<E> {
    let path = path.display().to_string();
    NotificationDraft::success(
        i18n.tr("producer-export-succeeded-title"),
        i18n.tr_with_args("producer-export-succeeded-message", &[("path", &path)]),
    )
    .with_category(CATEGORY_EXPORT)
}

/// The diagnostics report could not be written.
pub fn export_failed<E>(i18n: &I18n, error: &Error) -> NotificationDraft<E> {
    let detail = error.to_string();
    NotificationDraft::error(
        i18n.tr("producer-export-failed-title"),
        i18n.tr_with_args(error.i18n_key(), &[("detail", &detail)]),
    )
    .with_category(CATEGORY_EXPORT)
}

/// Whether a kind is one the payment producers emit. Used to clear stale
/// payment errors once a payment succeeds.
#[must_use]
pub fn is_payment_related(kind: Kind, category: Option<&str>) -> bool {
    matches!(kind, Kind::Payment) || category == Some(CATEGORY_PAYMENT)
}
