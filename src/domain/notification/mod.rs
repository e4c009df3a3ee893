// SPDX-License-Identifier: MPL-2.0
//! Notification records, the session store and its auto-hide timers.
//!
//! # Components
//!
//! - [`record`] - `Notification`, `NotificationDraft` and their value types
//! - [`clock`] - `Clock` trait with system and virtual implementations
//! - [`timer`] - fire-once auto-hide deadlines
//! - [`store`] - the store, the only mutation surface
//! - [`projection`] - floating-stack selection and countdown fraction
//! - [`relative_time`] - "Just now" / "5m ago" buckets
//! - [`newtypes`] - bounded values for configurable delays and limits

pub mod clock;
pub mod newtypes;
pub mod projection;
pub mod record;
pub mod relative_time;
pub mod store;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use newtypes::{
    floating_limit_bounds, hide_delay_bounds, seconds_bounds, FloatingLimit, FloatingWindow,
    HideDelay, ReadDelay,
};
pub use projection::{
    floating, remaining_fraction, FloatingPolicy, FLOATING_MAX_VISIBLE, FLOATING_WINDOW,
};
pub use record::{
    Action, Amount, Kind, Metadata, Notification, NotificationDraft, NotificationId, Percent,
    Priority, DEFAULT_HIDE_AFTER, URGENT_HIDE_AFTER,
};
pub use relative_time::RelativeTime;
pub use store::{HideDefaults, Store};
pub use timer::Timers;
