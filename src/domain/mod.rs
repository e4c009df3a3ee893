// SPDX-License-Identifier: MPL-2.0
//! Domain layer - notification semantics with no UI dependencies.
//!
//! # Modules
//!
//! - [`notification`]: records, store, timers and projections
//!   ([`Store`](notification::Store), [`NotificationDraft`](notification::NotificationDraft))

pub mod notification;
