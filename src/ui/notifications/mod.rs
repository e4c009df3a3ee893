// SPDX-License-Identifier: MPL-2.0
//! Notification views: cards, the notification center and the floating
//! toast stack.
//!
//! Views never mutate the store. Every interaction is reported as a
//! [`Message`] and applied by the application's `update`.
//!
//! # Components
//!
//! - [`card`] - Rendering of a single notification
//! - [`center`] - Bell with unread badge and the drop-down panel
//! - [`floating`] - Bottom-right overlay of recent notifications
//! - [`visibility`] - Marks notifications read once they have been on screen
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{card::CardContext, floating};
//!
//! let ctx = CardContext::new(&i18n, &theme.colors, store.clock().now());
//! let overlay = floating::view(visible, &ctx).map(Message::Notification);
//! ```

pub mod card;
pub mod center;
pub mod floating;
pub mod visibility;

use crate::domain::notification::NotificationId;

pub use card::CardContext;
pub use visibility::ReadTracker;

/// Interactions emitted by the notification views.
///
/// `E` is the caller's action effect, handed back untouched on `Invoke`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message<E> {
    /// The close button of a card was pressed.
    Dismiss(NotificationId),
    /// An action button of a card was pressed.
    Invoke(NotificationId, E),
    /// An unread card was clicked.
    MarkRead(NotificationId),
    ToggleCenter,
    CloseCenter,
    MarkAllRead,
    ClearAll,
}
