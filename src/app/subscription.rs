// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval of the periodic tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// What currently needs the periodic tick.
#[derive(Debug, Clone, Copy, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct TickNeeds {
    /// Auto-hide timers are scheduled.
    pub pending_timers: bool,
    /// The floating stack is not empty (countdowns, window expiry).
    pub floating_visible: bool,
    /// Visible notifications are waiting to be marked read.
    pub read_tracking: bool,
    /// The center or the diagnostics screen shows live data.
    pub live_view: bool,
}

impl TickNeeds {
    #[must_use]
    pub fn any(self) -> bool {
        self.pending_timers || self.floating_visible || self.read_tracking || self.live_view
    }
}

/// Creates the periodic tick subscription, active only while something
/// depends on the passage of time.
pub fn create_tick_subscription(needs: TickNeeds) -> Subscription<Message> {
    if needs.any() {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
