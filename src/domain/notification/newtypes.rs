// SPDX-License-Identifier: MPL-2.0
//! Bounded notification settings.
//!
//! Values read from `settings.toml` pass through these newtypes, so a
//! hand-edited config can never request a zero-length toast or a floating
//! stack of more than three cards.

use std::time::Duration;

/// Bounds for the auto-hide delay, in milliseconds.
pub mod hide_delay_bounds {
    pub const MIN_MS: u64 = 1_000;
    pub const MAX_MS: u64 = 60_000;
}

/// Bounds for the floating stack size.
pub mod floating_limit_bounds {
    pub const MIN: usize = 1;
    pub const MAX: usize = 3;
}

/// Bounds for the floating window and read delay, in seconds.
pub mod seconds_bounds {
    pub const FLOATING_WINDOW_MIN: u64 = 3;
    pub const FLOATING_WINDOW_MAX: u64 = 10;
    pub const READ_AFTER_MIN: u64 = 1;
    pub const READ_AFTER_MAX: u64 = 30;
    pub const READ_AFTER_DEFAULT: u64 = 2;
}

/// Auto-hide delay, clamped to 1–60 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideDelay(u64);

impl HideDelay {
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(hide_delay_bounds::MIN_MS, hide_delay_bounds::MAX_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

/// Maximum cards in the floating stack, clamped to 1–3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingLimit(usize);

impl FloatingLimit {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(floating_limit_bounds::MIN, floating_limit_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

/// How long a notification stays eligible for the floating stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingWindow(u64);

impl FloatingWindow {
    #[must_use]
    pub fn from_secs(secs: u64) -> Self {
        Self(secs.clamp(
            seconds_bounds::FLOATING_WINDOW_MIN,
            seconds_bounds::FLOATING_WINDOW_MAX,
        ))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

/// How long a card must stay on screen before it counts as read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadDelay(u64);

impl ReadDelay {
    #[must_use]
    pub fn from_secs(secs: u64) -> Self {
        Self(secs.clamp(seconds_bounds::READ_AFTER_MIN, seconds_bounds::READ_AFTER_MAX))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for ReadDelay {
    fn default() -> Self {
        Self(seconds_bounds::READ_AFTER_DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_delay_is_clamped() {
        assert_eq!(HideDelay::from_millis(0).as_millis(), hide_delay_bounds::MIN_MS);
        assert_eq!(HideDelay::from_millis(5000).as_millis(), 5000);
        assert_eq!(HideDelay::from_millis(u64::MAX).as_millis(), hide_delay_bounds::MAX_MS);
    }

    #[test]
    fn floating_limit_is_clamped() {
        assert_eq!(FloatingLimit::new(0).value(), 1);
        assert_eq!(FloatingLimit::new(3).value(), 3);
        assert_eq!(FloatingLimit::new(50).value(), floating_limit_bounds::MAX);
        assert_eq!(
            floating_limit_bounds::MAX,
            crate::domain::notification::FLOATING_MAX_VISIBLE
        );
    }

    #[test]
    fn second_based_values_are_clamped() {
        assert_eq!(FloatingWindow::from_secs(0).as_duration(), Duration::from_secs(3));
        assert_eq!(FloatingWindow::from_secs(10).as_duration(), Duration::from_secs(10));
        assert_eq!(ReadDelay::from_secs(0).as_duration(), Duration::from_secs(1));
        assert_eq!(ReadDelay::from_secs(2).as_duration(), Duration::from_secs(2));
    }
}
