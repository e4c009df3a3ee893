// SPDX-License-Identifier: MPL-2.0
//! Relative timestamps ("Just now", "5m ago", ...).

use std::time::Duration;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// How long ago something happened, bucketed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    /// Less than a minute.
    JustNow,
    /// Whole minutes, less than an hour.
    Minutes(u64),
    /// Whole hours, less than a day.
    Hours(u64),
    /// Whole days.
    Days(u64),
}

impl RelativeTime {
    /// Buckets an elapsed duration. Values are truncated, never rounded up.
    #[must_use]
    pub fn from_elapsed(elapsed: Duration) -> Self {
        let secs = elapsed.as_secs();
        if secs < MINUTE {
            RelativeTime::JustNow
        } else if secs < HOUR {
            RelativeTime::Minutes(secs / MINUTE)
        } else if secs < DAY {
            RelativeTime::Hours(secs / HOUR)
        } else {
            RelativeTime::Days(secs / DAY)
        }
    }

    /// The i18n key for this bucket. Every key except `time-just-now` takes
    /// a `count` argument.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            RelativeTime::JustNow => "time-just-now",
            RelativeTime::Minutes(_) => "time-minutes-ago",
            RelativeTime::Hours(_) => "time-hours-ago",
            RelativeTime::Days(_) => "time-days-ago",
        }
    }

    /// The bucket count, if any.
    #[must_use]
    pub fn count(self) -> Option<u64> {
        match self {
            RelativeTime::JustNow => None,
            RelativeTime::Minutes(n) | RelativeTime::Hours(n) | RelativeTime::Days(n) => Some(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn under_a_minute_is_just_now() {
        assert_eq!(RelativeTime::from_elapsed(Duration::ZERO), RelativeTime::JustNow);
        assert_eq!(RelativeTime::from_elapsed(secs(59)), RelativeTime::JustNow);
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(RelativeTime::from_elapsed(secs(60)), RelativeTime::Minutes(1));
        assert_eq!(RelativeTime::from_elapsed(secs(3599)), RelativeTime::Minutes(59));
        assert_eq!(RelativeTime::from_elapsed(secs(3600)), RelativeTime::Hours(1));
        assert_eq!(RelativeTime::from_elapsed(secs(86_399)), RelativeTime::Hours(23));
        assert_eq!(RelativeTime::from_elapsed(secs(86_400)), RelativeTime::Days(1));
        assert_eq!(RelativeTime::from_elapsed(secs(10 * 86_400)), RelativeTime::Days(10));
    }

    #[test]
    fn just_now_has_no_count() {
        assert_eq!(RelativeTime::JustNow.count(), None);
        assert_eq!(RelativeTime::Hours(4).count(), Some(4));
    }
}
