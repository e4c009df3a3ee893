// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Auto-hide**: how long toasts stay before their timer removes them
//! - **Floating stack**: size and age window of the toast stack
//! - **Read tracking**: how long a card must be visible to count as read
//! - **Diagnostics**: event buffer size

use crate::domain::notification::{floating_limit_bounds, hide_delay_bounds, seconds_bounds};

// ==========================================================================
// Auto-hide Defaults
// ==========================================================================

/// Default auto-hide delay for low, medium and high priority (in ms).
pub const DEFAULT_HIDE_AFTER_MS: u64 = 5_000;

/// Default auto-hide delay for urgent priority (in ms).
pub const DEFAULT_URGENT_HIDE_AFTER_MS: u64 = 8_000;

pub const MIN_HIDE_AFTER_MS: u64 = hide_delay_bounds::MIN_MS;
pub const MAX_HIDE_AFTER_MS: u64 = hide_delay_bounds::MAX_MS;

// ==========================================================================
// Floating Stack Defaults
// ==========================================================================

/// Maximum number of toasts shown at once.
pub const DEFAULT_FLOATING_MAX_VISIBLE: usize = 3;

pub const MIN_FLOATING_MAX_VISIBLE: usize = floating_limit_bounds::MIN;
pub const MAX_FLOATING_MAX_VISIBLE: usize = floating_limit_bounds::MAX;

/// Age after which a notification leaves the floating stack (in seconds).
pub const DEFAULT_FLOATING_WINDOW_SECS: u64 = 10;

pub const MIN_FLOATING_WINDOW_SECS: u64 = seconds_bounds::FLOATING_WINDOW_MIN;
pub const MAX_FLOATING_WINDOW_SECS: u64 = seconds_bounds::FLOATING_WINDOW_MAX;

// ==========================================================================
// Read Tracking Defaults
// ==========================================================================

/// Continuous visibility needed before a card is marked read (in seconds).
pub const DEFAULT_READ_AFTER_SECS: u64 = 2;

pub const MIN_READ_AFTER_SECS: u64 = seconds_bounds::READ_AFTER_MIN;
pub const MAX_READ_AFTER_SECS: u64 = seconds_bounds::READ_AFTER_MAX;
