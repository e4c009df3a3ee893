// SPDX-License-Identifier: MPL-2.0
//! Application layer - the code that turns business events into notifications.
//!
//! - [`producers`]: draft builders for booking, payment, system and export events
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Presentation layer hands the drafts to the store it owns

pub mod producers;
