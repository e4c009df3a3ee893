// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! This module follows the Elm-style "state down, messages up" pattern:
//! views borrow the store and report interactions as messages.
//!
//! # Screens
//!
//! - [`dashboard`] - Notification producers and preferences
//! - [`diagnostics_screen`] - Collected diagnostic events and export
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Notification cards, center and floating stack
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod dashboard;
pub mod design_tokens;
pub mod diagnostics_screen;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
