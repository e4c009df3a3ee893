// SPDX-License-Identifier: MPL-2.0
//! `yatra_notify` is a desktop notification center built with the Iced GUI
//! framework.
//!
//! It keeps an in-memory store of booking, payment and system notifications,
//! hides them on a timer, shows recent ones as floating toasts and lists
//! everything in a notification center. Text is localized with Fluent and
//! preferences live in a TOML settings file.
//!
//! # Layers
//!
//! - [`domain`] - Notification records, the store, timers and projections
//! - [`application`] - Producers that turn business events into notifications
//! - [`ui`] - Cards, center, floating stack, screens and styling
//! - [`app`] - The Iced application shell, config and paths
//! - [`diagnostics`] - Bounded, sanitized event log with JSON export

pub mod app;
pub mod application;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

pub use app::config;
