// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::dashboard;
use crate::ui::diagnostics_screen;
use crate::ui::notifications;
use std::time::Instant;

use super::Effect;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(notifications::Message<Effect>),
    Dashboard(dashboard::Message),
    Diagnostics(diagnostics_screen::Message),
    Tick(Instant), // Periodic tick for auto-hide, read tracking and countdowns
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP47 form (e.g. `ne-NP`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for translations.
    pub i18n_dir: Option<String>,
    /// Optional directory for config and state files.
    pub config_dir: Option<String>,
}
