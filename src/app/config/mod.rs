// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Auto-hide delays, floating stack and read tracking
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `YATRA_NOTIFY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use yatra_notify::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("ne-NP".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::notification::{
    FloatingLimit, FloatingPolicy, FloatingWindow, HideDefaults, HideDelay, ReadDelay,
};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ne-NP").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Notification timing and layout settings.
///
/// Values are stored as written; the accessors clamp them to their bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    #[serde(default = "default_hide_after_ms", skip_serializing_if = "Option::is_none")]
    pub default_hide_after_ms: Option<u64>,

    #[serde(
        default = "default_urgent_hide_after_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub urgent_hide_after_ms: Option<u64>,

    #[serde(
        default = "default_floating_max_visible",
        skip_serializing_if = "Option::is_none"
    )]
    pub floating_max_visible: Option<usize>,

    #[serde(
        default = "default_floating_window_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub floating_window_secs: Option<u64>,

    #[serde(default = "default_read_after_secs", skip_serializing_if = "Option::is_none")]
    pub read_after_secs: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_hide_after_ms: default_hide_after_ms(),
            urgent_hide_after_ms: default_urgent_hide_after_ms(),
            floating_max_visible: default_floating_max_visible(),
            floating_window_secs: default_floating_window_secs(),
            read_after_secs: default_read_after_secs(),
        }
    }
}

impl NotificationsConfig {
    /// Auto-hide delays for drafts that do not set their own.
    #[must_use]
    pub fn hide_defaults(&self) -> HideDefaults {
        let standard = self.default_hide_after_ms.unwrap_or(DEFAULT_HIDE_AFTER_MS);
        let urgent = self
            .urgent_hide_after_ms
            .unwrap_or(DEFAULT_URGENT_HIDE_AFTER_MS);
        HideDefaults {
            standard: HideDelay::from_millis(standard).as_duration(),
            urgent: HideDelay::from_millis(urgent).as_duration(),
        }
    }

    #[must_use]
    pub fn floating_policy(&self) -> FloatingPolicy {
        let max_visible = self
            .floating_max_visible
            .unwrap_or(DEFAULT_FLOATING_MAX_VISIBLE);
        let window = self
            .floating_window_secs
            .unwrap_or(DEFAULT_FLOATING_WINDOW_SECS);
        FloatingPolicy {
            max_visible: FloatingLimit::new(max_visible).value(),
            window: FloatingWindow::from_secs(window).as_duration(),
        }
    }

    #[must_use]
    pub fn read_delay(&self) -> ReadDelay {
        ReadDelay::from_secs(self.read_after_secs.unwrap_or(DEFAULT_READ_AFTER_SECS))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_hide_after_ms() -> Option<u64> {
    Some(DEFAULT_HIDE_AFTER_MS)
}

fn default_urgent_hide_after_ms() -> Option<u64> {
    Some(DEFAULT_URGENT_HIDE_AFTER_MS)
}

fn default_floating_max_visible() -> Option<usize> {
    Some(DEFAULT_FLOATING_MAX_VISIBLE)
}

fn default_floating_window_secs() -> Option<u64> {
    Some(DEFAULT_FLOATING_WINDOW_SECS)
}

fn default_read_after_secs() -> Option<u64> {
    Some(DEFAULT_READ_AFTER_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the config from the default location.
///
/// Never fails: a missing file yields defaults, a corrupt file yields
/// defaults plus the i18n key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("ne-NP".to_string()),
                theme_mode: ThemeMode::Light,
            },
            notifications: NotificationsConfig {
                default_hide_after_ms: Some(4_000),
                urgent_hide_after_ms: Some(9_000),
                floating_max_visible: Some(2),
                floating_window_secs: Some(8),
                read_after_secs: Some(3),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_returns_warning_for_corrupt_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"dark\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.notifications, NotificationsConfig::default());
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.notifications.default_hide_after_ms, Some(5_000));
        assert_eq!(config.notifications.urgent_hide_after_ms, Some(8_000));
        assert_eq!(config.notifications.floating_max_visible, Some(3));
        assert_eq!(config.notifications.floating_window_secs, Some(10));
        assert_eq!(config.notifications.read_after_secs, Some(2));
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let notifications = NotificationsConfig {
            default_hide_after_ms: Some(0),
            urgent_hide_after_ms: Some(10_000_000),
            floating_max_visible: Some(100),
            floating_window_secs: Some(1),
            read_after_secs: None,
        };

        let hide = notifications.hide_defaults();
        assert_eq!(hide.standard, Duration::from_millis(MIN_HIDE_AFTER_MS));
        assert_eq!(hide.urgent, Duration::from_millis(MAX_HIDE_AFTER_MS));

        let policy = notifications.floating_policy();
        assert_eq!(policy.max_visible, MAX_FLOATING_MAX_VISIBLE);
        assert_eq!(policy.window, Duration::from_secs(MIN_FLOATING_WINDOW_SECS));

        assert_eq!(
            notifications.read_delay().as_duration(),
            Duration::from_secs(DEFAULT_READ_AFTER_SECS)
        );
    }

    #[test]
    fn floating_settings_cannot_exceed_three_cards_or_ten_seconds() {
        use crate::domain::notification::{
            floating, Clock, ManualClock, NotificationDraft, Store, FLOATING_MAX_VISIBLE,
            FLOATING_WINDOW,
        };
        use std::sync::Arc;

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[notifications]\nfloating_max_visible = 6\nfloating_window_secs = 60\n",
        )
        .expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        let policy = loaded.notifications.floating_policy();
        assert_eq!(policy.max_visible, FLOATING_MAX_VISIBLE);
        assert_eq!(policy.window, FLOATING_WINDOW);

        let clock = ManualClock::new();
        let mut store: Store<()> = Store::with_clock(Arc::new(clock.clone()));
        for i in 0..6 {
            store.add(NotificationDraft::info(format!("n{i}"), "").auto_hide(false));
        }
        assert_eq!(floating(&store, clock.now(), policy).len(), 3);

        clock.advance(Duration::from_secs(11));
        assert!(floating(&store, clock.now(), policy).is_empty());
    }

    #[test]
    fn default_accessors_match_store_defaults() {
        let notifications = NotificationsConfig::default();
        assert_eq!(notifications.hide_defaults(), HideDefaults::default());
        assert_eq!(notifications.floating_policy(), FloatingPolicy::default());
    }
}
