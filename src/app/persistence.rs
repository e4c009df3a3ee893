// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! This module handles saving user preferences to disk: theme mode and
//! language selection. Notification settings are only ever read.

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// i18n key of the warning shown when the settings file cannot be written.
pub const SAVE_ERROR_KEY: &str = "notification-config-save-error";

/// Persists the theme mode and language to disk.
///
/// The file is re-read first so hand-edited notification settings survive.
/// Returns the i18n key of a warning to show when saving failed.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic
/// through [`persist_preferences_with_override`] with a temporary directory.
pub fn persist_preferences(theme_mode: ThemeMode, language: Option<String>) -> Option<String> {
    if cfg!(test) {
        return None;
    }
    persist_preferences_with_override(theme_mode, language, None)
}

/// Same as [`persist_preferences`], rooted at `base_dir` when given.
///
/// A settings file that fails to parse is left untouched and its load
/// warning is returned instead.
pub fn persist_preferences_with_override(
    theme_mode: ThemeMode,
    language: Option<String>,
    base_dir: Option<PathBuf>,
) -> Option<String> {
    let (mut cfg, warning) = config::load_with_override(base_dir.clone());
    if warning.is_some() {
        return warning;
    }

    cfg.general.theme_mode = theme_mode;
    if language.is_some() {
        cfg.general.language = language;
    }

    config::save_with_override(&cfg, base_dir)
        .err()
        .map(|_| SAVE_ERROR_KEY.to_string())
}

/// Applies the newly selected locale and persists it to config.
pub fn apply_language_change(
    i18n: &mut I18n,
    theme_mode: ThemeMode,
    locale: LanguageIdentifier,
) -> Option<String> {
    let language = locale.to_string();
    i18n.set_locale(locale);
    persist_preferences(theme_mode, Some(language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::tempdir;

    #[test]
    fn preferences_are_written_next_to_notification_settings() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let mut initial = Config::default();
        initial.notifications.floating_max_visible = Some(2);
        config::save_with_override(&initial, Some(dir.path().to_path_buf())).expect("save");

        let warning = persist_preferences_with_override(
            ThemeMode::Light,
            Some("ne-NP".to_string()),
            Some(dir.path().to_path_buf()),
        );
        assert!(warning.is_none());

        let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.general.language.as_deref(), Some("ne-NP"));
        assert_eq!(loaded.notifications.floating_max_visible, Some(2));
    }

    #[test]
    fn corrupt_settings_file_is_not_overwritten() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("settings.toml");
        let corrupt = "[notifications]\nfloating_max_visible = \"three\"\n";
        std::fs::write(&path, corrupt).expect("write");

        let warning = persist_preferences_with_override(
            ThemeMode::Dark,
            Some("en-US".to_string()),
            Some(dir.path().to_path_buf()),
        );

        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(std::fs::read_to_string(&path).expect("read"), corrupt);
    }
}
