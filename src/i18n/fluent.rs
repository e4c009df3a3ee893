// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads the embedded translations, then any `.ftl` files found in
    /// `i18n_dir`, which override embedded messages with the same id.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut i18n = Self {
            bundles: HashMap::new(),
            available_locales: Vec::new(),
            current_locale: default_locale(),
        };

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_from_filename(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                i18n.add_source(locale, source);
            }
        }

        if let Some(dir) = i18n_dir {
            i18n.load_dir(Path::new(&dir));
        }

        i18n.available_locales.sort_by_key(ToString::to_string);
        if let Some(locale) = resolve_locale(cli_lang, config, &i18n.available_locales) {
            i18n.current_locale = locale;
        }
        i18n
    }

    fn load_dir(&mut self, dir: &Path) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            let Some(locale) = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(locale_from_filename)
            else {
                continue;
            };
            if let Ok(source) = fs::read_to_string(&path) {
                self.add_source(locale, source);
            }
        }
    }

    fn add_source(&mut self, locale: LanguageIdentifier, source: String) {
        // Unparsable files are skipped rather than failing startup
        let Ok(resource) = FluentResource::try_new(source) else {
            return;
        };
        let bundle = self.bundles.entry(locale.clone()).or_insert_with(|| {
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            bundle
        });
        bundle.add_resource_overriding(resource);
        if !self.available_locales.contains(&locale) {
            self.available_locales.push(locale);
        }
    }

    /// Switches the current locale. Unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.to_string());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter_map(|tag| tag.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn langs(tags: &[&str]) -> Vec<LanguageIdentifier> {
        tags.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let available = langs(&["en-US", "ne-NP"]);
        let lang = resolve_locale(Some("ne-NP".to_string()), &config, &available);
        assert_eq!(lang, Some("ne-NP".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_config_when_cli_unknown() {
        let mut config = Config::default();
        config.general.language = Some("ne-NP".to_string());
        let available = langs(&["en-US", "ne-NP"]);
        let lang = resolve_locale(Some("xx-YY".to_string()), &config, &available);
        assert_eq!(lang, Some("ne-NP".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_result_is_available() {
        let config = Config::default();
        let available = langs(&["en-US", "ne-NP"]);
        // Falls through to the OS locale, which is system dependent
        if let Some(l) = resolve_locale(None, &config, &available) {
            assert!(available.contains(&l));
        }
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"ne-NP".parse().unwrap()));
        assert_eq!(i18n.tr("center-title"), "Notifications");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn tr_with_args_substitutes_values() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        assert_eq!(
            i18n.tr_with_args("time-minutes-ago", &[("count", "5")]),
            "5m ago"
        );
    }

    #[test]
    fn overlay_directory_overrides_and_adds_messages() {
        let dir = tempdir().expect("temp dir");
        fs::write(
            dir.path().join("en-US.ftl"),
            "center-title = Alerts\nextra-key = Extra\n",
        )
        .expect("write overlay");

        let i18n = I18n::new(
            Some("en-US".to_string()),
            Some(dir.path().to_string_lossy().into_owned()),
            &Config::default(),
        );
        assert_eq!(i18n.tr("center-title"), "Alerts");
        assert_eq!(i18n.tr("extra-key"), "Extra");
        assert_eq!(i18n.tr("center-empty"), "No notifications yet");
    }

    #[test]
    fn set_locale_ignores_unknown_locale() {
        let mut i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        i18n.set_locale("fr".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "en-US");
        i18n.set_locale("ne-NP".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "ne-NP");
    }
}
