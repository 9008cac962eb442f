//! Site composition pipeline.
//!
//! Loads every locale's data set, builds its theme (with a language switcher
//! listing all locales), then composes and validates the whole site.

use polydoc_config::Config;
use polydoc_data::{LinkEntry, LocaleDataSet};
use polydoc_site::{LocaleInput, SiteComposer, SiteConfig, canonicalize_prefix};
use polydoc_theme::ThemeConfigBuilder;

use crate::error::CliError;

/// Compose the site described by `config`.
///
/// Nothing is returned unless every locale builds and validates.
pub(crate) fn compose(config: &Config) -> Result<SiteConfig, CliError> {
    let datasets = config
        .locales
        .iter()
        .map(|locale| config.load_data(locale))
        .collect::<Result<Vec<LocaleDataSet>, _>>()?;

    let languages: Vec<LinkEntry> = config
        .locales
        .iter()
        .zip(&datasets)
        .map(|(locale, data)| {
            let label = if locale.label.is_empty() {
                &locale.lang
            } else {
                &locale.label
            };
            LinkEntry::new(label, canonicalize_prefix(data.prefix()))
        })
        .collect();

    let mut inputs = Vec::with_capacity(datasets.len());
    for (locale, data) in config.locales.iter().zip(datasets) {
        let theme = ThemeConfigBuilder::new(config.topic_order(locale))
            .with_nav(config.nav_options(locale, languages.clone()))
            .build(&data)?;
        tracing::debug!(
            lang = %locale.lang,
            prefix = %data.prefix(),
            links = theme.links().count(),
            "Built locale theme"
        );
        inputs.push(LocaleInput::new(locale.meta(), data, theme));
    }

    let site = SiteComposer::new(config.site_settings()).compose(inputs)?;
    Ok(site)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use polydoc_data::DataVersion;
    use polydoc_site::{ComposeError, ConfigError, DeadLinkPolicy, LinkError};
    use polydoc_theme::{NavItem, ThemeError};
    use pretty_assertions::assert_eq;

    use super::*;

    const DATA_EN: &str = r#"
prefix = "/en/"

[[topics]]
name = "guide"
links = [
  { text = "Intro", link = "/en/guide/intro" },
  { text = "Build", link = "/en/guide/build" },
]
"#;

    const DATA_ZH: &str = r#"
prefix = "/zh/"

[[topics]]
name = "guide"
links = [{ text = "简介", link = "/zh/guide/intro" }]
"#;

    const CONFIG: &str = r#"
[site]
default_locale = "/en/"

[theme]
topics = ["guide"]

[[locales]]
file = "en.toml"
label = "English"
lang = "en-US"

[[locales]]
file = "zh.toml"
label = "简体中文"
lang = "zh-CN"
"#;

    fn load(dir: &Path, config: &str, en: &str, zh: &str) -> Config {
        std::fs::write(dir.join("en.toml"), en).unwrap();
        std::fs::write(dir.join("zh.toml"), zh).unwrap();
        let path = dir.join("polydoc.toml");
        std::fs::write(&path, config).unwrap();
        Config::load(Some(&path), None).unwrap()
    }

    #[test]
    fn test_builtin_current_site_composes() {
        let config = Config::default();

        let site = compose(&config).unwrap();

        let prefixes: Vec<_> = site.locales().map(|l| l.prefix().to_owned()).collect();
        assert_eq!(prefixes, vec!["/en/".to_owned(), "/zh/".to_owned()]);
        assert_eq!(site.default_locale().lang(), "en-US");
    }

    #[test]
    fn test_builtin_legacy_site_composes() {
        let mut config = Config::default();
        config.data.version = DataVersion::Legacy;

        let site = compose(&config).unwrap();

        assert_eq!(site.locales().count(), 2);
    }

    #[test]
    fn test_language_switcher_lists_every_locale() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(dir.path(), CONFIG, DATA_EN, DATA_ZH);

        let site = compose(&config).unwrap();
        let zh = site.locale("/zh/").unwrap();

        assert_eq!(
            zh.theme().nav,
            vec![
                NavItem::Link(LinkEntry::new("Guide", "/zh/guide/intro")),
                NavItem::Group {
                    text: "Language".to_owned(),
                    items: vec![
                        LinkEntry::new("English", "/en/"),
                        LinkEntry::new("简体中文", "/zh/"),
                    ],
                },
            ]
        );
    }

    #[test]
    fn test_cross_locale_link_fails() {
        let dir = tempfile::tempdir().unwrap();
        let leaking = DATA_ZH.replace("/zh/guide/intro", "/en/guide/intro");
        let config = load(dir.path(), CONFIG, DATA_EN, &leaking);

        let err = compose(&config).unwrap_err();

        assert!(matches!(
            err,
            CliError::Compose(ComposeError::Link(LinkError::NamespaceViolation { .. }))
        ));
    }

    #[test]
    fn test_duplicate_prefix_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(dir.path(), CONFIG, DATA_EN, DATA_EN);

        let err = compose(&config).unwrap_err();

        assert!(matches!(
            err,
            CliError::Compose(ComposeError::Config(ConfigError::DuplicateLocalePrefix { .. }))
        ));
    }

    #[test]
    fn test_missing_default_locale_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(
            dir.path(),
            &CONFIG.replace("default_locale = \"/en/\"", "default_locale = \"/fr/\""),
            DATA_EN,
            DATA_ZH,
        );

        let err = compose(&config).unwrap_err();

        assert!(matches!(
            err,
            CliError::Compose(ComposeError::Config(ConfigError::MissingDefaultLocale { .. }))
        ));
    }

    #[test]
    fn test_missing_primary_topic_fails() {
        let dir = tempfile::tempdir().unwrap();
        let empty = "prefix = \"/zh/\"\n";
        let config = load(dir.path(), CONFIG, DATA_EN, empty);

        let err = compose(&config).unwrap_err();

        assert!(matches!(
            err,
            CliError::Theme(ThemeError::MissingPrimaryTopic { .. })
        ));
    }

    #[test]
    fn test_dead_links_policy_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(
            dir.path(),
            &CONFIG.replace("[site]", "[site]\ndead_links = \"ignore\""),
            DATA_EN,
            DATA_ZH,
        );

        let site = compose(&config).unwrap();

        assert_eq!(site.dead_link_policy(), DeadLinkPolicy::Ignore);
    }
}
