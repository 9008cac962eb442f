//! Configuration management for polydoc.
//!
//! Parses `polydoc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Without a config
//! file, the builtin English and Chinese data sets are used.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.base`
//! - `site.out_dir`
//! - `theme.issues_url`

mod expand;

use std::path::{Path, PathBuf};

use polydoc_data::{DataError, DataVersion, LinkEntry, LocaleDataSet, builtin, load_dataset};
use polydoc_site::{
    CleanUrls, DeadLinkPolicy, Footer, LocaleMeta, SiteExtras, SiteSettings, SocialLink,
};
use polydoc_theme::{NavOptions, TopicOrder, TopicSpec};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override public base path.
    pub base: Option<String>,
    /// Override generator output directory.
    pub out_dir: Option<String>,
    /// Override dead link policy.
    pub dead_links: Option<DeadLinkPolicy>,
    /// Override builtin data version.
    pub data_version: Option<DataVersion>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "polydoc.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Global build settings.
    #[serde(default)]
    pub site: SiteSection,
    /// Builtin data selection.
    #[serde(default)]
    pub data: DataSection,
    /// Theme settings shared by all locales.
    #[serde(default)]
    pub theme: ThemeSection,
    /// Locales in declaration order.
    #[serde(default)]
    pub locales: Vec<LocaleSection>,

    /// Directory data file paths are resolved against (set after loading).
    #[serde(skip)]
    pub config_dir: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Global build settings.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Public base path of the deployed site.
    pub base: String,
    /// Generator output directory.
    pub out_dir: String,
    /// Dangling link handling.
    pub dead_links: DeadLinkPolicy,
    /// Prefix of the default locale.
    pub default_locale: String,
    /// URL shape of generated pages.
    pub clean_urls: CleanUrls,
    /// Show last-updated timestamps.
    pub last_updated: bool,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base: "/".to_owned(),
            out_dir: "dist".to_owned(),
            dead_links: DeadLinkPolicy::Strict,
            default_locale: "/".to_owned(),
            clean_urls: CleanUrls::default(),
            last_updated: true,
        }
    }
}

/// Builtin data selection.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataSection {
    /// Version of the builtin data modules.
    pub version: DataVersion,
}

/// Nav entry linking to the first page of a topic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavTopic {
    /// Nav label.
    pub text: String,
    /// Topic name.
    pub topic: String,
}

/// Theme settings shared by all locales.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSection {
    /// Topic whose first page is the leading nav link.
    pub primary_topic: String,
    /// Active-match pattern of the leading nav link.
    pub guide_active_match: Option<String>,
    /// Topics every locale must declare.
    pub required_topics: Vec<String>,
    /// Additional nav entries.
    pub nav_topics: Vec<NavTopic>,
    /// Issue tracker URL (nav entry omitted when unset).
    pub issues_url: Option<String>,
    /// Issue tracker nav label.
    pub issues_text: String,
    /// Sidebar topic order.
    pub topics: Vec<TopicSpec>,
    /// Header social links.
    pub social_links: Vec<SocialLink>,
    /// Page footer.
    pub footer: Option<Footer>,
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            primary_topic: "guide".to_owned(),
            guide_active_match: None,
            required_topics: Vec::new(),
            nav_topics: Vec::new(),
            issues_url: None,
            issues_text: "Github Issues".to_owned(),
            topics: Vec::new(),
            social_links: Vec::new(),
            footer: None,
        }
    }
}

/// One locale.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleSection {
    /// Builtin data set name in the selected data version.
    pub dataset: Option<String>,
    /// Data file (relative to the config directory).
    pub file: Option<PathBuf>,
    /// Language switcher label.
    #[serde(default)]
    pub label: String,
    /// Language tag.
    pub lang: String,
    /// Site title in this locale.
    #[serde(default)]
    pub title: String,
    /// Site description in this locale.
    #[serde(default)]
    pub description: String,
    /// Label of the leading nav link.
    #[serde(default = "default_guide_text")]
    pub guide_text: String,
    /// Label of the language switcher.
    #[serde(default = "default_language_text")]
    pub language_text: String,
    /// Language menu caption.
    pub select_text: Option<String>,
    /// Sidebar topic order overriding `theme.topics`.
    pub topics: Option<Vec<TopicSpec>>,
}

fn default_guide_text() -> String {
    "Guide".to_owned()
}

fn default_language_text() -> String {
    "Language".to_owned()
}

/// Where a locale's data set comes from.
#[derive(Debug, PartialEq, Eq)]
pub enum DataSource<'a> {
    /// Builtin data set by name.
    Builtin(&'a str),
    /// Data file path, resolved against the config directory.
    File(PathBuf),
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base`").
        field: String,
        /// Error message (e.g., "${`DOCS_BASE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), SettingsError> {
    if value.trim().is_empty() {
        return Err(SettingsError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), SettingsError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(SettingsError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl LocaleSection {
    /// Builtin locale backed by a data set of the selected version.
    fn builtin(dataset: &str, label: &str, lang: &str, title: &str, description: &str) -> Self {
        Self {
            dataset: Some(dataset.to_owned()),
            file: None,
            label: label.to_owned(),
            lang: lang.to_owned(),
            title: title.to_owned(),
            description: description.to_owned(),
            guide_text: default_guide_text(),
            language_text: default_language_text(),
            select_text: None,
            topics: None,
        }
    }

    /// Data source of this locale.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Validation` unless exactly one of `dataset`
    /// and `file` is set.
    pub fn source(&self, config_dir: &Path) -> Result<DataSource<'_>, SettingsError> {
        match (&self.dataset, &self.file) {
            (Some(name), None) => Ok(DataSource::Builtin(name)),
            (None, Some(file)) => Ok(DataSource::File(config_dir.join(file))),
            (Some(_), Some(_)) => Err(SettingsError::Validation(format!(
                "locale '{}' sets both dataset and file",
                self.lang
            ))),
            (None, None) => Err(SettingsError::Validation(format!(
                "locale '{}' needs a dataset or a file",
                self.lang
            ))),
        }
    }

    /// Descriptive settings handed to the composer.
    #[must_use]
    pub fn meta(&self) -> LocaleMeta {
        LocaleMeta {
            label: self.label.clone(),
            lang: self.lang.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            select_text: self.select_text.clone(),
        }
    }
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `polydoc.toml` in current directory and parents,
    /// falling back to the builtin configuration.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values. The result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, SettingsError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(SettingsError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base) = &settings.base {
            self.site.base.clone_from(base);
        }
        if let Some(out_dir) = &settings.out_dir {
            self.site.out_dir.clone_from(out_dir);
        }
        if let Some(dead_links) = settings.dead_links {
            self.site.dead_links = dead_links;
        }
        if let Some(version) = settings.data_version {
            self.data.version = version;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Builtin configuration: English and Chinese locales of the current data.
    fn default_with_base(base: &Path) -> Self {
        let mut chinese = LocaleSection::builtin(
            "zh",
            "中文",
            "zh-CN",
            "雅兰亭库",
            "C++20程序库，包含async_simple、coro_rpc和struct_pack.",
        );
        chinese.guide_text = "指南".to_owned();
        chinese.language_text = "语言".to_owned();
        chinese.select_text = Some("选择语言".to_owned());
        chinese.topics = Some(vec![
            TopicSpec::new("guide").with_title("指南"),
            TopicSpec::new("struct_pb"),
            TopicSpec::new("struct_pack"),
            TopicSpec::new("coro_rpc"),
            TopicSpec::new("easylog"),
            TopicSpec::new("coro_http"),
            TopicSpec::new("struct_xxx"),
            TopicSpec::new("metric"),
            TopicSpec::new("about").with_title("关于"),
        ]);

        Self {
            site: SiteSection {
                base: "/yalantinglibs/".to_owned(),
                out_dir: "../docs".to_owned(),
                default_locale: "/en/".to_owned(),
                ..SiteSection::default()
            },
            data: DataSection::default(),
            theme: ThemeSection {
                guide_active_match: Some("/guide/".to_owned()),
                required_topics: vec!["guide".to_owned()],
                issues_url: Some("https://github.com/alibaba/yalantinglibs/issues".to_owned()),
                topics: vec![
                    TopicSpec::new("guide").with_title("Guide"),
                    TopicSpec::new("struct_pb"),
                    TopicSpec::new("struct_pack"),
                    TopicSpec::new("coro_rpc"),
                    TopicSpec::new("about").with_title("About"),
                ],
                social_links: vec![SocialLink {
                    icon: "github".to_owned(),
                    link: "https://github.com/alibaba/yalantinglibs".to_owned(),
                }],
                footer: Some(Footer {
                    message: "This website is released under the MIT License.".to_owned(),
                    copyright: "Copyright © 2022 yalantinglibs contributors".to_owned(),
                }),
                ..ThemeSection::default()
            },
            locales: vec![
                LocaleSection::builtin(
                    "en",
                    "English",
                    "en-US",
                    "yalantinglibs",
                    "A collection of C++20 libraries, include async_simple, coro_rpc and struct_pack.",
                ),
                chinese,
            ],
            config_dir: base.to_path_buf(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        config.config_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.validate_site()?;
        self.validate_theme()?;
        self.validate_locales()?;
        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), SettingsError> {
        require_non_empty(&self.site.base, "site.base")?;
        if !self.site.base.starts_with('/') {
            return Err(SettingsError::Validation(
                "site.base must start with /".to_owned(),
            ));
        }
        require_non_empty(&self.site.out_dir, "site.out_dir")?;
        Ok(())
    }

    /// Validate theme configuration.
    fn validate_theme(&self) -> Result<(), SettingsError> {
        require_non_empty(&self.theme.primary_topic, "theme.primary_topic")?;
        if let Some(ref issues_url) = self.theme.issues_url {
            require_http_url(issues_url, "theme.issues_url")?;
        }
        Ok(())
    }

    /// Validate locale sections.
    fn validate_locales(&self) -> Result<(), SettingsError> {
        if self.locales.is_empty() {
            return Err(SettingsError::Validation(
                "at least one [[locales]] entry is required".to_owned(),
            ));
        }
        for locale in &self.locales {
            require_non_empty(&locale.lang, "locales.lang")?;
            locale.source(&self.config_dir)?;
            if self.topic_specs(locale).is_empty() {
                return Err(SettingsError::Validation(format!(
                    "locale '{}' has no sidebar topics (set theme.topics or locales.topics)",
                    locale.lang
                )));
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), SettingsError> {
        self.site.base = expand::expand_env(&self.site.base, "site.base")?;
        self.site.out_dir = expand::expand_env(&self.site.out_dir, "site.out_dir")?;

        if let Some(ref url) = self.theme.issues_url {
            self.theme.issues_url = Some(expand::expand_env(url, "theme.issues_url")?);
        }

        Ok(())
    }

    /// Load the data set of `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadDataError`] if the locale has no valid source, the
    /// builtin data set is unknown, or the data file cannot be loaded.
    pub fn load_data(&self, locale: &LocaleSection) -> Result<LocaleDataSet, LoadDataError> {
        match locale.source(&self.config_dir)? {
            DataSource::Builtin(name) => Ok(builtin::dataset(self.data.version, name)?),
            DataSource::File(path) => Ok(load_dataset(&path)?),
        }
    }

    fn topic_specs<'a>(&'a self, locale: &'a LocaleSection) -> &'a [TopicSpec] {
        locale.topics.as_deref().unwrap_or(&self.theme.topics)
    }

    /// Sidebar topic order of `locale`.
    #[must_use]
    pub fn topic_order(&self, locale: &LocaleSection) -> TopicOrder {
        TopicOrder::from_specs(self.topic_specs(locale).to_vec())
            .with_required(self.theme.required_topics.iter().cloned())
    }

    /// Nav options of `locale`, given the language switcher entries.
    #[must_use]
    pub fn nav_options(&self, locale: &LocaleSection, languages: Vec<LinkEntry>) -> NavOptions {
        let external_links = self
            .theme
            .issues_url
            .iter()
            .map(|url| LinkEntry::new(&self.theme.issues_text, url))
            .collect();
        NavOptions {
            primary_topic: self.theme.primary_topic.clone(),
            guide_text: locale.guide_text.clone(),
            guide_active_match: self.theme.guide_active_match.clone(),
            nav_topics: self
                .theme
                .nav_topics
                .iter()
                .map(|t| (t.text.clone(), t.topic.clone()))
                .collect(),
            language_text: locale.language_text.clone(),
            languages,
            external_links,
        }
    }

    /// Global settings handed to the composer.
    #[must_use]
    pub fn site_settings(&self) -> SiteSettings {
        SiteSettings {
            base_path: self.site.base.clone(),
            out_dir: self.site.out_dir.clone(),
            dead_link_policy: self.site.dead_links,
            default_locale: self.site.default_locale.clone(),
            extras: SiteExtras {
                clean_urls: self.site.clean_urls,
                last_updated: self.site.last_updated,
                social_links: self.theme.social_links.clone(),
                footer: self.theme.footer.clone(),
            },
        }
    }
}

/// Error returned by [`Config::load_data`].
#[derive(Debug, thiserror::Error)]
pub enum LoadDataError {
    /// Locale section is invalid.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// Data set could not be loaded.
    #[error(transparent)]
    Data(#[from] DataError),
}
