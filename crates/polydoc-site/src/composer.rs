//! Site composition.
//!
//! Validation runs in fixed passes, each aborting on its first failure:
//!
//! 1. the default locale exists
//! 2. canonical locale prefixes are unique
//! 3. every link is well formed, stays in its locale's namespace and, under
//!    [`DeadLinkPolicy::Strict`], targets a declared page
//!
//! Only when all passes succeed is a [`SiteConfig`] assembled.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ComposeError, ConfigError};
use crate::locale::{LocaleConfig, LocaleInput};
use crate::prefix::canonicalize_prefix;
use crate::validate::{Namespaces, check_locale};

/// Whether dangling local links fail the build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadLinkPolicy {
    /// Reject links to pages no topic declares.
    #[default]
    Strict,
    /// Skip the dangling link check.
    Ignore,
}

impl fmt::Display for DeadLinkPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Ignore => f.write_str("ignore"),
        }
    }
}

impl FromStr for DeadLinkPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Self::Strict),
            "ignore" => Ok(Self::Ignore),
            other => Err(format!(
                "unknown dead link policy '{other}' (expected 'strict' or 'ignore')"
            )),
        }
    }
}

/// Social link shown in the generator's header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name (e.g. "github").
    pub icon: String,
    /// Target URL.
    pub link: String,
}

/// Page footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Footer message.
    pub message: String,
    /// Copyright line.
    pub copyright: String,
}

/// How the generator shapes page URLs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CleanUrls {
    /// Keep the `.html` suffix.
    Disabled,
    /// Drop `.html`; `guide/intro.md` is served at `/guide/intro`.
    #[default]
    WithoutSubfolders,
    /// Drop `.html` by emitting `guide/intro/index.html`.
    WithSubfolders,
}

/// Generator options that need no validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteExtras {
    /// URL shape of generated pages.
    pub clean_urls: CleanUrls,
    /// Show the last-updated timestamp on pages.
    pub last_updated: bool,
    /// Header social links.
    pub social_links: Vec<SocialLink>,
    /// Page footer.
    pub footer: Option<Footer>,
}

impl Default for SiteExtras {
    fn default() -> Self {
        Self {
            clean_urls: CleanUrls::default(),
            last_updated: true,
            social_links: Vec::new(),
            footer: None,
        }
    }
}

/// Global build settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteSettings {
    /// Public base path of the deployed site.
    pub base_path: String,
    /// Generator output directory.
    pub out_dir: String,
    /// Dangling link handling.
    pub dead_link_policy: DeadLinkPolicy,
    /// Prefix of the default locale.
    pub default_locale: String,
    /// Pass-through generator options.
    pub extras: SiteExtras,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            base_path: "/".to_owned(),
            out_dir: "dist".to_owned(),
            dead_link_policy: DeadLinkPolicy::default(),
            default_locale: "/".to_owned(),
            extras: SiteExtras::default(),
        }
    }
}

/// Validated, immutable configuration of the whole site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub(crate) base_path: String,
    pub(crate) out_dir: String,
    pub(crate) dead_link_policy: DeadLinkPolicy,
    pub(crate) default_locale: String,
    pub(crate) extras: SiteExtras,
    pub(crate) locales: BTreeMap<String, LocaleConfig>,
}

impl SiteConfig {
    /// Public base path.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Generator output directory.
    #[must_use]
    pub fn out_dir(&self) -> &str {
        &self.out_dir
    }

    /// Dangling link handling the site was validated with.
    #[must_use]
    pub fn dead_link_policy(&self) -> DeadLinkPolicy {
        self.dead_link_policy
    }

    /// Pass-through generator options.
    #[must_use]
    pub fn extras(&self) -> &SiteExtras {
        &self.extras
    }

    /// The default locale.
    #[must_use]
    pub fn default_locale(&self) -> &LocaleConfig {
        // Composition guarantees the default locale is present.
        &self.locales[&self.default_locale]
    }

    /// Look up a locale by prefix (canonicalized first).
    #[must_use]
    pub fn locale(&self, prefix: &str) -> Option<&LocaleConfig> {
        self.locales.get(&canonicalize_prefix(prefix))
    }

    /// Locales in canonical prefix order.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleConfig> {
        self.locales.values()
    }
}

/// Merges per-locale themes into a [`SiteConfig`].
#[derive(Clone, Debug)]
pub struct SiteComposer {
    settings: SiteSettings,
}

impl SiteComposer {
    /// Create a composer for the given global settings.
    #[must_use]
    pub fn new(settings: SiteSettings) -> Self {
        Self { settings }
    }

    /// Validate and merge `locales`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] or [`LinkError`](crate::LinkError)
    /// found; no configuration is produced in that case.
    pub fn compose(&self, locales: Vec<LocaleInput>) -> Result<SiteConfig, ComposeError> {
        let default_locale = canonicalize_prefix(&self.settings.default_locale);
        let prefixes: Vec<String> = locales
            .iter()
            .map(|locale| canonicalize_prefix(locale.prefix()))
            .collect();

        if !prefixes.contains(&default_locale) {
            return Err(ConfigError::MissingDefaultLocale {
                prefix: default_locale,
            }
            .into());
        }

        check_unique_prefixes(&locales, &prefixes)?;

        let namespaces = Namespaces::new(prefixes.iter().map(String::as_str));
        for (prefix, locale) in prefixes.iter().zip(&locales) {
            check_locale(
                prefix,
                locale,
                &namespaces,
                self.settings.dead_link_policy,
            )?;
        }

        let link_count: usize = locales.iter().map(|l| l.theme.links().count()).sum();
        let locales: BTreeMap<String, LocaleConfig> = prefixes
            .into_iter()
            .zip(locales)
            .map(|(prefix, input)| {
                let config = LocaleConfig {
                    prefix: prefix.clone(),
                    meta: input.meta,
                    theme: input.theme,
                };
                (prefix, config)
            })
            .collect();

        tracing::info!(
            locales = locales.len(),
            links = link_count,
            default_locale = %default_locale,
            policy = %self.settings.dead_link_policy,
            "Site configuration composed"
        );

        let settings = self.settings.clone();
        Ok(SiteConfig {
            base_path: settings.base_path,
            out_dir: settings.out_dir,
            dead_link_policy: settings.dead_link_policy,
            default_locale,
            extras: settings.extras,
            locales,
        })
    }
}

fn check_unique_prefixes(locales: &[LocaleInput], prefixes: &[String]) -> Result<(), ConfigError> {
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(prefixes.len());
    for (prefix, locale) in prefixes.iter().zip(locales) {
        if let Some(first) = seen.insert(prefix, locale.prefix()) {
            return Err(ConfigError::DuplicateLocalePrefix {
                prefix: prefix.clone(),
                first: first.to_owned(),
                second: locale.prefix().to_owned(),
            });
        }
    }
    Ok(())
}
