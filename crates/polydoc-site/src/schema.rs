//! Generator-facing configuration schema.
//!
//! [`GeneratorConfig`] borrows a validated [`SiteConfig`] and serializes it
//! in the camelCase shape the static site generator reads:
//!
//! ```text
//! { lang, title, description, basePath, outDir, cleanUrls, lastUpdated,
//!   ignoreDeadLinks,
//!   locales: { "<prefix>": { label, lang, title, description,
//!                            themeConfig: { selectText?, nav, sidebar } } },
//!   themeConfig: { socialLinks, footer? } }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use polydoc_theme::{NavItem, SidebarSection};
use serde::Serialize;

use crate::composer::{CleanUrls, DeadLinkPolicy, Footer, SiteConfig, SocialLink};
use crate::locale::LocaleConfig;

/// Root of the generator schema.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig<'a> {
    lang: &'a str,
    title: &'a str,
    description: &'a str,
    base_path: &'a str,
    out_dir: &'a str,
    clean_urls: CleanUrls,
    last_updated: bool,
    ignore_dead_links: bool,
    locales: BTreeMap<&'a str, GeneratorLocale<'a>>,
    theme_config: GeneratorTheme<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeneratorLocale<'a> {
    label: &'a str,
    lang: &'a str,
    title: &'a str,
    description: &'a str,
    theme_config: LocaleTheme<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LocaleTheme<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    select_text: Option<&'a str>,
    nav: &'a [NavItem],
    sidebar: &'a [SidebarSection],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeneratorTheme<'a> {
    social_links: &'a [SocialLink],
    #[serde(skip_serializing_if = "Option::is_none")]
    footer: Option<&'a Footer>,
}

impl<'a> From<&'a LocaleConfig> for GeneratorLocale<'a> {
    fn from(locale: &'a LocaleConfig) -> Self {
        Self {
            label: locale.label(),
            lang: locale.lang(),
            title: locale.title(),
            description: locale.description(),
            theme_config: LocaleTheme {
                select_text: locale.select_text(),
                nav: &locale.theme().nav,
                sidebar: &locale.theme().sidebar,
            },
        }
    }
}

impl<'a> From<&'a SiteConfig> for GeneratorConfig<'a> {
    fn from(site: &'a SiteConfig) -> Self {
        let default_locale = site.default_locale();
        let extras = site.extras();
        Self {
            lang: default_locale.lang(),
            title: default_locale.title(),
            description: default_locale.description(),
            base_path: site.base_path(),
            out_dir: site.out_dir(),
            clean_urls: extras.clean_urls,
            last_updated: extras.last_updated,
            ignore_dead_links: site.dead_link_policy() == DeadLinkPolicy::Ignore,
            locales: site
                .locales()
                .map(|locale| (locale.prefix(), GeneratorLocale::from(locale)))
                .collect(),
            theme_config: GeneratorTheme {
                social_links: &extras.social_links,
                footer: extras.footer.as_ref(),
            },
        }
    }
}

/// Output encoding of the generator configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON document.
    #[default]
    Json,
    /// ES module with the configuration as its default export.
    Module,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Module => f.write_str("module"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "module" | "mjs" => Ok(Self::Module),
            other => Err(format!(
                "unknown output format '{other}' (expected 'json' or 'module')"
            )),
        }
    }
}

/// Serialize `site` for the generator.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(site: &SiteConfig, format: OutputFormat) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(&GeneratorConfig::from(site))?;
    Ok(match format {
        OutputFormat::Json => format!("{json}\n"),
        OutputFormat::Module => {
            format!("// Generated by polydoc. Do not edit.\nexport default {json}\n")
        }
    })
}
