//! Per-locale composer inputs and outputs.

use polydoc_data::LocaleDataSet;
use polydoc_theme::ThemeConfig;

/// Descriptive settings of one locale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocaleMeta {
    /// Language switcher label (e.g. "English", "中文").
    pub label: String,
    /// Language tag (e.g. "en-US").
    pub lang: String,
    /// Site title in this locale.
    pub title: String,
    /// Site description in this locale.
    pub description: String,
    /// Language menu caption, if the generator should show one.
    pub select_text: Option<String>,
}

impl LocaleMeta {
    /// Meta with a language tag and empty texts.
    #[must_use]
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            ..Self::default()
        }
    }
}

/// One locale handed to the composer.
///
/// The locale prefix is the data set's prefix.
#[derive(Clone, Debug)]
pub struct LocaleInput {
    /// Descriptive settings.
    pub meta: LocaleMeta,
    /// Link declarations the theme was built from.
    pub data: LocaleDataSet,
    /// Theme built from `data`.
    pub theme: ThemeConfig,
}

impl LocaleInput {
    /// Bundle a locale for composition.
    #[must_use]
    pub fn new(meta: LocaleMeta, data: LocaleDataSet, theme: ThemeConfig) -> Self {
        Self { meta, data, theme }
    }

    /// Locale prefix as declared by the data set.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.data.prefix()
    }
}

/// Validated configuration of one locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleConfig {
    pub(crate) prefix: String,
    pub(crate) meta: LocaleMeta,
    pub(crate) theme: ThemeConfig,
}

impl LocaleConfig {
    /// Canonical locale prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Language switcher label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.meta.label
    }

    /// Language tag.
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.meta.lang
    }

    /// Site title in this locale.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.meta.title
    }

    /// Site description in this locale.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.meta.description
    }

    /// Language menu caption.
    #[must_use]
    pub fn select_text(&self) -> Option<&str> {
        self.meta.select_text.as_deref()
    }

    /// Nav and sidebar of this locale.
    #[must_use]
    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }
}
