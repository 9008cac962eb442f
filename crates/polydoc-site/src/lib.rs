//! Locale composition and validation for polydoc.
//!
//! [`SiteComposer`] merges one [`ThemeConfig`](polydoc_theme::ThemeConfig)
//! per locale with the global build settings into a single validated
//! [`SiteConfig`]. Validation is fail-fast: the composer returns either a
//! complete configuration or the first error found, never a partial result.
//!
//! The [`schema`] module turns a [`SiteConfig`] into the document the static
//! site generator reads.
//!
//! # Example
//!
//! ```
//! use polydoc_data::{LinkEntry, LocaleDataSet};
//! use polydoc_site::{LocaleInput, LocaleMeta, SiteComposer, SiteSettings};
//! use polydoc_theme::{ThemeConfigBuilder, TopicOrder};
//!
//! let data = LocaleDataSet::new("/en/")
//!     .with_topic("guide", [LinkEntry::new("Intro", "/en/guide/intro")]);
//! let theme = ThemeConfigBuilder::new(TopicOrder::new(["guide"]))
//!     .build(&data)
//!     .unwrap();
//!
//! let settings = SiteSettings {
//!     default_locale: "/en/".to_owned(),
//!     ..SiteSettings::default()
//! };
//! let site = SiteComposer::new(settings)
//!     .compose(vec![LocaleInput::new(LocaleMeta::new("en-US"), data, theme)])
//!     .unwrap();
//!
//! assert!(site.locale("/en/").is_some());
//! ```

mod composer;
mod error;
mod locale;
mod prefix;
pub mod schema;
mod validate;

pub use composer::{
    CleanUrls, DeadLinkPolicy, Footer, SiteComposer, SiteConfig, SiteExtras, SiteSettings,
    SocialLink,
};
pub use error::{ComposeError, ConfigError, LinkError};
pub use locale::{LocaleConfig, LocaleInput, LocaleMeta};
pub use prefix::canonicalize_prefix;
