//! Navigable link entries.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Scheme prefix of an absolute URL (`https:`, `mailto:`, ...).
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").unwrap());

/// A single navigable reference.
///
/// `link` is either a path rooted at a locale prefix (`/en/guide/intro`) or
/// an absolute URL. Entries are immutable once declared.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkEntry {
    text: String,
    link: String,
}

impl LinkEntry {
    /// Create a new link entry.
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Link target.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Whether the target is a scheme-qualified URL rather than a local path.
    #[must_use]
    pub fn is_external(&self) -> bool {
        is_absolute_url(&self.link)
    }
}

/// Check whether `link` is a syntactically absolute (scheme-qualified) URL.
///
/// ```
/// use polydoc_data::is_absolute_url;
///
/// assert!(is_absolute_url("https://github.com/alibaba/yalantinglibs"));
/// assert!(!is_absolute_url("/en/guide/intro"));
/// ```
#[must_use]
pub fn is_absolute_url(link: &str) -> bool {
    SCHEME_RE.is_match(link)
}
