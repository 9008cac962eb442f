//! Link validation.
//!
//! Every local link belongs to the locale with the longest matching prefix.
//! A locale may only link into its own namespace, except for the root pages
//! of declared locales (the language switcher). Local links must be plain
//! rooted paths: no host part (`//host/...`) and no `.` or `..` segments.

use std::collections::HashSet;

use polydoc_data::{LinkEntry, LocaleDataSet};

use crate::composer::DeadLinkPolicy;
use crate::error::LinkError;
use crate::locale::LocaleInput;

/// Canonical prefixes of all composed locales.
pub(crate) struct Namespaces<'a> {
    prefixes: Vec<&'a str>,
}

impl<'a> Namespaces<'a> {
    pub(crate) fn new(prefixes: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            prefixes: prefixes.into_iter().collect(),
        }
    }

    /// Whether `path` is the root page of a declared locale.
    fn is_locale_root(&self, path: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| *prefix == path || prefix.strip_suffix('/') == Some(path))
    }

    /// Locale owning `path`: the longest prefix containing it.
    fn owner(&self, path: &str) -> Option<&'a str> {
        self.prefixes
            .iter()
            .copied()
            .filter(|prefix| path.starts_with(prefix))
            .max_by_key(|prefix| prefix.len())
    }
}

/// Check every link of one locale's theme.
///
/// `prefix` is the canonical prefix of `input`.
pub(crate) fn check_locale(
    prefix: &str,
    input: &LocaleInput,
    namespaces: &Namespaces<'_>,
    policy: DeadLinkPolicy,
) -> Result<(), LinkError> {
    let declared = match policy {
        DeadLinkPolicy::Strict => Some(declared_pages(&input.data)),
        DeadLinkPolicy::Ignore => None,
    };

    for entry in input.theme.links() {
        if entry.text().trim().is_empty() || entry.link().trim().is_empty() {
            return Err(LinkError::MalformedEntry {
                locale: prefix.to_owned(),
                text: entry.text().to_owned(),
                link: entry.link().to_owned(),
            });
        }
        if entry.is_external() {
            continue;
        }

        let path = strip_query(entry.link());
        if namespaces.is_locale_root(path) {
            continue;
        }
        if !is_plain_path(path) || namespaces.owner(path) != Some(prefix) {
            return Err(LinkError::NamespaceViolation {
                locale: prefix.to_owned(),
                text: entry.text().to_owned(),
                link: entry.link().to_owned(),
            });
        }
        if let Some(declared) = &declared
            && !declared.contains(page_key(entry.link()))
        {
            return Err(LinkError::DanglingLink {
                locale: prefix.to_owned(),
                text: entry.text().to_owned(),
                link: entry.link().to_owned(),
            });
        }
    }

    Ok(())
}

/// Page keys of all local links declared in a data set.
fn declared_pages(data: &LocaleDataSet) -> HashSet<&str> {
    data.links()
        .filter(|entry| !entry.is_external())
        .map(LinkEntry::link)
        .map(page_key)
        .collect()
}

/// Whether `path` names its target directly: no `//host` authority and no
/// dot segments that could climb out of a namespace.
fn is_plain_path(path: &str) -> bool {
    !path.starts_with("//") && !path.split('/').any(|segment| matches!(segment, "." | ".."))
}

/// Drop the query string and fragment.
fn strip_query(link: &str) -> &str {
    link.find(['?', '#']).map_or(link, |idx| &link[..idx])
}

/// Key under which a link's target page is matched.
///
/// `/en/guide/intro`, `/en/guide/intro.html`, `/en/guide/intro.md#setup`
/// and `/en/guide/intro/` all refer to the same page.
fn page_key(link: &str) -> &str {
    let path = strip_query(link);
    let path = path
        .strip_suffix(".html")
        .or_else(|| path.strip_suffix(".md"))
        .unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
