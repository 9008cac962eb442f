//! Builtin data modules.
//!
//! Each [`DataVersion`] is a complete, self-consistent set of locale data
//! sets. The version is selected once at load time; datasets of different
//! versions are never mixed.

mod current;
mod legacy;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::dataset::LocaleDataSet;
use crate::file::DataError;
use crate::link::LinkEntry;

/// Version of the builtin data modules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataVersion {
    /// Per-topic link modules (guide, `struct_pb`, `struct_pack`, `coro_rpc`, about, ...).
    #[default]
    Current,
    /// Single guide sidebar with `/guide/` pages only.
    Legacy,
}

impl DataVersion {
    /// Names of the data sets available in this version.
    #[must_use]
    pub fn dataset_names(self) -> &'static [&'static str] {
        match self {
            Self::Current => current::NAMES,
            Self::Legacy => legacy::NAMES,
        }
    }
}

impl fmt::Display for DataVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => f.write_str("current"),
            Self::Legacy => f.write_str("legacy"),
        }
    }
}

impl FromStr for DataVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current" => Ok(Self::Current),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!(
                "unknown data version '{other}' (expected 'current' or 'legacy')"
            )),
        }
    }
}

/// Look up the builtin data set `name` in `version`.
///
/// # Errors
///
/// Returns [`DataError::UnknownDataset`] if the version has no such data set.
pub fn dataset(version: DataVersion, name: &str) -> Result<LocaleDataSet, DataError> {
    let data = match version {
        DataVersion::Current => current::dataset(name),
        DataVersion::Legacy => legacy::dataset(name),
    };
    data.ok_or_else(|| DataError::UnknownDataset {
        name: name.to_owned(),
        version: version.to_string(),
    })
}

/// Turn `(text, link)` pairs into entries.
fn links(entries: &[(&str, &str)]) -> Vec<LinkEntry> {
    entries
        .iter()
        .map(|&(text, link)| LinkEntry::new(text, link))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_dataset_resolves() {
        for version in [DataVersion::Current, DataVersion::Legacy] {
            for name in version.dataset_names() {
                let data = dataset(version, name).unwrap();
                assert!(!data.is_empty(), "{version}/{name} is empty");
            }
        }
    }

    #[test]
    fn test_unknown_dataset_is_error() {
        let err = dataset(DataVersion::Current, "fr").unwrap_err();

        assert!(matches!(err, DataError::UnknownDataset { .. }));
        assert_eq!(
            err.to_string(),
            "Unknown builtin data set 'fr' in version 'current'"
        );
    }

    #[test]
    fn test_local_links_stay_under_dataset_prefix() {
        for version in [DataVersion::Current, DataVersion::Legacy] {
            for name in version.dataset_names() {
                let data = dataset(version, name).unwrap();
                for entry in data.links().filter(|e| !e.is_external()) {
                    assert!(
                        entry.link().starts_with(data.prefix()),
                        "{version}/{name}: {} escapes {}",
                        entry.link(),
                        data.prefix()
                    );
                }
            }
        }
    }

    #[test]
    fn test_current_english_topic_order() {
        let data = dataset(DataVersion::Current, "en").unwrap();

        let names: Vec<_> = data.topics().iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec!["guide", "struct_pb", "struct_pack", "coro_rpc", "about"]
        );
    }

    #[test]
    fn test_current_chinese_has_extra_topics() {
        let data = dataset(DataVersion::Current, "zh").unwrap();

        for topic in ["easylog", "coro_http", "struct_xxx", "metric"] {
            assert!(data.topic(topic).is_some(), "missing {topic}");
        }
    }

    #[test]
    fn test_version_parse_and_display() {
        assert_eq!("legacy".parse::<DataVersion>(), Ok(DataVersion::Legacy));
        assert_eq!(DataVersion::Current.to_string(), "current");
        assert!("v3".parse::<DataVersion>().is_err());
    }
}
