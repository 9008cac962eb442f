//! Data set files.
//!
//! A data file declares the locale prefix and its topics in order:
//!
//! ```toml
//! prefix = "/en/"
//!
//! [[topics]]
//! name = "guide"
//! links = [
//!     { text = "Introduce YalantingLibs", link = "/en/guide/what_is_yalantinglibs" },
//! ]
//! ```
//!
//! The same shape is accepted as YAML for `.yaml`/`.yml` files.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dataset::LocaleDataSet;
use crate::link::LinkEntry;

/// Error returned when a data set cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// I/O error reading a data file.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Data file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// TOML parsing error.
    #[error("TOML parse error in {}: {source}", path.display())]
    Toml {
        /// Data file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: toml::de::Error,
    },
    /// YAML parsing error.
    #[error("YAML parse error in {}: {source}", path.display())]
    Yaml {
        /// Data file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_yaml::Error,
    },
    /// File extension is neither TOML nor YAML.
    #[error("Unsupported data file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Builtin data set name not found in the selected version.
    #[error("Unknown builtin data set '{name}' in version '{version}'")]
    UnknownDataset {
        /// Requested data set name.
        name: String,
        /// Selected data version.
        version: String,
    },
}

/// Data file as parsed from disk.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DataFile {
    prefix: String,
    #[serde(default)]
    topics: Vec<TopicFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TopicFile {
    name: String,
    #[serde(default)]
    links: Vec<LinkEntry>,
}

impl From<DataFile> for LocaleDataSet {
    fn from(file: DataFile) -> Self {
        let mut data = LocaleDataSet::new(file.prefix);
        for topic in file.topics {
            data.push_topic(&topic.name, topic.links);
        }
        data
    }
}

/// Load a data set from a `.toml`, `.yaml` or `.yml` file.
///
/// Topics repeated in the file are merged in order of appearance.
///
/// # Errors
///
/// Returns [`DataError`] if the file cannot be read, has an unsupported
/// extension, or does not parse.
pub fn load_dataset(path: &Path) -> Result<LocaleDataSet, DataError> {
    let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data = parse_dataset(&content, path)?;

    tracing::debug!(
        path = %path.display(),
        prefix = %data.prefix(),
        topics = data.topics().len(),
        "Loaded data file"
    );

    Ok(data)
}

/// Parse data file `content`, choosing the format from `path`'s extension.
///
/// # Errors
///
/// Returns [`DataError`] for unsupported extensions or malformed content.
pub fn parse_dataset(content: &str, path: &Path) -> Result<LocaleDataSet, DataError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let file: DataFile = match extension {
        "toml" => toml::from_str(content).map_err(|source| DataError::Toml {
            path: path.to_path_buf(),
            source,
        })?,
        "yaml" | "yml" => serde_yaml::from_str(content).map_err(|source| DataError::Yaml {
            path: path.to_path_buf(),
            source,
        })?,
        _ => return Err(DataError::UnsupportedFormat(path.to_path_buf())),
    };
    Ok(file.into())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const TOML_DATA: &str = r#"
prefix = "/en/"

[[topics]]
name = "guide"
links = [
    { text = "Intro", link = "/en/guide/intro" },
    { text = "Install", link = "/en/guide/install" },
]

[[topics]]
name = "about"
links = [{ text = "Team", link = "/en/about/team" }]
"#;

    #[test]
    fn test_parse_toml_keeps_order() {
        let data = parse_dataset(TOML_DATA, Path::new("en.toml")).unwrap();

        assert_eq!(data.prefix(), "/en/");
        let names: Vec<_> = data.topics().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["guide", "about"]);
        assert_eq!(
            data.topic("guide").unwrap().links(),
            &[
                LinkEntry::new("Intro", "/en/guide/intro"),
                LinkEntry::new("Install", "/en/guide/install"),
            ]
        );
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "prefix: /zh/\ntopics:\n  - name: guide\n    links:\n      - text: 简介\n        link: /zh/guide/intro\n";

        let data = parse_dataset(yaml, Path::new("zh.yml")).unwrap();

        assert_eq!(data.prefix(), "/zh/");
        assert_eq!(
            data.topic("guide").unwrap().links(),
            &[LinkEntry::new("简介", "/zh/guide/intro")]
        );
    }

    #[test]
    fn test_repeated_topic_is_merged() {
        let toml = r#"
prefix = "/en/"

[[topics]]
name = "guide"
links = [{ text = "A", link = "/en/a" }]

[[topics]]
name = "about"

[[topics]]
name = "guide"
links = [{ text = "B", link = "/en/b" }]
"#;

        let data = parse_dataset(toml, Path::new("en.toml")).unwrap();

        assert_eq!(data.topics().len(), 2);
        let texts: Vec<_> = data
            .topic("guide")
            .unwrap()
            .links()
            .iter()
            .map(LinkEntry::text)
            .collect();
        assert_eq!(texts, vec!["A", "B"]);
    }

    #[test]
    fn test_missing_link_field_is_parse_error() {
        let toml = r#"
prefix = "/en/"

[[topics]]
name = "guide"
links = [{ text = "Intro" }]
"#;

        let err = parse_dataset(toml, Path::new("en.toml")).unwrap_err();

        assert!(matches!(err, DataError::Toml { .. }), "got {err:?}");
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let err = parse_dataset(TOML_DATA, Path::new("en.json")).unwrap_err();

        assert!(matches!(err, DataError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("en.json"));
    }

    #[test]
    fn test_load_dataset_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en.toml");
        std::fs::write(&path, TOML_DATA).unwrap();

        let data = load_dataset(&path).unwrap();

        assert_eq!(data.links().count(), 3);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_dataset(&dir.path().join("missing.toml")).unwrap_err();

        assert!(matches!(err, DataError::Io { .. }));
    }
}
