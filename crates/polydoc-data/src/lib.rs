//! Per-locale link declarations for polydoc.
//!
//! A [`LocaleDataSet`] holds the ordered link groups ("topics") of one
//! locale. Data sets come from two places:
//!
//! - versioned builtin modules, selected with [`DataVersion`] and looked up
//!   by name via [`builtin::dataset`]
//! - data files on disk (TOML or YAML), loaded with [`load_dataset`]
//!
//! # Example
//!
//! ```
//! use polydoc_data::{LinkEntry, LocaleDataSet};
//!
//! let mut data = LocaleDataSet::new("/en/");
//! data.push_link("guide", LinkEntry::new("Intro", "/en/guide/intro"));
//! data.push_link("guide", LinkEntry::new("Install", "/en/guide/install"));
//!
//! let guide = data.topic("guide").unwrap();
//! assert_eq!(guide.links()[0].text(), "Intro");
//! ```

pub mod builtin;
mod dataset;
mod file;
mod link;

pub use builtin::DataVersion;
pub use dataset::{LocaleDataSet, Topic};
pub use file::{DataError, load_dataset, parse_dataset};
pub use link::{LinkEntry, is_absolute_url};
