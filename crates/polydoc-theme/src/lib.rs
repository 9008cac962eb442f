//! Navigation and sidebar building for polydoc.
//!
//! [`ThemeConfigBuilder`] turns one [`LocaleDataSet`](polydoc_data::LocaleDataSet)
//! into a [`ThemeConfig`]: the top navigation bar and the sidebar sections of
//! that locale.
//!
//! # Example
//!
//! ```
//! use polydoc_data::{LinkEntry, LocaleDataSet};
//! use polydoc_theme::{NavItem, ThemeConfigBuilder, TopicOrder};
//!
//! let data = LocaleDataSet::new("/en/")
//!     .with_topic("guide", [LinkEntry::new("Intro", "/en/guide/intro")]);
//!
//! let theme = ThemeConfigBuilder::new(TopicOrder::new(["guide"]))
//!     .build(&data)
//!     .unwrap();
//!
//! assert_eq!(
//!     theme.nav[0],
//!     NavItem::Link(LinkEntry::new("Guide", "/en/guide/intro"))
//! );
//! assert_eq!(theme.sidebar[0].text, "guide");
//! ```

mod builder;
mod nav;
mod sidebar;

pub use builder::{NavOptions, ThemeConfig, ThemeConfigBuilder, ThemeError, TopicOrder, TopicSpec};
pub use nav::NavItem;
pub use sidebar::SidebarSection;
