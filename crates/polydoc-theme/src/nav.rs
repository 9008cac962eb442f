//! Top navigation items.

use polydoc_data::LinkEntry;
use serde::Serialize;

/// Navigation bar item: a single link or a labeled dropdown of links.
///
/// Serializes untagged, as `{text, link}`, `{text, link, activeMatch}` or
/// `{text, items}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Single link.
    Link(LinkEntry),
    /// Link highlighted while the current path matches `active_match`.
    Active {
        /// Target entry.
        #[serde(flatten)]
        entry: LinkEntry,
        /// Path pattern the generator tests the current page against.
        #[serde(rename = "activeMatch")]
        active_match: String,
    },
    /// Dropdown group.
    Group {
        /// Group label.
        text: String,
        /// Links in display order.
        items: Vec<LinkEntry>,
    },
}

impl NavItem {
    /// Display text of the item or group.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Link(entry) | Self::Active { entry, .. } => entry.text(),
            Self::Group { text, .. } => text,
        }
    }

    /// Every link reachable from this item.
    #[must_use]
    pub fn links(&self) -> &[LinkEntry] {
        match self {
            Self::Link(entry) | Self::Active { entry, .. } => std::slice::from_ref(entry),
            Self::Group { items, .. } => items,
        }
    }
}
