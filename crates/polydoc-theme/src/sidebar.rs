//! Sidebar sections.

use std::collections::HashSet;

use polydoc_data::LinkEntry;
use serde::Serialize;

/// Named, ordered group of links shown in a locale's sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarSection {
    /// Section heading.
    pub text: String,
    /// Whether the section can be folded.
    pub collapsible: bool,
    /// Links in display order.
    pub items: Vec<LinkEntry>,
}

impl SidebarSection {
    /// Links that appear more than once in this section, in first-seen order.
    #[must_use]
    pub fn duplicate_links(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.items.len());
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for link in self.items.iter().map(LinkEntry::link) {
            if !seen.insert(link) && reported.insert(link) {
                duplicates.push(link);
            }
        }
        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(items: Vec<LinkEntry>) -> SidebarSection {
        SidebarSection {
            text: "guide".to_owned(),
            collapsible: true,
            items,
        }
    }

    #[test]
    fn test_serialization_keeps_item_order() {
        let section = section(vec![
            LinkEntry::new("B", "/en/b"),
            LinkEntry::new("A", "/en/a"),
        ]);

        let json = serde_json::to_value(&section).unwrap();

        assert_eq!(json["text"], "guide");
        assert_eq!(json["collapsible"], true);
        assert_eq!(json["items"][0]["text"], "B");
        assert_eq!(json["items"][1]["text"], "A");
    }

    #[test]
    fn test_no_duplicates() {
        let section = section(vec![
            LinkEntry::new("A", "/en/a"),
            LinkEntry::new("B", "/en/b"),
        ]);

        assert!(section.duplicate_links().is_empty());
    }

    #[test]
    fn test_duplicates_reported_once() {
        let section = section(vec![
            LinkEntry::new("A", "/en/a"),
            LinkEntry::new("A again", "/en/a"),
            LinkEntry::new("B", "/en/b"),
            LinkEntry::new("A third", "/en/a"),
        ]);

        assert_eq!(section.duplicate_links(), vec!["/en/a"]);
    }
}
