//! Theme configuration builder.
//!
//! The sidebar follows an explicit [`TopicOrder`]; nothing is inferred from
//! the order topics happen to be declared in. Items are copied verbatim:
//! no reordering, no deduplication.

use polydoc_data::{LinkEntry, LocaleDataSet};
use serde::{Deserialize, Serialize};

use crate::nav::NavItem;
use crate::sidebar::SidebarSection;

/// Derived navigation structures of one locale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    /// Top navigation bar, primary guide entry first.
    pub nav: Vec<NavItem>,
    /// Sidebar sections in topic order.
    pub sidebar: Vec<SidebarSection>,
}

impl ThemeConfig {
    /// Every link reachable from the nav and the sidebar.
    pub fn links(&self) -> impl Iterator<Item = &LinkEntry> {
        self.nav
            .iter()
            .flat_map(NavItem::links)
            .chain(self.sidebar.iter().flat_map(|s| s.items.iter()))
    }
}

/// Error returned when a theme cannot be built from a data set.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ThemeError {
    /// A required topic is not declared in the data set.
    #[error("Locale '{prefix}' is missing required topic '{topic}'")]
    MissingRequiredTopic {
        /// Locale prefix of the data set.
        prefix: String,
        /// Missing topic name.
        topic: String,
    },
    /// The primary nav topic is absent or has no entries.
    #[error("Locale '{prefix}' has no entries in primary topic '{topic}'")]
    MissingPrimaryTopic {
        /// Locale prefix of the data set.
        prefix: String,
        /// Primary topic name.
        topic: String,
    },
}

/// Sidebar placement of one topic.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "TopicSpecRaw")]
pub struct TopicSpec {
    /// Topic name in the data set.
    pub name: String,
    /// Section heading; the topic name when `None`.
    pub title: Option<String>,
    /// Whether the section can be folded.
    pub collapsible: bool,
}

impl TopicSpec {
    /// Collapsible section titled after the topic itself.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            collapsible: true,
        }
    }

    /// Set the section heading.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Section heading shown in the sidebar.
    #[must_use]
    pub fn heading(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

/// Accepts both `"guide"` and `{ name = "guide", title = "Guide" }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TopicSpecRaw {
    Name(String),
    Table(TopicSpecTable),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TopicSpecTable {
    name: String,
    title: Option<String>,
    #[serde(default = "default_collapsible")]
    collapsible: bool,
}

fn default_collapsible() -> bool {
    true
}

impl From<TopicSpecRaw> for TopicSpec {
    fn from(raw: TopicSpecRaw) -> Self {
        match raw {
            TopicSpecRaw::Name(name) => Self::new(name),
            TopicSpecRaw::Table(TopicSpecTable {
                name,
                title,
                collapsible,
            }) => Self {
                name,
                title,
                collapsible,
            },
        }
    }
}

/// Sidebar topic ordering policy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopicOrder {
    topics: Vec<TopicSpec>,
    required: Vec<String>,
}

impl TopicOrder {
    /// Order the sidebar by topic names, each titled after the topic.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_specs(names.into_iter().map(TopicSpec::new).collect())
    }

    /// Order the sidebar by explicit topic specs.
    #[must_use]
    pub fn from_specs(topics: Vec<TopicSpec>) -> Self {
        Self {
            topics,
            required: Vec::new(),
        }
    }

    /// Mark topics as mandatory: building fails when one is not declared.
    #[must_use]
    pub fn with_required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(names.into_iter().map(Into::into));
        self
    }

    /// Topic specs in sidebar order.
    #[must_use]
    pub fn topics(&self) -> &[TopicSpec] {
        &self.topics
    }

    /// Names of mandatory topics.
    #[must_use]
    pub fn required(&self) -> &[String] {
        &self.required
    }

    fn contains(&self, name: &str) -> bool {
        self.topics.iter().any(|t| t.name == name)
    }
}

/// Navigation bar options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavOptions {
    /// Topic whose first entry is the leading nav link.
    pub primary_topic: String,
    /// Label of the leading nav link.
    pub guide_text: String,
    /// Active-match pattern of the leading nav link.
    pub guide_active_match: Option<String>,
    /// Further topics linked from the nav (label, topic), each to its first entry.
    pub nav_topics: Vec<(String, String)>,
    /// Label of the language switcher group.
    pub language_text: String,
    /// Language switcher entries, one per locale root.
    pub languages: Vec<LinkEntry>,
    /// Trailing external links (e.g. the issue tracker).
    pub external_links: Vec<LinkEntry>,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            primary_topic: "guide".to_owned(),
            guide_text: "Guide".to_owned(),
            guide_active_match: None,
            nav_topics: Vec::new(),
            language_text: "Language".to_owned(),
            languages: Vec::new(),
            external_links: Vec::new(),
        }
    }
}

/// Builds a [`ThemeConfig`] from a [`LocaleDataSet`].
#[derive(Clone, Debug)]
pub struct ThemeConfigBuilder {
    order: TopicOrder,
    nav: NavOptions,
}

impl ThemeConfigBuilder {
    /// Create a builder with default nav options.
    #[must_use]
    pub fn new(order: TopicOrder) -> Self {
        Self {
            order,
            nav: NavOptions::default(),
        }
    }

    /// Replace the nav options.
    #[must_use]
    pub fn with_nav(mut self, nav: NavOptions) -> Self {
        self.nav = nav;
        self
    }

    /// Build the nav and sidebar of one locale.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MissingRequiredTopic`] if a required topic is not
    /// declared, or [`ThemeError::MissingPrimaryTopic`] if the primary topic
    /// has no entries.
    pub fn build(&self, data: &LocaleDataSet) -> Result<ThemeConfig, ThemeError> {
        if let Some(topic) = self
            .order
            .required
            .iter()
            .find(|name| data.topic(name).is_none())
        {
            return Err(ThemeError::MissingRequiredTopic {
                prefix: data.prefix().to_owned(),
                topic: topic.clone(),
            });
        }

        let nav = self.build_nav(data)?;
        let sidebar = self.build_sidebar(data);

        for topic in data.topics() {
            if !self.order.contains(topic.name()) {
                tracing::debug!(
                    prefix = %data.prefix(),
                    topic = %topic.name(),
                    "Topic not in sidebar order, skipped"
                );
            }
        }

        Ok(ThemeConfig { nav, sidebar })
    }

    fn build_nav(&self, data: &LocaleDataSet) -> Result<Vec<NavItem>, ThemeError> {
        let primary = data
            .topic(&self.nav.primary_topic)
            .and_then(|topic| topic.first())
            .ok_or_else(|| ThemeError::MissingPrimaryTopic {
                prefix: data.prefix().to_owned(),
                topic: self.nav.primary_topic.clone(),
            })?;

        let guide = LinkEntry::new(&self.nav.guide_text, primary.link());
        let mut nav = vec![match &self.nav.guide_active_match {
            Some(pattern) => NavItem::Active {
                entry: guide,
                active_match: pattern.clone(),
            },
            None => NavItem::Link(guide),
        }];

        for (label, topic) in &self.nav.nav_topics {
            match data.topic(topic).and_then(|t| t.first()) {
                Some(first) => nav.push(NavItem::Link(LinkEntry::new(label, first.link()))),
                None => tracing::debug!(
                    prefix = %data.prefix(),
                    topic = %topic,
                    "Nav topic has no entries, skipped"
                ),
            }
        }

        if self.nav.languages.len() > 1 {
            nav.push(NavItem::Group {
                text: self.nav.language_text.clone(),
                items: self.nav.languages.clone(),
            });
        }

        nav.extend(self.nav.external_links.iter().cloned().map(NavItem::Link));

        Ok(nav)
    }

    fn build_sidebar(&self, data: &LocaleDataSet) -> Vec<SidebarSection> {
        self.order
            .topics
            .iter()
            .map(|spec| {
                let items = match data.topic(&spec.name) {
                    Some(topic) => topic.links().to_vec(),
                    None => {
                        tracing::debug!(
                            prefix = %data.prefix(),
                            topic = %spec.name,
                            "Topic not declared, using empty section"
                        );
                        Vec::new()
                    }
                };
                let section = SidebarSection {
                    text: spec.heading().to_owned(),
                    collapsible: spec.collapsible,
                    items,
                };
                let duplicates = section.duplicate_links();
                if !duplicates.is_empty() {
                    tracing::warn!(
                        prefix = %data.prefix(),
                        topic = %spec.name,
                        links = ?duplicates,
                        "Sidebar section contains duplicate links"
                    );
                }
                section
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn english() -> LocaleDataSet {
        LocaleDataSet::new("/en/")
            .with_topic(
                "guide",
                [
                    LinkEntry::new("Intro", "/en/guide/intro"),
                    LinkEntry::new("Install", "/en/guide/install"),
                ],
            )
            .with_topic("coro_rpc", [LinkEntry::new("RPC", "/en/coro_rpc/intro")])
            .with_topic("about", [LinkEntry::new("Team", "/en/about/team")])
    }

    #[test]
    fn test_single_guide_topic() {
        let data = LocaleDataSet::new("/en/")
            .with_topic("guide", [LinkEntry::new("Intro", "/en/guide/intro")]);

        let theme = ThemeConfigBuilder::new(TopicOrder::new(["guide"]))
            .build(&data)
            .unwrap();

        assert_eq!(
            theme.nav,
            vec![NavItem::Link(LinkEntry::new("Guide", "/en/guide/intro"))]
        );
        assert_eq!(
            theme.sidebar,
            vec![SidebarSection {
                text: "guide".to_owned(),
                collapsible: true,
                items: vec![LinkEntry::new("Intro", "/en/guide/intro")],
            }]
        );
    }

    #[test]
    fn test_sidebar_follows_topic_order_not_declaration_order() {
        let order = TopicOrder::new(["about", "guide", "coro_rpc"]);

        let theme = ThemeConfigBuilder::new(order).build(&english()).unwrap();

        let headings: Vec<_> = theme.sidebar.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(headings, vec!["about", "guide", "coro_rpc"]);
        let guide: Vec<_> = theme.sidebar[1].items.iter().map(LinkEntry::text).collect();
        assert_eq!(guide, vec!["Intro", "Install"]);
    }

    #[test]
    fn test_topic_titles_and_collapsible_flags() {
        let order = TopicOrder::from_specs(vec![
            TopicSpec::new("guide").with_title("how to use?"),
            TopicSpec {
                collapsible: false,
                ..TopicSpec::new("about")
            },
        ]);

        let theme = ThemeConfigBuilder::new(order).build(&english()).unwrap();

        assert_eq!(theme.sidebar[0].text, "how to use?");
        assert!(theme.sidebar[0].collapsible);
        assert_eq!(theme.sidebar[1].text, "about");
        assert!(!theme.sidebar[1].collapsible);
    }

    #[test]
    fn test_absent_topic_yields_empty_section() {
        let order = TopicOrder::new(["guide", "metric"]);

        let theme = ThemeConfigBuilder::new(order).build(&english()).unwrap();

        assert_eq!(theme.sidebar.len(), 2);
        assert_eq!(theme.sidebar[1].text, "metric");
        assert!(theme.sidebar[1].items.is_empty());
    }

    #[test]
    fn test_absent_required_topic_is_error() {
        let order = TopicOrder::new(["guide", "metric"]).with_required(["metric"]);

        let err = ThemeConfigBuilder::new(order).build(&english()).unwrap_err();

        assert_eq!(
            err,
            ThemeError::MissingRequiredTopic {
                prefix: "/en/".to_owned(),
                topic: "metric".to_owned(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Locale '/en/' is missing required topic 'metric'"
        );
    }

    #[test]
    fn test_missing_primary_topic_is_error() {
        let data = LocaleDataSet::new("/en/").with_topic("about", []);

        let err = ThemeConfigBuilder::new(TopicOrder::new(["about"]))
            .build(&data)
            .unwrap_err();

        assert!(matches!(err, ThemeError::MissingPrimaryTopic { .. }));
    }

    #[test]
    fn test_duplicates_are_kept_verbatim() {
        let data = LocaleDataSet::new("/en/").with_topic(
            "guide",
            [
                LinkEntry::new("Intro", "/en/guide/intro"),
                LinkEntry::new("Intro", "/en/guide/intro"),
            ],
        );

        let theme = ThemeConfigBuilder::new(TopicOrder::new(["guide"]))
            .build(&data)
            .unwrap();

        assert_eq!(theme.sidebar[0].items.len(), 2);
    }

    #[test]
    fn test_full_nav_layout() {
        let nav = NavOptions {
            guide_text: "指南".to_owned(),
            nav_topics: vec![("About".to_owned(), "about".to_owned())],
            language_text: "语言".to_owned(),
            languages: vec![
                LinkEntry::new("English", "/en/"),
                LinkEntry::new("简体中文", "/zh/"),
            ],
            external_links: vec![LinkEntry::new(
                "Github Issues",
                "https://github.com/alibaba/yalantinglibs/issues",
            )],
            ..NavOptions::default()
        };

        let theme = ThemeConfigBuilder::new(TopicOrder::new(["guide"]))
            .with_nav(nav)
            .build(&english())
            .unwrap();

        let texts: Vec<_> = theme.nav.iter().map(NavItem::text).collect();
        assert_eq!(texts, vec!["指南", "About", "语言", "Github Issues"]);
        assert_eq!(theme.nav[0].links()[0].link(), "/en/guide/intro");
        assert_eq!(theme.nav[1].links()[0].link(), "/en/about/team");
        assert_eq!(theme.nav[2].links().len(), 2);
    }

    #[test]
    fn test_single_language_has_no_switcher() {
        let nav = NavOptions {
            languages: vec![LinkEntry::new("English", "/en/")],
            ..NavOptions::default()
        };

        let theme = ThemeConfigBuilder::new(TopicOrder::new(["guide"]))
            .with_nav(nav)
            .build(&english())
            .unwrap();

        assert_eq!(theme.nav.len(), 1);
    }

    #[test]
    fn test_empty_nav_topic_is_skipped() {
        let nav = NavOptions {
            nav_topics: vec![("Metric".to_owned(), "metric".to_owned())],
            ..NavOptions::default()
        };

        let theme = ThemeConfigBuilder::new(TopicOrder::new(["guide"]))
            .with_nav(nav)
            .build(&english())
            .unwrap();

        assert_eq!(theme.nav.len(), 1);
    }

    #[test]
    fn test_theme_links_cover_nav_and_sidebar() {
        let theme = ThemeConfigBuilder::new(TopicOrder::new(["guide", "about"]))
            .build(&english())
            .unwrap();

        let links: Vec<_> = theme.links().map(LinkEntry::link).collect();
        assert_eq!(
            links,
            vec![
                "/en/guide/intro",
                "/en/guide/intro",
                "/en/guide/install",
                "/en/about/team",
            ]
        );
    }

    #[test]
    fn test_topic_spec_deserializes_from_name_or_table() {
        #[derive(Deserialize)]
        struct Wrapper {
            topics: Vec<TopicSpec>,
        }

        let wrapper: Wrapper = toml::from_str(
            r#"topics = ["guide", { name = "about", title = "About", collapsible = false }]"#,
        )
        .unwrap();

        assert_eq!(wrapper.topics[0], TopicSpec::new("guide"));
        assert_eq!(wrapper.topics[1].heading(), "About");
        assert!(!wrapper.topics[1].collapsible);
    }

    #[test]
    fn test_topic_spec_rejects_misspelled_key() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            #[allow(dead_code)]
            topics: Vec<TopicSpec>,
        }

        let result: Result<Wrapper, _> =
            toml::from_str(r#"topics = [{ name = "about", colapsible = false }]"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_guide_link_with_active_match() {
        let nav = NavOptions {
            guide_active_match: Some("/guide/".to_owned()),
            ..NavOptions::default()
        };

        let theme = ThemeConfigBuilder::new(TopicOrder::new(["guide"]))
            .with_nav(nav)
            .build(&english())
            .unwrap();

        assert_eq!(
            theme.nav[0],
            NavItem::Active {
                entry: LinkEntry::new("Guide", "/en/guide/intro"),
                active_match: "/guide/".to_owned(),
            }
        );
    }
}
