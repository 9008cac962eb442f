//! Locale data sets.
//!
//! A [`LocaleDataSet`] is append-only: adding a topic or an entry never
//! reorders what was declared before it.

use crate::link::LinkEntry;

/// Ordered link group of one locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topic {
    name: String,
    links: Vec<LinkEntry>,
}

impl Topic {
    /// Topic name (e.g. "guide", "`coro_rpc`").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in declaration order.
    #[must_use]
    pub fn links(&self) -> &[LinkEntry] {
        &self.links
    }

    /// First declared entry, if any.
    #[must_use]
    pub fn first(&self) -> Option<&LinkEntry> {
        self.links.first()
    }
}

/// Authoritative link declarations of one locale, grouped by topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleDataSet {
    prefix: String,
    topics: Vec<Topic>,
}

impl LocaleDataSet {
    /// Create an empty data set scoped to `prefix` (e.g. `/en/`, `/`).
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            topics: Vec::new(),
        }
    }

    /// Locale prefix as declared.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Append one entry to `topic`, creating the topic at the end if needed.
    pub fn push_link(&mut self, topic: &str, entry: LinkEntry) {
        self.topic_mut(topic).links.push(entry);
    }

    /// Append entries to `topic`, creating the topic at the end if needed.
    pub fn push_topic(&mut self, topic: &str, entries: impl IntoIterator<Item = LinkEntry>) {
        self.topic_mut(topic).links.extend(entries);
    }

    /// Builder-style variant of [`push_topic`](Self::push_topic).
    #[must_use]
    pub fn with_topic(mut self, topic: &str, entries: impl IntoIterator<Item = LinkEntry>) -> Self {
        self.push_topic(topic, entries);
        self
    }

    /// Look up a topic by name.
    #[must_use]
    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name == name)
    }

    /// Topics in declaration order.
    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// All entries of all topics, topic by topic.
    pub fn links(&self) -> impl Iterator<Item = &LinkEntry> {
        self.topics.iter().flat_map(|t| t.links.iter())
    }

    /// Whether the data set declares no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.iter().all(|t| t.links.is_empty())
    }

    fn topic_mut(&mut self, name: &str) -> &mut Topic {
        let idx = match self.topics.iter().position(|t| t.name == name) {
            Some(idx) => idx,
            None => {
                self.topics.push(Topic {
                    name: name.to_owned(),
                    links: Vec::new(),
                });
                self.topics.len() - 1
            }
        };
        &mut self.topics[idx]
    }
}
