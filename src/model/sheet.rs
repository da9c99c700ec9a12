//! Sheet-level types: one independent mind map per sheet.

use std::ops::Deref;

use serde::Deserialize;

use super::topic::Topic;

/// One independent document within an XMind file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub title: String,
    pub root_topic: RootTopic,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl Sheet {
    pub fn new(title: impl Into<String>, root: Topic) -> Self {
        Self {
            title: title.into(),
            root_topic: RootTopic::new(root),
            ..Self::default()
        }
    }
}

/// The single central topic of a sheet.
///
/// Derefs to its [`Topic`]. The topic's `class` is lifted onto the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Topic")]
pub struct RootTopic {
    pub topic: Topic,
    pub class: String,
}

impl RootTopic {
    pub fn new(topic: Topic) -> Self {
        let mut root = Self::from(topic);
        if root.class.is_empty() {
            root.class = "topic".to_string();
        }
        root
    }
}

impl From<Topic> for RootTopic {
    fn from(mut topic: Topic) -> Self {
        let class = std::mem::take(&mut topic.class);
        Self { topic, class }
    }
}

impl Deref for RootTopic {
    type Target = Topic;

    fn deref(&self) -> &Topic {
        &self.topic
    }
}

/// A free-form edge between two topics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub end1_id: String,
    #[serde(default)]
    pub end2_id: String,
}
