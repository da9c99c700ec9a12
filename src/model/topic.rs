//! Topic tree types.

use serde::Deserialize;

/// A node in the mind-map tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Stable identifier, referenced by relationships and summaries.
    #[serde(default)]
    pub id: String,
    /// Structure class XMind writes on each topic, usually `"topic"`.
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub notes: Option<Notes>,
    /// `None` when the document has no `labels` key at all.
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub children: Option<Children>,
    #[serde(default)]
    pub summaries: Vec<Summary>,
}

impl Topic {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_notes(mut self, notes: Notes) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Append an ordinary subtopic.
    pub fn with_attached(mut self, child: Topic) -> Self {
        self.children
            .get_or_insert_with(Children::default)
            .attached
            .push(child);
        self
    }

    /// Append a free-floating topic.
    pub fn with_detached(mut self, child: Topic) -> Self {
        self.children
            .get_or_insert_with(Children::default)
            .detached
            .push(child);
        self
    }

    pub fn attached(&self) -> &[Topic] {
        self.children.as_ref().map_or(&[][..], |c| c.attached.as_slice())
    }

    pub fn detached(&self) -> &[Topic] {
        self.children.as_ref().map_or(&[][..], |c| c.detached.as_slice())
    }

    /// Number of topics in this subtree, including `self`.
    ///
    /// Counts all three child partitions.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(topic) = stack.pop() {
            count += 1;
            if let Some(c) = &topic.children {
                stack.extend(c.attached.iter().chain(&c.detached).chain(&c.summary));
            }
        }
        count
    }
}

/// The three disjoint child partitions of a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Children {
    #[serde(default)]
    pub attached: Vec<Topic>,
    #[serde(default)]
    pub detached: Vec<Topic>,
    /// Topics that annotate a range of siblings.
    #[serde(default)]
    pub summary: Vec<Topic>,
}

/// Topic trees can be deeper than the stack allows for recursive drop glue,
/// so descendants are moved onto a heap worklist and released one by one.
impl Drop for Children {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.attached);
        pending.append(&mut self.detached);
        pending.append(&mut self.summary);

        while let Some(mut topic) = pending.pop() {
            if let Some(mut children) = topic.children.take() {
                pending.append(&mut children.attached);
                pending.append(&mut children.detached);
                pending.append(&mut children.summary);
            }
        }
    }
}

/// Pairs a range of sibling topics with the topic summarizing them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(default)]
    pub id: String,
    /// Sibling index range, e.g. `"(0,2)"`.
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub topic_id: String,
}

/// Freeform note attached to a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Notes {
    #[serde(default)]
    pub plain: Option<NoteContent>,
    #[serde(default, rename = "realHTML")]
    pub real_html: Option<NoteContent>,
}

impl Notes {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            plain: Some(NoteContent {
                content: content.into(),
            }),
            real_html: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoteContent {
    #[serde(default)]
    pub content: String,
}
