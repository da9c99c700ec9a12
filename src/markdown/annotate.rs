//! Per-topic annotations: labels, notes, summaries, relationships.
//!
//! Labels are rendered. Notes, summaries, and relationships currently
//! produce nothing; each has one override point on [`Annotations`] so
//! rendering for them can be added without touching the traversal.

use crate::model::{Notes, Sheet, Topic};

use super::prefix::indent_prefix;

/// Highlight delimiter wrapped around each label.
const HIGHLIGHT: &str = "==";

/// Render a topic's labels as one indented line.
///
/// `None` yields no fragments at all. Any present sequence, even an empty
/// one, yields the prefix, the `==label==` items joined by `, `, and a
/// newline. The input is never modified.
///
/// # Examples
///
/// ```
/// use xmind2md::markdown::render_labels;
///
/// let labels = vec!["urgent".to_string(), "q3".to_string()];
/// assert_eq!(render_labels(Some(labels.as_slice()), 2).concat(), "\n  ==urgent==, ==q3==\n");
/// assert!(render_labels(None, 2).is_empty());
/// ```
pub fn render_labels(labels: Option<&[String]>, level: usize) -> Vec<String> {
    let Some(labels) = labels else {
        return Vec::new();
    };

    let highlighted: Vec<String> = labels
        .iter()
        .map(|label| format!("{HIGHLIGHT}{label}{HIGHLIGHT}"))
        .collect();

    vec![
        indent_prefix(level, " "),
        highlighted.join(", "),
        "\n".to_string(),
    ]
}

/// Extension points for content the renderer does not emit yet.
///
/// Every method defaults to producing no fragments.
pub trait Annotations {
    /// Fragments for a topic's note block, placed right after its label line.
    fn notes(&self, _notes: Option<&Notes>, _level: usize) -> Vec<String> {
        Vec::new()
    }

    /// Fragments for the summaries owned by a heading-tier topic, placed
    /// after its note block.
    fn summaries(&self, _topic: &Topic, _level: usize) -> Vec<String> {
        Vec::new()
    }

    /// Fragments for the sheet's relationships, appended to the document.
    fn relationships(&self, _sheet: &Sheet) -> Vec<String> {
        Vec::new()
    }
}

/// The default [`Annotations`]: renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stubs;

impl Annotations for Stubs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_label() {
        let labels = vec!["x".to_string()];
        assert_eq!(render_labels(Some(labels.as_slice()), 2).concat(), "\n  ==x==\n");
    }

    #[test]
    fn test_empty_labels_still_emit_line() {
        assert_eq!(render_labels(Some(&[][..]), 3).concat(), "\n  \n");
    }

    #[test]
    fn test_labels_not_mutated() {
        let labels = vec!["a".to_string(), "b".to_string()];
        let first = render_labels(Some(labels.as_slice()), 2);
        let second = render_labels(Some(labels.as_slice()), 2);

        assert_eq!(first, second);
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[test]
    fn test_labels_indent_with_level() {
        let labels = vec!["deep".to_string()];
        assert_eq!(render_labels(Some(labels.as_slice()), 6).concat(), "\n      ==deep==\n");
    }

    #[test]
    fn test_stubs_render_nothing() {
        let topic = Topic::new("T").with_notes(Notes::plain("hidden"));
        let sheet = Sheet::new("S", topic.clone());

        assert!(Stubs.notes(topic.notes.as_ref(), 2).is_empty());
        assert!(Stubs.summaries(&topic, 2).is_empty());
        assert!(Stubs.relationships(&sheet).is_empty());
    }
}
