//! Topic tree → Markdown rendering.
//!
//! The root topic becomes the `#` title. Its children fill two heading
//! tiers (`##`, `###`); everything deeper becomes an indented bullet list.
//! Attached children are rendered first, then the detached (free-floating)
//! children as a second group using the same tiers.
//!
//! Output is a flat sequence of fragments whose concatenation is the
//! document. No I/O is performed here.

use crate::model::{Sheet, Topic};

use super::annotate::{Annotations, Stubs, render_labels};
use super::prefix::{LIST_BASE_LEVEL, indent_prefix};

/// Label level used for the root topic.
const ROOT_LEVEL: usize = 0;

/// Depth below the document title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// `##` headings (level 2).
    Section,
    /// `###` headings (level 3).
    Subsection,
    /// Bullet items at the given level (4 or deeper).
    List(usize),
}

impl Tier {
    /// Map a heading-equivalent level to its tier.
    ///
    /// Levels 0 and 1 belong to the root and have no tier.
    pub fn from_level(level: usize) -> Option<Self> {
        match level {
            2 => Some(Tier::Section),
            3 => Some(Tier::Subsection),
            l if l >= LIST_BASE_LEVEL => Some(Tier::List(l)),
            _ => None,
        }
    }

    pub fn level(self) -> usize {
        match self {
            Tier::Section => 2,
            Tier::Subsection => 3,
            Tier::List(level) => level,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tier::Section => Tier::Subsection,
            Tier::Subsection => Tier::List(LIST_BASE_LEVEL),
            Tier::List(level) => Tier::List(level + 1),
        }
    }

    fn heading_marker(self) -> Option<&'static str> {
        match self {
            Tier::Section => Some("##"),
            Tier::Subsection => Some("###"),
            Tier::List(_) => None,
        }
    }
}

/// Which child partition a heading tier walks.
///
/// The list tier always walks attached children, whichever branch led to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Attached,
    Detached,
}

impl Branch {
    pub fn select(self, topic: &Topic) -> &[Topic] {
        match self {
            Branch::Attached => topic.attached(),
            Branch::Detached => topic.detached(),
        }
    }
}

/// Renders sheets to Markdown fragments.
///
/// Content without a rendering yet (notes, summaries, relationships) is
/// delegated to an [`Annotations`] implementation, [`Stubs`] by default.
#[derive(Debug, Clone, Default)]
pub struct SheetRenderer<A = Stubs> {
    annotations: A,
}

impl SheetRenderer {
    /// Create a renderer with the default (empty) annotations.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A: Annotations> SheetRenderer<A> {
    /// Create a renderer with custom annotations.
    pub fn with_annotations(annotations: A) -> Self {
        Self { annotations }
    }

    /// Render a whole sheet.
    pub fn render(&self, sheet: &Sheet) -> Vec<String> {
        let root: &Topic = &sheet.root_topic;
        let mut out = Vec::new();

        out.push(format!("# {}\n", root.title));
        out.extend(render_labels(root.labels.as_deref(), ROOT_LEVEL));
        out.extend(self.annotations.notes(root.notes.as_ref(), ROOT_LEVEL));

        self.render_headings(root, Branch::Attached, Tier::Section, &mut out);
        self.render_headings(root, Branch::Detached, Tier::Section, &mut out);

        out.extend(self.annotations.relationships(sheet));
        out
    }

    /// Render the children of `parent` at heading level 2 or 3.
    ///
    /// Any other level renders nothing; bullet-list levels are only reached
    /// from the heading above them.
    pub fn render_level(&self, parent: &Topic, branch: Branch, level: usize) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(tier @ (Tier::Section | Tier::Subsection)) = Tier::from_level(level) {
            self.render_headings(parent, branch, tier, &mut out);
        }
        out
    }

    /// Render the children of `parent` selected by `branch` as headings at
    /// `tier`, followed by all of their descendants.
    fn render_headings(&self, parent: &Topic, branch: Branch, tier: Tier, out: &mut Vec<String>) {
        let Some(marker) = tier.heading_marker() else {
            return;
        };
        let level = tier.level();

        for topic in branch.select(parent) {
            out.push(format!("\n{marker} {}\n", topic.title));
            out.extend(render_labels(topic.labels.as_deref(), level));
            out.extend(self.annotations.notes(topic.notes.as_ref(), level));
            out.extend(self.annotations.summaries(topic, level));

            match tier.next() {
                // Detached grouping only spans the heading tiers.
                Tier::List(level) => self.render_list(topic, level, out),
                next => self.render_headings(topic, branch, next, out),
            }
        }
    }

    /// Render the attached descendants of `parent` as a bullet list whose
    /// first tier sits at `level`.
    ///
    /// Walks an explicit stack, so depth is limited only by memory.
    fn render_list(&self, parent: &Topic, level: usize, out: &mut Vec<String>) {
        let mut stack: Vec<(&Topic, usize)> =
            parent.attached().iter().rev().map(|t| (t, level)).collect();

        while let Some((topic, level)) = stack.pop() {
            out.push(indent_prefix(level, "*"));
            out.push(topic.title.clone());
            out.push("\n".to_string());

            stack.extend(topic.attached().iter().rev().map(|t| (t, level + 1)));
        }
    }
}

/// Render a single sheet to Markdown fragments with the default renderer.
///
/// # Examples
///
/// ```
/// use xmind2md::markdown::render_sheet;
/// use xmind2md::model::{Sheet, Topic};
///
/// let sheet = Sheet::new("Plan", Topic::new("Root").with_attached(Topic::new("A")));
/// assert_eq!(render_sheet(&sheet).concat(), "# Root\n\n## A\n");
/// ```
pub fn render_sheet(sheet: &Sheet) -> Vec<String> {
    SheetRenderer::new().render(sheet)
}
