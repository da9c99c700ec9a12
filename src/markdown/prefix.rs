//! Indentation for list-tier lines and label lines.

/// First level rendered as a bullet list instead of a heading.
pub const LIST_BASE_LEVEL: usize = 4;

/// One unit of list indentation.
const INDENT_UNIT: &str = "  ";

/// Build the line prefix for a topic at `level`.
///
/// The prefix is a newline, `level - 4` two-space indent units (none for
/// levels at or below 4), the `marker`, and a single space.
///
/// # Examples
///
/// ```
/// use xmind2md::markdown::indent_prefix;
///
/// assert_eq!(indent_prefix(4, "*"), "\n* ");
/// assert_eq!(indent_prefix(6, "*"), "\n    * ");
/// assert_eq!(indent_prefix(2, " "), "\n  ");
/// ```
pub fn indent_prefix(level: usize, marker: &str) -> String {
    let depth = level.saturating_sub(LIST_BASE_LEVEL);
    let mut prefix = String::with_capacity(1 + depth * INDENT_UNIT.len() + marker.len() + 1);
    prefix.push('\n');
    prefix.push_str(&INDENT_UNIT.repeat(depth));
    prefix.push_str(marker);
    prefix.push(' ');
    prefix
}
