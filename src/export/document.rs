//! Named Markdown documents built from sheets.

use std::io::{self, Write};

use tracing::debug;

use crate::markdown::SheetRenderer;
use crate::model::Sheet;

/// One rendered sheet, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownDocument {
    /// `<sheet title><sheet index>`.
    pub name: String,
    pub fragments: Vec<String>,
}

impl MarkdownDocument {
    /// Output file name: the document name plus `.md`.
    ///
    /// The name is not sanitized; titles containing path separators or
    /// characters the filesystem rejects are passed through as-is.
    pub fn file_name(&self) -> String {
        format!("{}.md", self.name)
    }

    /// The full document text.
    pub fn content(&self) -> String {
        self.fragments.concat()
    }

    /// Write every fragment, in order, to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for fragment in &self.fragments {
            writer.write_all(fragment.as_bytes())?;
        }
        Ok(())
    }
}

/// Render every sheet into a named document, preserving sheet order.
///
/// Names are the sheet title followed by its index, so sheets sharing a
/// title still get distinct documents.
///
/// # Examples
///
/// ```
/// use xmind2md::export::to_markdown;
/// use xmind2md::model::{Sheet, Topic};
///
/// let sheets = vec![
///     Sheet::new("Plan", Topic::new("Root")),
///     Sheet::new("Plan", Topic::new("Other")),
/// ];
/// let docs = to_markdown(&sheets);
/// assert_eq!(docs[0].file_name(), "Plan0.md");
/// assert_eq!(docs[1].file_name(), "Plan1.md");
/// ```
pub fn to_markdown(sheets: &[Sheet]) -> Vec<MarkdownDocument> {
    render_documents(&SheetRenderer::new(), sheets)
}

/// Like [`to_markdown`], with a caller-supplied renderer.
pub fn render_documents<A>(renderer: &SheetRenderer<A>, sheets: &[Sheet]) -> Vec<MarkdownDocument>
where
    A: crate::markdown::Annotations,
{
    sheets
        .iter()
        .enumerate()
        .map(|(index, sheet)| {
            let name = format!("{}{}", sheet.title, index);
            let fragments = renderer.render(sheet);
            debug!("rendered {name} ({} fragments)", fragments.len());
            MarkdownDocument { name, fragments }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Topic;

    #[test]
    fn test_document_names_follow_sheet_order() {
        let sheets = vec![
            Sheet::new("Alpha", Topic::new("A")),
            Sheet::new("Beta", Topic::new("B")),
            Sheet::new("Alpha", Topic::new("C")),
        ];
        let names: Vec<_> = to_markdown(&sheets).into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Alpha0", "Beta1", "Alpha2"]);
    }

    #[test]
    fn test_content_is_fragment_concatenation() {
        let sheets = vec![Sheet::new("S", Topic::new("Root").with_attached(Topic::new("A")))];
        let doc = &to_markdown(&sheets)[0];

        assert_eq!(doc.content(), "# Root\n\n## A\n");

        let mut buf = Vec::new();
        doc.write_to(&mut buf).unwrap();
        assert_eq!(buf, doc.content().into_bytes());
    }

    #[test]
    fn test_no_sheets() {
        assert!(to_markdown(&[]).is_empty());
    }

    #[test]
    fn test_title_not_sanitized() {
        let sheets = vec![Sheet::new("a/b", Topic::new("R"))];
        assert_eq!(to_markdown(&sheets)[0].file_name(), "a/b0.md");
    }
}
