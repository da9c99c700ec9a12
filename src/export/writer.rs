//! Writing Markdown documents to disk.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};

use super::document::MarkdownDocument;

/// Buffer size for each output file.
const WRITE_BUFFER_SIZE: usize = 5 * 1024;

/// Configuration for [`MarkdownWriter`].
#[derive(Debug, Clone, Default)]
pub struct WriterConfig {
    /// Stop at the first file that cannot be written instead of
    /// continuing with the rest.
    pub fail_fast: bool,
}

/// Outcome of writing a batch of documents.
#[derive(Debug, Default)]
pub struct WriteReport {
    /// Files written successfully, in document order.
    pub written: Vec<PathBuf>,
    /// One [`Error::Write`] per file that could not be written.
    pub failures: Vec<Error>,
}

impl WriteReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Writes one `.md` file per document into a directory.
///
/// Existing files with the same name are replaced.
///
/// # Example
///
/// ```no_run
/// use xmind2md::export::{MarkdownWriter, to_markdown};
///
/// let sheets = xmind2md::read_xmind("map.xmind")?;
/// let report = MarkdownWriter::new().write_all("out", &to_markdown(&sheets))?;
/// println!("{} written, {} failed", report.written.len(), report.failures.len());
/// # Ok::<(), xmind2md::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkdownWriter {
    config: WriterConfig,
}

impl MarkdownWriter {
    /// Create a MarkdownWriter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MarkdownWriter with the specified configuration.
    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Write every document into `dir`.
    ///
    /// Per-file failures are collected in the report. With
    /// [`WriterConfig::fail_fast`] the first one is returned as an error
    /// instead and the remaining documents are skipped.
    pub fn write_all<P: AsRef<Path>>(
        &self,
        dir: P,
        documents: &[MarkdownDocument],
    ) -> Result<WriteReport> {
        let dir = dir.as_ref();
        let mut report = WriteReport::default();

        for document in documents {
            let path = dir.join(document.file_name());
            match write_document(&path, document) {
                Ok(()) => {
                    debug!("wrote {}", path.display());
                    report.written.push(path);
                }
                Err(source) => {
                    let err = Error::Write { path, source };
                    if self.config.fail_fast {
                        return Err(err);
                    }
                    warn!("{err}");
                    report.failures.push(err);
                }
            }
        }

        Ok(report)
    }
}

fn write_document(path: &Path, document: &MarkdownDocument) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => debug!("replacing {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);
    document.write_to(&mut writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn doc(name: &str, body: &str) -> MarkdownDocument {
        MarkdownDocument {
            name: name.to_string(),
            fragments: vec![format!("# {name}\n"), body.to_string()],
        }
    }

    #[test]
    fn test_write_all() {
        let dir = TempDir::new().unwrap();
        let docs = vec![doc("One0", "\n## A\n"), doc("Two1", "")];

        let report = MarkdownWriter::new().write_all(dir.path(), &docs).unwrap();

        assert!(report.is_success());
        assert_eq!(report.written.len(), 2);
        assert_eq!(
            fs::read_to_string(dir.path().join("One0.md")).unwrap(),
            "# One0\n\n## A\n"
        );
        assert_eq!(fs::read_to_string(dir.path().join("Two1.md")).unwrap(), "# Two1\n");
    }

    #[test]
    fn test_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Doc0.md");
        fs::write(&path, "stale content that is longer than the new one").unwrap();

        MarkdownWriter::new()
            .write_all(dir.path(), &[doc("Doc0", "")])
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# Doc0\n");
    }

    #[test]
    fn test_continues_past_failures() {
        let dir = TempDir::new().unwrap();
        // The parent directory of "missing/Bad0.md" does not exist.
        let docs = vec![doc("missing/Bad0", ""), doc("Good1", "")];

        let report = MarkdownWriter::new().write_all(dir.path(), &docs).unwrap();

        assert!(!report.is_success());
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0], Error::Write { .. }));
        assert_eq!(report.written, vec![dir.path().join("Good1.md")]);
    }

    #[test]
    fn test_fail_fast() {
        let dir = TempDir::new().unwrap();
        let docs = vec![doc("missing/Bad0", ""), doc("Good1", "")];

        let writer = MarkdownWriter::with_config(WriterConfig { fail_fast: true });
        let err = writer.write_all(dir.path(), &docs).unwrap_err();

        match err {
            Error::Write { path, .. } => assert!(path.ends_with("missing/Bad0.md")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!dir.path().join("Good1.md").exists());
    }
}
