//! End-to-end conversion: `.xmind` file → Markdown files.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::export::{MarkdownWriter, WriteReport, WriterConfig, to_markdown};
use crate::xmind::{CONTENT_MEMBER, extract_member, parse_sheets};

/// Configuration for [`convert_file`].
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Directory for the `.md` files; the input's directory when `None`.
    pub output_dir: Option<PathBuf>,
    /// Archive member holding the sheet array.
    pub member: String,
    /// Abort on the first file that cannot be written.
    pub fail_fast: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            member: CONTENT_MEMBER.to_string(),
            fail_fast: false,
        }
    }
}

impl ConvertConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = member.into();
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Where output for `input` goes.
    pub fn resolve_output_dir(&self, input: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => input
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
        }
    }
}

/// Convert an XMind file into one Markdown file per sheet.
///
/// Archive and parse failures abort the whole conversion. File write
/// failures are collected in the returned report unless
/// [`ConvertConfig::fail_fast`] is set.
///
/// # Example
///
/// ```no_run
/// use xmind2md::{ConvertConfig, convert_file};
///
/// let report = convert_file("plans/roadmap.xmind", &ConvertConfig::new())?;
/// for path in &report.written {
///     println!("{}", path.display());
/// }
/// # Ok::<(), xmind2md::Error>(())
/// ```
pub fn convert_file<P: AsRef<Path>>(input: P, config: &ConvertConfig) -> Result<WriteReport> {
    let input = input.as_ref();
    let output_dir = config.resolve_output_dir(input);

    let file = std::fs::File::open(input)?;
    let bytes = extract_member(file, &config.member)?;
    let sheets = parse_sheets(&bytes)?;
    info!("{}: {} sheet(s)", input.display(), sheets.len());

    let documents = to_markdown(&sheets);
    let writer = MarkdownWriter::with_config(WriterConfig {
        fail_fast: config.fail_fast,
    });
    let report = writer.write_all(&output_dir, &documents)?;

    info!(
        "{} file(s) written to {}, {} failed",
        report.written.len(),
        output_dir.display(),
        report.failures.len()
    );
    Ok(report)
}
