//! Export module: naming rendered sheets and writing them out.
//!
//! # Architecture
//!
//! - [`to_markdown`] renders each sheet into a [`MarkdownDocument`]
//!   named `<title><index>`
//! - [`MarkdownWriter`] writes documents as `<name>.md` files, following
//!   the builder pattern: `new()` for defaults, `with_config()` to customize
//!
//! # Example
//!
//! ```no_run
//! use xmind2md::export::{MarkdownWriter, WriterConfig, to_markdown};
//!
//! let sheets = xmind2md::read_xmind("input.xmind")?;
//! let documents = to_markdown(&sheets);
//!
//! let writer = MarkdownWriter::with_config(WriterConfig { fail_fast: true });
//! writer.write_all("notes", &documents)?;
//! # Ok::<(), xmind2md::Error>(())
//! ```

mod document;
mod writer;

pub use document::{MarkdownDocument, render_documents, to_markdown};
pub use writer::{MarkdownWriter, WriteReport, WriterConfig};
