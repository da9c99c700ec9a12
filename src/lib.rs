//! # xmind2md
//!
//! Convert XMind mind maps into Markdown, one document per sheet.
//!
//! ## Features
//!
//! - Read the `content.json` payload of `.xmind` archives
//! - Render each sheet's topic tree: the root as `#`, the next two levels as
//!   `##`/`###` headings, deeper topics as an indented bullet list
//! - Render labels as `==highlighted==` annotation lines
//! - Render detached (free-floating) topics as a second group after the
//!   attached ones
//!
//! ## Quick Start
//!
//! ```no_run
//! use xmind2md::{ConvertConfig, convert_file};
//!
//! // Writes `<sheet title><index>.md` next to the input
//! convert_file("roadmap.xmind", &ConvertConfig::new())?;
//! # Ok::<(), xmind2md::Error>(())
//! ```
//!
//! ## Rendering Without I/O
//!
//! ```
//! use xmind2md::markdown::render_sheet;
//! use xmind2md::model::{Sheet, Topic};
//!
//! let root = Topic::new("Root")
//!     .with_attached(Topic::new("A").with_labels(["x"]))
//!     .with_detached(Topic::new("Free"));
//! let sheet = Sheet::new("Plan", root);
//!
//! assert_eq!(
//!     render_sheet(&sheet).concat(),
//!     "# Root\n\n## A\n\n  ==x==\n\n## Free\n"
//! );
//! ```

mod convert;
pub mod error;
pub mod export;
pub mod markdown;
pub mod model;
pub mod xmind;

pub use convert::{ConvertConfig, convert_file};
pub use error::{Error, Result};
pub use export::{MarkdownDocument, MarkdownWriter, WriteReport, to_markdown};
pub use model::{Sheet, Topic};
pub use xmind::{read_xmind, read_xmind_from_reader};
