//! Pure Markdown generation from topic trees.
//!
//! This module renders one [`Sheet`](crate::model::Sheet) into an ordered
//! sequence of text fragments. The design separates pure rendering logic
//! from I/O:
//!
//! - [`prefix`]: newline/indent/marker prefix shared by list items and labels
//! - [`annotate`]: label lines and the [`Annotations`] extension points
//! - [`render`]: the tiered traversal (`#` root, `##`/`###` headings, bullets)
//!
//! The export layer ([`crate::export`]) names the documents and writes them.
//!
//! ## Design Notes
//!
//! - **Heading tiers**: only levels 2 and 3 become headings; from level 4 on,
//!   topics are bullets indented two spaces per level
//! - **Detached topics**: rendered after attached ones with the same tiers;
//!   the detached partition is only followed through the heading tiers
//! - **No escaping**: titles and labels are emitted verbatim
//! - **Stubs**: notes, summaries, and relationships render nothing until an
//!   [`Annotations`] implementation provides them

mod annotate;
mod prefix;
mod render;

pub use annotate::{Annotations, Stubs, render_labels};
pub use prefix::{LIST_BASE_LEVEL, indent_prefix};
pub use render::{Branch, SheetRenderer, Tier, render_sheet};
