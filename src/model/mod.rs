//! Core data model for mind-map documents.
//!
//! This module contains:
//! - Sheets and their root topics
//! - Topics with their attached/detached/summary child partitions
//! - Notes, labels, summaries, and relationships
//!
//! All types deserialize from the `content.json` payload of an XMind file
//! and are treated as read-only once loaded.

mod sheet;
mod topic;

pub use sheet::{Relationship, RootTopic, Sheet};
pub use topic::{Children, NoteContent, Notes, Summary, Topic};
