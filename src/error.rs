//! Error types for xmind2md operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a mind map or writing Markdown.
///
/// Rendering itself never fails; every variant belongs to archive
/// extraction, document parsing, or file emission.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive member not found: {0}")]
    MissingMember(String),

    #[error("Invalid XMind document: {0}")]
    InvalidDocument(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
