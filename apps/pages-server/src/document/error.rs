//! Document store error types

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::slug::SlugError;

/// Failures returned by a [`DocumentStore`](super::DocumentStore)
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested name is not a valid slug
    #[error("Invalid slug: {0}")]
    InvalidSlug(#[from] SlugError),

    /// No page exists for the slug
    #[error("Page not found: {0}")]
    NotFound(String),

    /// The backing storage could not be read or written
    #[error("Storage unavailable while {op} {}: {source}", path.display())]
    StorageUnavailable {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Build a mapper from an I/O error for use with `map_err`
    pub(crate) fn storage(op: &'static str, path: &Path) -> impl FnOnce(io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| StoreError::StorageUnavailable { op, path, source }
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
