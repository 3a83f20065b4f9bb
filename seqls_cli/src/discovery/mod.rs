//! Directory listing for sequence inspection
//!
//! Enumerates the basenames the engine will group: files of a single
//! directory level, optionally narrowed by glob patterns. The engine never
//! touches the filesystem, so everything path-shaped lives here.

mod filter;
mod walker;

pub use walker::{DirectoryLister, ListOptions};

use std::path::PathBuf;

/// Error type for directory listing operations
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(String),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Result type for directory listing operations
pub type Result<T> = std::result::Result<T, ListingError>;

/// Convenience wrapper: enumerate and sort the basenames of one directory.
///
/// The engine's first detection pass works on neighbors, so handing it a
/// sorted list is what puts sequence members next to each other.
pub fn list_basenames(path: &std::path::Path, options: ListOptions) -> Result<Vec<String>> {
    let mut names = DirectoryLister::new(path, options)?.collect::<Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}
