//! Error types for path parsing.

use thiserror::Error;

/// Errors produced by [`Path::try_parse`](crate::Path::try_parse).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// The path string was empty.
    #[error("path must not be empty")]
    Empty,

    /// The path contained an empty segment (`"a..b"`, `".a"`, `"a."`).
    #[error("empty segment at position {index} in path {path:?}")]
    EmptySegment { path: String, index: usize },
}

/// Convenience type alias for path operations.
pub type Result<T> = std::result::Result<T, PathError>;
