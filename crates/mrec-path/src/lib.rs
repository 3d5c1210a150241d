//! Dotted-path access for nested key/value trees.
//!
//! A path such as `"server.tls.port"` names a leaf three levels deep. The
//! functions in this crate walk any tree that implements [`PathRoot`] /
//! [`PathNode`] and never fail on a missing path: reads return `None`,
//! removals return `false`.
//!
//! # Modules
//!
//! - [`error`] — Errors produced by strict path parsing
//! - [`path`] — The [`Path`] type: parsing, escaping, segments
//! - [`traits`] — [`PathNode`] and [`PathRoot`], the tree interface
//! - [`access`] — [`get`], [`get_mut`], [`has`], [`set`], [`remove`], [`take`]
//! - [`json`] — Implementations for `serde_json` trees

pub mod access;
pub mod error;
pub mod json;
pub mod path;
pub mod traits;

pub use access::{get, get_mut, has, remove, set, take};
pub use error::{PathError, Result};
pub use path::{Path, SEPARATOR};
pub use traits::{PathNode, PathRoot};
