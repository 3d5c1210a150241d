//! Mergeable records.
//!
//! A [`Record`] is an insertion-ordered mapping from property names to
//! [`Value`]s. Records are meant to be embedded by application models
//! (see [`Model`]) that want layered merging, dotted-path access and a
//! filtered JSON projection without writing them by hand.
//!
//! # Merging
//!
//! [`Record::merge`] applies a source object key by key. Scalars and arrays
//! overwrite. Objects combine with whatever object already sits in the slot:
//! a nested record is merged in place, a plain object is deep-merged, and an
//! object landing on an empty or scalar slot is promoted to a new nested
//! record owned by its parent.
//!
//! ```
//! use mrec_record::{Record, Value};
//! use serde_json::json;
//!
//! let mut record = Record::new();
//! record
//!     .merge(&Value::from(json!({"a": {"b": 0}})))
//!     .merge(&Value::from(json!({"a": {"b": 1, "c": 2}})))
//!     .merge(&Value::from(json!({"a": {"c": 3}})));
//! assert_eq!(record.to_json(), json!({"a": {"b": 1, "c": 3}}));
//! assert!(record.get("a").unwrap().as_record().is_some());
//! ```
//!
//! # Internal keys
//!
//! Names starting with `_` or `$` are internal. They can be stored and read
//! with the path accessors but never show up in [`Record::keys`],
//! [`Record::to_json`], [`Record::to_array`], [`Record::split`], and are
//! skipped when they appear in a merge source.
//!
//! # Modules
//!
//! - [`error`] — [`RecordError`] and the crate `Result` alias
//! - [`value`] — [`Value`], the heterogeneous value type
//! - [`keys`] — internal-key predicate and public key iteration
//! - [`merge`] — plain deep merge ([`merge_values`])
//! - [`record`] — [`Record`] itself
//! - [`export`] — JSON projection ([`serialize`], [`Split`])
//! - [`model`] — the [`Model`] trait and field transforms
//! - [`registry`] — the per-type [`SingletonRegistry`]
//! - [`observed`] — [`Observed`], a model that emits lifecycle events

pub mod error;
pub mod export;
pub mod keys;
pub mod merge;
pub mod model;
pub mod observed;
pub mod record;
pub mod registry;
pub mod value;

pub use error::{RecordError, Result};
pub use export::{serialize, serialize_with, Split};
pub use keys::{is_internal, public_entries, public_keys, Keys};
pub use merge::merge_values;
pub use model::{FieldTransform, Model, TransformFn};
pub use observed::Observed;
pub use record::Record;
pub use registry::SingletonRegistry;
pub use value::{Map, Value};

pub use mrec_events::{Emitter, EmitterConfig, ListenerId};
pub use mrec_path::Path;
