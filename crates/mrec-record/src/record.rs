//! The mergeable record.

use std::fmt;

use mrec_path::{Path, PathRoot};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::error::{RecordError, Result};
use crate::export::{self, Split};
use crate::keys::{public_entries, Keys};
use crate::merge::merge_values;
use crate::model::Model;
use crate::value::{Map, Value};

/// Label used when a record carries no type name.
const FALLBACK_KIND: &str = "<Record>";

/// An insertion-ordered, mergeable property map.
///
/// Nested records are owned exclusively by their parent, so a record tree
/// is always acyclic.
///
/// Equality compares stored properties (internal keys included, in any
/// order) and ignores the [`kind`](Record::kind) label.
#[derive(Clone, Debug)]
pub struct Record {
    kind: &'static str,
    pub(crate) props: Map,
}

impl Record {
    /// Create an empty record labelled `Record`.
    pub fn new() -> Self {
        Self::with_kind(<Record as Model>::TYPE_NAME)
    }

    /// Create an empty record carrying the type name `kind`.
    pub fn with_kind(kind: &'static str) -> Self {
        Self {
            kind,
            props: Map::new(),
        }
    }

    /// Create an empty record labelled with the model's type name.
    pub fn for_model<M: Model>() -> Self {
        Self::with_kind(M::TYPE_NAME)
    }

    /// Create a record seeded with `sources`, merged in order.
    pub fn from_sources<'a, I>(sources: I) -> Self
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut record = Self::new();
        record.merge_all(sources);
        record
    }

    /// Parse a JSON object document into a record.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::try_from(value)
    }

    /// Parse a TOML document into a record.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(text)?;
        Ok(Self::from_sources([&Value::from(toml::Value::Table(table))]))
    }

    /// The type name this record was created with.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    // --- Merge -------------------------------------------------------------

    /// Merge `source` into this record.
    ///
    /// For each public key of `source`:
    /// - a non-object value overwrites the slot;
    /// - an object landing on a nested record is merged into that record in
    ///   place;
    /// - an object landing on a plain object is deep-merged without
    ///   promotion;
    /// - an object landing anywhere else is promoted: a new nested record is
    ///   created, the object merged into it, and the record stored.
    ///
    /// A non-object `source` is ignored.
    pub fn merge(&mut self, source: &Value) -> &mut Self {
        if let Some(entries) = source.entries() {
            self.merge_entries(entries);
        }
        self
    }

    /// Merge every source in order.
    pub fn merge_all<'a, I>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Value>,
    {
        for source in sources {
            self.merge(source);
        }
        self
    }

    fn merge_entries(&mut self, entries: &Map) {
        for (key, value) in public_entries(entries) {
            if !value.is_object() {
                self.props.insert(key.to_string(), value.clone());
                continue;
            }
            match self.props.get_mut(key) {
                Some(Value::Record(current)) => {
                    current.merge(value);
                }
                Some(current) if current.is_object() => merge_values(current, value),
                _ => {
                    trace!(key, "promoting nested object to record");
                    let mut promoted = Record::new();
                    promoted.merge(value);
                    self.props.insert(key.to_string(), Value::Record(promoted));
                }
            }
        }
    }

    // --- Dotted-path access ------------------------------------------------

    /// Borrow the value at a dotted `path`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        mrec_path::get(self, &Path::parse(path))
    }

    /// Borrow the value at `path`, or `default` when it is missing.
    pub fn get_or<'a>(&'a self, path: &str, default: &'a Value) -> &'a Value {
        self.get(path).unwrap_or(default)
    }

    /// Mutably borrow the value at `path`.
    pub fn get_mut(&mut self, path: &str) -> Option<&mut Value> {
        mrec_path::get_mut(self, &Path::parse(path))
    }

    /// Decode the value at `path` into `T`.
    ///
    /// Returns `Ok(None)` when the path is missing.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let Some(value) = self.get(path) else {
            return Ok(None);
        };
        serde_json::from_value(value.to_json())
            .map(Some)
            .map_err(|e| RecordError::Decode {
                path: path.to_string(),
                reason: e.to_string(),
            })
    }

    /// Returns `true` if `path` resolves to a value (`Null` included).
    pub fn has(&self, path: &str) -> bool {
        mrec_path::has(self, &Path::parse(path))
    }

    /// Store `value` at `path`.
    ///
    /// Missing or non-container intermediate segments are replaced by empty
    /// plain objects. The leaf is overwritten, never merged.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> &mut Self {
        mrec_path::set(self, &Path::parse(path), value.into());
        self
    }

    /// Remove the value at `path`. Returns `true` if something was removed.
    pub fn remove(&mut self, path: &str) -> bool {
        self.take(path).is_some()
    }

    /// Remove and return the value at `path`.
    pub fn take(&mut self, path: &str) -> Option<Value> {
        mrec_path::take(self, &Path::parse(path))
    }

    // --- Direct properties -------------------------------------------------

    /// Store `value` under `key` without path parsing. Returns the previous
    /// value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.props.insert(key.into(), value.into())
    }

    /// Returns `true` if `key` is stored on this record (internal keys
    /// included).
    pub fn contains_key(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    /// Number of public keys.
    pub fn len(&self) -> usize {
        self.keys().count()
    }

    /// Returns `true` if the record has no public keys.
    pub fn is_empty(&self) -> bool {
        self.keys().next().is_none()
    }

    // --- Enumeration and export --------------------------------------------

    /// Public keys in insertion order. Each call starts a fresh iteration.
    pub fn keys(&self) -> Keys<'_> {
        Keys::new(&self.props)
    }

    /// Public `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + Clone {
        public_entries(&self.props)
    }

    /// Public `(key, value)` pairs, cloned.
    pub fn to_array(&self) -> Vec<(String, Value)> {
        self.iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    /// Public keys and their values as two aligned lists.
    pub fn split(&self) -> Split {
        let (keys, values) = self
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .unzip();
        Split { keys, values }
    }

    /// Plain JSON projection of the public keys, recursively.
    pub fn to_json(&self) -> serde_json::Value {
        self.to_json_with(|_, _| true)
    }

    /// JSON projection keeping only entries accepted by `filter`.
    ///
    /// The filter sees every keyed entry at every nesting level; internal
    /// keys are dropped before it runs.
    pub fn to_json_with<F>(&self, filter: F) -> serde_json::Value
    where
        F: Fn(&str, &Value) -> bool,
    {
        serde_json::Value::Object(export::export_map(&self.props, &filter))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.props == other.props
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.kind.is_empty() {
            FALLBACK_KIND
        } else {
            self.kind
        };
        write!(f, "[class {kind}]")
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a str;
    type IntoIter = Keys<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys()
    }
}

impl PathRoot for Record {
    type Node = Value;

    fn entry(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.props.get_mut(key)
    }

    fn insert_entry(&mut self, key: &str, value: Value) {
        self.props.insert(key.to_string(), value);
    }

    fn remove_entry(&mut self, key: &str) -> Option<Value> {
        self.props.shift_remove(key)
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = RecordError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        Self::try_from(Value::from(value))
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Record(record) => Ok(record),
            Value::Object(entries) => {
                let mut record = Self::new();
                record.merge_entries(&entries);
                Ok(record)
            }
            other => Err(RecordError::NotAnObject {
                found: other.kind(),
            }),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = Map::deserialize(deserializer)?;
        let mut record = Self::new();
        record.merge_entries(&entries);
        Ok(record)
    }
}
