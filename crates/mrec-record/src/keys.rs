//! Public/internal key classification.

use crate::value::{Map, Value};

/// Prefixes that mark a key as internal.
const INTERNAL_PREFIXES: &[char] = &['_', '$'];

/// Returns `true` if `key` is internal (starts with `_` or `$`).
pub fn is_internal(key: &str) -> bool {
    key.starts_with(INTERNAL_PREFIXES)
}

/// Lazy iterator over the public keys of a map, in insertion order.
#[derive(Clone, Debug)]
pub struct Keys<'a> {
    inner: indexmap::map::Keys<'a, String, Value>,
}

impl<'a> Keys<'a> {
    pub(crate) fn new(map: &'a Map) -> Self {
        Self { inner: map.keys() }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .map(String::as_str)
            .find(|key| !is_internal(key))
    }
}

/// Public keys of `map`, in insertion order.
pub fn public_keys(map: &Map) -> Keys<'_> {
    Keys::new(map)
}

/// Public `(key, value)` pairs of `map`, in insertion order.
pub fn public_entries(map: &Map) -> impl Iterator<Item = (&str, &Value)> + Clone {
    map.iter()
        .filter(|(key, _)| !is_internal(key))
        .map(|(key, value)| (key.as_str(), value))
}
