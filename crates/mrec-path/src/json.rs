//! Path access over `serde_json` trees.
//!
//! Objects are containers; arrays and scalars are leaves.

use serde_json::{Map, Value};

use crate::traits::{PathNode, PathRoot};

impl PathNode for Value {
    fn child(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }

    fn child_mut(&mut self, key: &str) -> Option<&mut Self> {
        self.as_object_mut()?.get_mut(key)
    }

    fn insert_child(&mut self, key: &str, value: Self) -> bool {
        match self.as_object_mut() {
            Some(map) => {
                map.insert(key.to_string(), value);
                true
            }
            None => false,
        }
    }

    fn remove_child(&mut self, key: &str) -> Option<Self> {
        self.as_object_mut()?.shift_remove(key)
    }

    fn is_container(&self) -> bool {
        self.is_object()
    }

    fn empty_container() -> Self {
        Value::Object(Map::new())
    }
}

impl PathRoot for Map<String, Value> {
    type Node = Value;

    fn entry(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.get_mut(key)
    }

    fn insert_entry(&mut self, key: &str, value: Value) {
        self.insert(key.to_string(), value);
    }

    fn remove_entry(&mut self, key: &str) -> Option<Value> {
        self.shift_remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Path;
    use serde_json::json;

    #[test]
    fn scalar_is_not_container() {
        let mut value = json!(3);
        assert!(!value.is_container());
        assert!(!value.insert_child("a", json!(1)));
        assert_eq!(value, json!(3));
    }

    #[test]
    fn array_is_leaf() {
        let value = json!([{"a": 1}]);
        assert!(!value.is_container());
        assert!(value.child("0").is_none());
    }

    #[test]
    fn remove_keeps_order_of_remaining_keys() {
        let mut root = match json!({"a": 1, "b": 2, "c": 3, "d": {"x": 1, "y": 2, "z": 3}}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        assert!(crate::remove(&mut root, &Path::parse("a")));
        assert!(crate::remove(&mut root, &Path::parse("d.x")));
        assert_eq!(root.keys().collect::<Vec<_>>(), vec!["b", "c", "d"]);
        assert_eq!(
            root["d"].as_object().unwrap().keys().collect::<Vec<_>>(),
            vec!["y", "z"]
        );
    }

    #[test]
    fn empty_container_is_object() {
        assert_eq!(Value::empty_container(), json!({}));
    }
}
