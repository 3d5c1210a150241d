//! Plain-data projection of values and records.

use serde::Serialize;

use crate::keys::public_entries;
use crate::value::{Map, Value};

/// Public keys and values of a record as two aligned lists.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Split {
    pub keys: Vec<String>,
    pub values: Vec<Value>,
}

/// Convert `value` to plain JSON.
///
/// Scalars pass through, arrays map element-wise, and objects and records
/// keep only their public keys.
pub fn serialize(value: &Value) -> serde_json::Value {
    serialize_with(value, &|_, _| true)
}

/// Convert `value` to plain JSON, keeping only keyed entries accepted by
/// `filter` at every nesting level.
pub fn serialize_with(value: &Value, filter: &dyn Fn(&str, &Value) -> bool) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Value::Number(n.clone()),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(
            items.iter().map(|item| serialize_with(item, filter)).collect(),
        ),
        Value::Object(map) => serde_json::Value::Object(export_map(map, filter)),
        Value::Record(record) => serde_json::Value::Object(export_map(&record.props, filter)),
    }
}

pub(crate) fn export_map(
    map: &Map,
    filter: &dyn Fn(&str, &Value) -> bool,
) -> serde_json::Map<String, serde_json::Value> {
    public_entries(map)
        .filter(|&(key, value)| filter(key, value))
        .map(|(key, value)| (key.to_string(), serialize_with(value, filter)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use serde_json::json;

    #[test]
    fn scalars_pass_through() {
        assert_eq!(serialize(&Value::Null), json!(null));
        assert_eq!(serialize(&Value::from(1.5)), json!(1.5));
        assert_eq!(serialize(&Value::from("s")), json!("s"));
        assert_eq!(serialize(&Value::from(false)), json!(false));
    }

    #[test]
    fn arrays_map_element_wise() {
        let mut inner = Record::new();
        inner.insert("a", 1);
        inner.insert("_b", 2);
        let value = Value::Array(vec![Value::Record(inner), Value::from(3)]);
        assert_eq!(serialize(&value), json!([{"a": 1}, 3]));
    }

    #[test]
    fn nested_records_export_public_keys() {
        let value = Value::from(json!({"x": {"$y": 1, "z": {"_w": 2, "v": 3}}}));
        let record = Record::try_from(value).unwrap();
        assert_eq!(record.to_json(), json!({"x": {"z": {"v": 3}}}));
    }

    #[test]
    fn filter_applies_at_every_level() {
        let value = Value::from(json!({"keep": {"keep": 1, "drop": 2}, "drop": 3}));
        let json = serialize_with(&value, &|key, _| key != "drop");
        assert_eq!(json, json!({"keep": {"keep": 1}}));
    }

    #[test]
    fn split_serializes_as_two_lists() {
        let split = Split {
            keys: vec!["a".into()],
            values: vec![Value::from(1)],
        };
        assert_eq!(
            serde_json::to_value(&split).unwrap(),
            json!({"keys": ["a"], "values": [1]})
        );
    }
}
