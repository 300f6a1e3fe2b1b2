//! Items
//!
//! Key/value pairs and the request/response bodies of the items API.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the remote map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub key: String,
    pub value: String,
}

/// Full contents of the remote map, as returned by `GET /items`.
///
/// The body is a JSON object. Entries keep the order they have in the
/// response body; a `null` value reads as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot(Vec<Item>);

impl Snapshot {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

impl IntoIterator for Snapshot {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = Snapshot;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping keys to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Snapshot, A::Error> {
                let mut items = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, Option<String>>()? {
                    items.push(Item { key, value: value.unwrap_or_default() });
                }
                Ok(Snapshot(items))
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}

/// Body of `POST /items`
#[derive(Debug, Serialize)]
pub struct CreateItemBody<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Body of `PUT /items/{key}`
#[derive(Debug, Serialize)]
pub struct UpdateItemBody<'a> {
    pub value: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(snapshot: &Snapshot) -> Vec<(&str, &str)> {
        snapshot.0.iter().map(|i| (i.key.as_str(), i.value.as_str())).collect()
    }

    #[test]
    fn test_snapshot_keeps_response_order() {
        let snapshot = Snapshot::from_json(r#"{"zeta":"1","alpha":"2","mid":"3"}"#).unwrap();
        assert_eq!(pairs(&snapshot), vec![("zeta", "1"), ("alpha", "2"), ("mid", "3")]);
    }

    #[test]
    fn test_snapshot_null_value_reads_empty() {
        let snapshot = Snapshot::from_json(r#"{"a":null}"#).unwrap();
        assert_eq!(pairs(&snapshot), vec![("a", "")]);
    }

    #[test]
    fn test_snapshot_rejects_non_object() {
        assert!(Snapshot::from_json(r#"[["a","1"]]"#).is_err());
        assert!(Snapshot::from_json(r#"{"a":5}"#).is_err());
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::from_json("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn test_bodies_serialize_to_api_shape() {
        let create = serde_json::to_value(CreateItemBody { key: "k", value: "v" }).unwrap();
        assert_eq!(create, serde_json::json!({"key": "k", "value": "v"}));

        let update = serde_json::to_value(UpdateItemBody { value: "v2" }).unwrap();
        assert_eq!(update, serde_json::json!({"value": "v2"}));
    }
}
