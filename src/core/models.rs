use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

/// One quote record as held by the client. Field renames follow the
/// backend's wire names, including its historical spelling of "qoute".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "qoute")]
    pub text: String,

    #[serde(rename = "vote", default)]
    pub votes: u32,
}

/// The updated count returned by a successful vote. Carries only the count,
/// never the whole quote; callers merge it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteReceipt {
    pub id: String,
    pub votes: u32,
}

/// Normalizes a list response. The backend answers either with a bare array
/// or with `{ "data": [...] }`; anything else becomes an empty list, and
/// entries that do not deserialize are skipped.
pub fn quotes_from_value(value: Value) -> Vec<Quote> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    items.into_iter().filter_map(|item| serde_json::from_value(item).ok()).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn bare_array_is_accepted() {
        let value = json!([
            {"_id": "a", "qoute": "hello world", "vote": 2},
            {"_id": "b", "qoute": "bye", "vote": 5},
        ]);

        let quotes = quotes_from_value(value);
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0], Quote { id: "a".into(), text: "hello world".into(), votes: 2 });
        assert_eq!(quotes[1].votes, 5);
    }

    #[test]
    fn data_wrapper_is_accepted() {
        let value = json!({"data": [{"_id": "a", "qoute": "hello", "vote": 0}]});
        let quotes = quotes_from_value(value);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].id, "a");
    }

    #[test]
    fn unexpected_shapes_become_empty() {
        assert!(quotes_from_value(json!(null)).is_empty());
        assert!(quotes_from_value(json!("oops")).is_empty());
        assert!(quotes_from_value(json!({"data": "not a list"})).is_empty());
        assert!(quotes_from_value(json!({"quotes": []})).is_empty());
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let value = json!([
            {"_id": "a", "qoute": "keep", "vote": 1},
            {"qoute": "no id"},
            42,
        ]);

        let quotes = quotes_from_value(value);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].id, "a");
    }

    #[test]
    fn missing_vote_defaults_to_zero() {
        let value = json!([{"_id": "a", "qoute": "fresh"}]);
        assert_eq!(quotes_from_value(value)[0].votes, 0);
    }
}
