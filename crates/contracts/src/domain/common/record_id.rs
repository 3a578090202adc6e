use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts `"abc"`, `42` or `null` for an id field.
///
/// Use with `#[serde(default, alias = "_id", deserialize_with = "record_id::deserialize")]`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Row identity of a raw record: `id`, then `_id`.
pub fn from_value(record: &Value) -> Option<String> {
    ["id", "_id"].iter().find_map(|key| match record.get(*key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Decode one raw record into its typed form.
///
/// Servers send `id`, `_id` or both; the resolved row identity is written
/// back as a single `id`. Null fields are dropped so the record's defaults
/// apply to them.
pub fn decode_record<T: DeserializeOwned>(raw: &Value) -> Result<T, serde_json::Error> {
    let mut fields = match raw {
        Value::Object(map) => map.clone(),
        other => return serde_json::from_value(other.clone()),
    };
    let id = from_value(raw);
    fields.remove("_id");
    fields.retain(|_, v| !v.is_null());
    match id {
        Some(id) => {
            fields.insert("id".to_string(), Value::String(id));
        }
        None => {
            fields.remove("id");
        }
    }
    serde_json::from_value(Value::Object(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, alias = "_id", deserialize_with = "deserialize")]
        id: Option<String>,
    }

    #[test]
    fn test_accepts_string_number_and_alias() {
        let row: Row = serde_json::from_value(json!({"id": "n-1"})).unwrap();
        assert_eq!(row.id.as_deref(), Some("n-1"));
        let row: Row = serde_json::from_value(json!({"_id": "65f0"})).unwrap();
        assert_eq!(row.id.as_deref(), Some("65f0"));
        let row: Row = serde_json::from_value(json!({"id": 7})).unwrap();
        assert_eq!(row.id.as_deref(), Some("7"));
        let row: Row = serde_json::from_value(json!({})).unwrap();
        assert_eq!(row.id, None);
    }

    #[test]
    fn test_from_value_prefers_id() {
        assert_eq!(from_value(&json!({"id": "a", "_id": "b"})).as_deref(), Some("a"));
        assert_eq!(from_value(&json!({"_id": "b"})).as_deref(), Some("b"));
        assert_eq!(from_value(&json!({"id": ""})), None);
        assert_eq!(from_value(&json!({"title": "x"})), None);
    }

    #[derive(Deserialize, Debug, Default)]
    #[serde(default)]
    struct Note {
        #[serde(alias = "_id", deserialize_with = "deserialize")]
        id: Option<String>,
        title: String,
        views: u32,
    }

    #[test]
    fn test_decode_record_with_both_id_keys() {
        let note: Note =
            decode_record(&json!({"_id": "65f0", "id": "65f0", "title": "Exam Results"})).unwrap();
        assert_eq!(note.id.as_deref(), Some("65f0"));
        assert_eq!(note.title, "Exam Results");

        let note: Note = decode_record(&json!({"_id": "65f0", "id": ""})).unwrap();
        assert_eq!(note.id.as_deref(), Some("65f0"));
    }

    #[test]
    fn test_decode_record_null_fields_take_defaults() {
        let note: Note = decode_record(&json!({"id": 2, "title": null, "views": null})).unwrap();
        assert_eq!(note.id.as_deref(), Some("2"));
        assert_eq!(note.title, "");
        assert_eq!(note.views, 0);
    }

    #[test]
    fn test_decode_record_still_rejects_wrong_types() {
        assert!(decode_record::<Note>(&json!({"id": 1, "views": "many"})).is_err());
        assert!(decode_record::<Note>(&json!("not a record")).is_err());
    }
}
