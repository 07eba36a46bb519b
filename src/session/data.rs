use std::ops::Deref;

use serde::Serialize;
use serde_json::{Map, Value};

/// Session info as returned by the server.
///
/// The shape is owned by the server; the client keeps the object as is and
/// only ever replaces it whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SessionData(Map<String, Value>);

impl SessionData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// String field convenience, e.g. the user's display name.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl Deref for SessionData {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_objects_are_session_data() {
        let data = SessionData::from_value(json!({"uuid": "abc", "name": "Ann"})).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.get_str("name"), Some("Ann"));

        assert!(SessionData::from_value(json!([1, 2])).is_none());
        assert!(SessionData::from_value(Value::Null).is_none());
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let data = SessionData::from_value(json!({"uuid": "abc"})).unwrap();
        assert_eq!(serde_json::to_value(&data).unwrap(), json!({"uuid": "abc"}));
    }
}
