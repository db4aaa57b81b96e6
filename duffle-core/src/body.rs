//! Request and response payloads.

use crate::error::BodyError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::collections::BTreeMap;

/// The payload carried by a [`Request`](crate::Request) or
/// [`Response`](crate::Response).
///
/// A closed set of shapes, so handlers match on the variant instead of
/// probing a dynamic value. The serialized form carries the variant as a
/// tag, e.g. `{"kind": "text", "value": "hi"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Body {
    /// Raw text.
    Text(String),
    /// A key-value mapping, ordered by key.
    Map(BTreeMap<String, Value>),
    /// Any other structured value, typically a serialized domain object.
    Object(Value),
}

impl Body {
    /// Build a [`Body::Map`] from key-value pairs.
    ///
    /// Later pairs replace earlier ones with the same key.
    pub fn map<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Body::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Serialize a domain value into a [`Body::Object`].
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, BodyError> {
        Ok(Body::Object(serde_json::to_value(value)?))
    }

    /// Deserialize a typed value out of the body.
    ///
    /// Works for every variant: a `Map` is read as a JSON object and `Text`
    /// as a JSON string.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, BodyError> {
        let value = match self {
            Body::Text(text) => Value::String(text.clone()),
            Body::Map(map) => Value::Object(map.clone().into_iter().collect()),
            Body::Object(value) => value.clone(),
        };
        Ok(serde_json::from_value(value)?)
    }

    /// Look up a key in a `Map` body, or in an `Object` body holding a JSON object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Body::Map(map) => map.get(key),
            Body::Object(Value::Object(map)) => map.get(key),
            Body::Object(_) | Body::Text(_) => None,
        }
    }

    /// The text of a `Text` body.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Body::Text(text) => Some(text),
            Body::Map(_) | Body::Object(_) => None,
        }
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl From<BTreeMap<String, Value>> for Body {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Body::Map(map)
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Body::Object(value)
    }
}
