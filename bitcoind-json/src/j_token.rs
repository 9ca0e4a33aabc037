use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::error::JsonError;

/// Ordered JSON object backing [`JToken::Object`]. Keys keep insertion
/// order, which matches what the node emitted.
pub type JObject = IndexMap<String, JToken>;

/// A parsed JSON value.
///
/// Numbers are held as `f64`, which covers every value bitcoind puts on the
/// wire (heights, counts, difficulty, amounts with 8 decimal places).
#[derive(Debug, Clone, PartialEq)]
pub enum JToken {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<JToken>),
    Object(JObject),
}

impl JToken {
    /// Parses a JSON document from text.
    pub fn parse(text: &str) -> Result<Self, JsonError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from(value))
    }

    /// Parses a JSON document from raw bytes.
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self, JsonError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Ok(Self::from(value))
    }

    /// The JSON type name, used in cast-error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            JToken::Null => "null",
            JToken::Boolean(_) => "boolean",
            JToken::Number(_) => "number",
            JToken::String(_) => "string",
            JToken::Array(_) => "array",
            JToken::Object(_) => "object",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JToken::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JToken::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JToken::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JToken]> {
        match self {
            JToken::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JObject> {
        match self {
            JToken::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Member lookup. Returns `None` for missing keys and for non-objects.
    pub fn get(&self, key: &str) -> Option<&JToken> {
        match self {
            JToken::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Array element lookup. Returns `None` out of bounds and for
    /// non-arrays.
    pub fn get_index(&self, index: usize) -> Option<&JToken> {
        match self {
            JToken::Array(items) => items.get(index),
            _ => None,
        }
    }

    pub fn get_bool(&self) -> Result<bool, JsonError> {
        self.as_bool()
            .ok_or_else(|| JsonError::invalid_cast("boolean", self.type_name()))
    }

    pub fn get_number(&self) -> Result<f64, JsonError> {
        self.as_f64()
            .ok_or_else(|| JsonError::invalid_cast("number", self.type_name()))
    }

    pub fn get_string(&self) -> Result<&str, JsonError> {
        self.as_str()
            .ok_or_else(|| JsonError::invalid_cast("string", self.type_name()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JToken::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, JToken::Boolean(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, JToken::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, JToken::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JToken::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JToken::Object(_))
    }

    /// Serializes the token to compact JSON bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }
}

impl Serialize for JToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JToken::Null => serializer.serialize_unit(),
            JToken::Boolean(b) => serializer.serialize_bool(*b),
            JToken::Number(n) => {
                // Integral values print without a trailing ".0", matching
                // what the node itself emits.
                if n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            JToken::String(s) => serializer.serialize_str(s),
            JToken::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            JToken::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> serde::Deserialize<'de> for JToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(JToken::from)
    }
}

impl fmt::Display for JToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl From<Value> for JToken {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JToken::Null,
            Value::Bool(b) => JToken::Boolean(b),
            Value::Number(n) => JToken::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => JToken::String(s),
            Value::Array(items) => JToken::Array(items.into_iter().map(JToken::from).collect()),
            Value::Object(map) => JToken::Object(
                map.into_iter()
                    .map(|(key, value)| (key, JToken::from(value)))
                    .collect(),
            ),
        }
    }
}
