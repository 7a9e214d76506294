use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reply payload exactly as the answering service delivered it.
///
/// The upstream makes no promise about shape, so all three cases must be
/// accepted by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub enum RawReply {
    /// An already-decoded sequence of strings
    List(Vec<String>),
    /// A string body, possibly JSON-encoded, possibly free text
    Text(String),
    /// Anything else (null, object, number)
    Unknown,
}

impl RawReply {
    /// Classify a decoded JSON value.
    ///
    /// Arrays keep string elements verbatim, drop nulls and render any other
    /// element as compact JSON text.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Array(items) => RawReply::List(json_items_to_strings(items)),
            Value::String(text) => RawReply::Text(text),
            _ => RawReply::Unknown,
        }
    }

    /// The string form, if the payload was a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawReply::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<Vec<String>> for RawReply {
    fn from(items: Vec<String>) -> Self {
        RawReply::List(items)
    }
}

impl From<String> for RawReply {
    fn from(text: String) -> Self {
        RawReply::Text(text)
    }
}

impl From<&str> for RawReply {
    fn from(text: &str) -> Self {
        RawReply::Text(text.to_string())
    }
}

pub(crate) fn json_items_to_strings(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        })
        .collect()
}

/// Canonical reply after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizedReply {
    /// One or more non-empty quick replies, in upstream order
    Options { options: Vec<String> },
    /// A single message to show as-is
    Text { text: String },
}

impl NormalizedReply {
    pub fn is_options(&self) -> bool {
        matches!(self, NormalizedReply::Options { .. })
    }
}
