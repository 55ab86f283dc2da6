// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /ask`.
///
/// Both fields are optional on the way in so that `{}` and `null` values are
/// accepted and treated as empty text.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct AskRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub extra: Option<String>,
}

/// Body of `POST /summarize` and `POST /quiz`.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotesRequest {
    #[serde(default)]
    pub notes: Option<String>,
}

/// Every endpoint answers with this shape.
///
/// The backend always sends a string, but any JSON value is accepted on the
/// way in so an odd reply is shown rather than treated as a broken response.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplyBody {
    #[serde(default)]
    pub reply: Option<Value>,
}

impl ReplyBody {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(Value::String(reply.into())),
        }
    }

    /// The reply text, if there is any worth showing.
    ///
    /// Empty strings, `0` and `false` count as no reply.
    pub fn text(&self) -> Option<String> {
        match self.reply.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }
}

/// Trim an optional field, treating a missing value as empty.
pub fn trimmed(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or_default().trim()
}
