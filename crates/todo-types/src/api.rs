use serde::{Deserialize, Serialize};
use serde_json::Value;

// -- Users --

/// Registration body. Fields are kept as raw JSON so that any falsy value
/// (absent, `null`, `false`, `0`, `""`) reaches the handler and is answered
/// with 403 rather than a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<Value>,
    pub username: Option<Value>,
}

impl CreateUserRequest {
    /// Returns `(name, username)` when both are non-empty strings. Falsy
    /// values and non-string values are both treated as not provided.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let name = non_empty_str(self.name.as_ref())?;
        let username = non_empty_str(self.username.as_ref())?;
        Some((name, username))
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

// -- Todos --

/// A deadline as sent by the client: either text or milliseconds since the
/// Unix epoch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DeadlineInput {
    Millis(f64),
    Text(String),
}

/// Body of both `POST /todos` and `PUT /todos/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct TodoRequest {
    pub title: Option<String>,
    pub deadline: Option<DeadlineInput>,
}

// -- Errors --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
