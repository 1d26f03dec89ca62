use std::collections::HashMap;

use thiserror::Error;

/// Normalized description of a failed service call.
///
/// The service reports failures either as a plain text body or as a JSON
/// object carrying any of `detail`/`message`/`title` plus an optional
/// per-field `errors` map. Both shapes, as well as transport failures,
/// reduce to this struct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable description of the failure.
    pub message: String,
    /// Validation messages keyed by input field, when the service provides them.
    pub field_errors: Option<HashMap<String, String>>,
    /// HTTP status code, absent for transport failures.
    pub status: Option<u16>,
}

impl ApiError {
    /// A failure that never produced an HTTP response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_errors: None,
            status: None,
        }
    }

    /// Reduce an HTTP error response body to a normalized error.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(serde_json::Value::String(message)) if !message.is_empty() => Self {
                message,
                field_errors: None,
                status: Some(status),
            },
            Ok(serde_json::Value::Object(map)) => {
                let message = ["detail", "message", "title"]
                    .iter()
                    .filter_map(|key| map.get(*key))
                    .filter_map(|value| value.as_str())
                    .find(|value| !value.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| default_message(status));

                let field_errors = map
                    .get("errors")
                    .and_then(|value| value.as_object())
                    .map(|errors| {
                        errors
                            .iter()
                            .map(|(field, value)| (field.clone(), flatten_messages(value)))
                            .collect::<HashMap<String, String>>()
                    })
                    .filter(|errors| !errors.is_empty());

                Self {
                    message,
                    field_errors,
                    status: Some(status),
                }
            }
            _ => {
                // Not JSON at all: a bare text body is used verbatim.
                let trimmed = body.trim();
                let message = if trimmed.is_empty() {
                    default_message(status)
                } else {
                    trimmed.to_string()
                };
                Self {
                    message,
                    field_errors: None,
                    status: Some(status),
                }
            }
        }
    }

    /// Message for a single field, when the service attributed one to it.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors
            .as_ref()
            .and_then(|errors| errors.get(field))
            .map(String::as_str)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            "Request to the task service timed out".to_string()
        } else if error.is_connect() {
            format!("Could not reach the task service: {error}")
        } else {
            error.to_string()
        };
        Self {
            message,
            field_errors: None,
            status: error.status().map(|status| status.as_u16()),
        }
    }
}

fn default_message(status: u16) -> String {
    format!("Request failed with status {status}")
}

/// Messages may come as a single value or an array of values; arrays are
/// joined so each field carries one display string.
fn flatten_messages(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Array(items) => items
            .iter()
            .map(render_scalar)
            .collect::<Vec<String>>()
            .join(", "),
        other => render_scalar(other),
    }
}

fn render_scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
