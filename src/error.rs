//! Error Types
//!
//! Failures surfaced to the views. Every variant is recovered at the view
//! boundary: list and dashboard views turn it into inline text or a
//! notification, forms turn validation errors into per-field helper text.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Errors produced by API calls and form submission
#[derive(Error, Debug)]
pub enum AdminError {
    /// The request never produced a response (DNS, connect, timeout)
    #[error("Network error: {0}")]
    Transport(String),

    /// The API answered with a non-success status code
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(String),

    /// An authenticated call was attempted without a bearer token
    #[error("Not signed in")]
    Unauthenticated,

    /// Client-side validation failed; nothing was sent
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdminError {
    /// Build a status error, preferring the server's `message` field
    pub fn from_status(status: u16, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());

        AdminError::Status { status, message }
    }

    /// HTTP status code, when the API produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            AdminError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text shown to the user in place of the data view
    pub fn user_message(&self) -> String {
        match self {
            AdminError::Status { message, .. } => message.clone(),
            AdminError::Validation(errors) => errors
                .first()
                .map(|(_, msg)| msg.to_string())
                .unwrap_or_else(|| "Invalid input".to_string()),
            other => other.to_string(),
        }
    }
}

/// Error body returned by the API (`{ "message": "..." }`)
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Per-field validation messages, keyed by form field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field; the first message per field wins
    pub fn add(&mut self, field: &str, message: &str) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn first(&self) -> Option<(&str, &str)> {
        self.fields
            .iter()
            .next()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Convert into a result, failing when any field has a message
    pub fn into_result(self) -> Result<(), AdminError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AdminError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Result type for admin operations
pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_prefers_server_message() {
        let err = AdminError::from_status(400, r#"{"message":"User not found"}"#, "Failed");
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.user_message(), "User not found");
    }

    #[test]
    fn test_status_falls_back_on_plain_body() {
        let err = AdminError::from_status(500, "<html>oops</html>", "Failed to fetch data");
        assert_eq!(err.user_message(), "Failed to fetch data");

        let err = AdminError::from_status(500, r#"{"message":""}"#, "Failed to fetch data");
        assert_eq!(err.user_message(), "Failed to fetch data");
    }

    #[test]
    fn test_validation_first_message_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "Email is required");
        errors.add("email", "Must be a valid email");
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert!(errors.into_result().is_err());
    }
}
