//! Failures handed to the boundary handlers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A route that could not be resolved or authorized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaughtRouteFailure {
    pub status: u16,
    pub status_text: String,
    /// Optional payload attached by whoever raised the failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl CaughtRouteFailure {
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            data: None,
        }
    }

    pub fn not_found() -> Self {
        Self::new(404, "Not Found")
    }

    pub fn unauthorized() -> Self {
        Self::new(401, "Unauthorized")
    }

    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Message carried when this failure escalates to an unhandled error.
    ///
    /// Uses `data` when it is present and truthy (strings verbatim, other
    /// values as JSON), falling back to `status_text`.
    pub fn escalation_message(&self) -> String {
        match &self.data {
            Some(Value::String(text)) if !text.is_empty() => text.clone(),
            Some(data) if is_truthy(data) => data.to_string(),
            _ => self.status_text.clone(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// An error raised while rendering a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UnhandledError {
    pub message: String,
}

impl UnhandledError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<CaughtRouteFailure> for UnhandledError {
    fn from(failure: CaughtRouteFailure) -> Self {
        Self::new(failure.escalation_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escalation_message_prefers_data() {
        let failure = CaughtRouteFailure::new(500, "Internal Server Error").with_data("db down");
        assert_eq!(failure.escalation_message(), "db down");

        let failure = CaughtRouteFailure::new(500, "Internal Server Error")
            .with_data(json!({ "reason": "quota" }));
        assert_eq!(failure.escalation_message(), r#"{"reason":"quota"}"#);
    }

    #[test]
    fn test_escalation_message_falls_back_to_status_text() {
        let failure = CaughtRouteFailure::new(503, "Service Unavailable");
        assert_eq!(failure.escalation_message(), "Service Unavailable");

        for falsy in [json!(""), json!(null), json!(0), json!(false)] {
            let failure = CaughtRouteFailure::new(418, "I'm a teapot").with_data(falsy);
            assert_eq!(failure.escalation_message(), "I'm a teapot");
        }
    }

    #[test]
    fn test_failure_deserializes_without_data() {
        let failure: CaughtRouteFailure =
            serde_json::from_str(r#"{ "status": 404, "status_text": "Not Found" }"#).unwrap();
        assert_eq!(failure, CaughtRouteFailure::not_found());
    }
}
