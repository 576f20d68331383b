use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::error::InvocationError;

pub const STATUS_OK: u16 = 200;
pub const STATUS_FAILURE: u16 = 500;

/// The event a handler is invoked with.
///
/// Only `body` is ever consulted; every other key of the incoming object is
/// dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationEvent {
    #[serde(default)]
    pub body: Option<String>,
}

impl InvocationEvent {
    /// Creates an event carrying the given body.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }

    /// Creates an event from raw body bytes, which must be UTF-8.
    pub fn from_body_bytes(body: &[u8]) -> Result<Self, InvocationError> {
        Ok(Self::with_body(std::str::from_utf8(body)?))
    }

    /// Parse an event from its raw JSON bytes.
    pub fn parse(raw: &[u8]) -> Result<Self, InvocationError> {
        Ok(serde_json::from_slice(raw)?)
    }

    /// The body, or [`InvocationError::MissingBody`].
    pub fn require_body(&self) -> Result<&str, InvocationError> {
        self.body.as_deref().ok_or(InvocationError::MissingBody)
    }
}

/// The envelope a handler returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

/// Top-level result of a handler: success with a JSON body, or a failure
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerOutcome {
    Success(String),
    Failure(String),
}

impl HandlerOutcome {
    /// Collapse any result into an outcome, keeping only the error's text.
    pub fn from_result<E: Display>(result: Result<String, E>) -> Self {
        match result {
            Ok(body) => Self::Success(body),
            Err(err) => Self::Failure(err.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Wrap the outcome in the response envelope.
    pub fn into_response(self) -> InvocationResponse {
        match self {
            Self::Success(body) => InvocationResponse {
                status_code: STATUS_OK,
                body,
            },
            Self::Failure(message) => InvocationResponse {
                status_code: STATUS_FAILURE,
                body: json!({ "error": message }).to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_ignores_other_keys() {
        let event = InvocationEvent::parse(
            br#"{"body": "{}", "httpMethod": "POST", "headers": {"a": "b"}}"#,
        )
        .unwrap();
        assert_eq!(event.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_event_without_body() {
        let event = InvocationEvent::parse(b"{}").unwrap();
        assert!(matches!(
            event.require_body(),
            Err(InvocationError::MissingBody)
        ));
    }

    #[test]
    fn test_event_parse_failure() {
        assert!(matches!(
            InvocationEvent::parse(b"{"),
            Err(InvocationError::MalformedBody(_))
        ));
    }

    #[test]
    fn test_event_parse_rejects_invalid_utf8() {
        assert!(matches!(
            InvocationEvent::parse(&[0xff, 0xfe]),
            Err(InvocationError::MalformedBody(_))
        ));
    }

    #[test]
    fn test_event_from_body_bytes() {
        let event = InvocationEvent::from_body_bytes(br#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(event.body.as_deref(), Some(r#"{"email":"a@x.com"}"#));

        assert!(matches!(
            InvocationEvent::from_body_bytes(&[0xff, 0xfe, b'{']),
            Err(InvocationError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn test_response_uses_status_code_key() {
        let response = HandlerOutcome::Success("[]".to_string()).into_response();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({"statusCode": 200, "body": "[]"}));
    }

    #[test]
    fn test_failure_wraps_message_in_error_object() {
        let response = HandlerOutcome::Failure("boom".to_string()).into_response();

        assert_eq!(response.status_code, 500);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, serde_json::json!({"error": "boom"}));
    }

    #[test]
    fn test_from_result() {
        let ok: Result<String, InvocationError> = Ok("{}".to_string());
        assert_eq!(
            HandlerOutcome::from_result(ok),
            HandlerOutcome::Success("{}".to_string())
        );

        let err: Result<String, InvocationError> = Err(InvocationError::MissingBody);
        let outcome = HandlerOutcome::from_result(err);
        assert!(!outcome.is_success());
        assert_eq!(
            outcome,
            HandlerOutcome::Failure("Request body is missing".to_string())
        );
    }
}
