use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Uniform wrapper returned by every remote operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// True iff the call completed and the server reported success
    pub success: bool,
    /// Payload, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Informational or failure text sent by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Failure text, present when `success` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A failed envelope, turned into an error value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiFailure {
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }

    /// Whether the envelope carries a usable payload
    pub fn is_success(&self) -> bool {
        self.success && self.data.is_some()
    }

    /// Failure text: `error` first, then `message`
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .filter(|m| !m.trim().is_empty())
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            message: self.message,
            error: self.error,
        }
    }

    /// Collapses the envelope into a `Result`.
    ///
    /// A successful envelope without payload is treated as a failure, and
    /// `fallback` is used when the server gave no failure text.
    pub fn into_result(self, fallback: &str) -> Result<T, ApiFailure> {
        let message = self.error_message().unwrap_or(fallback).to_string();

        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(ApiFailure { message }),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_failure_without_data() {
        let envelope: ApiResponse<Vec<i64>> =
            serde_json::from_value(json!({ "success": false, "error": "권한이 없습니다." }))
                .unwrap();

        assert!(!envelope.is_success());
        assert_eq!(envelope.error_message(), Some("권한이 없습니다."));
    }

    #[test]
    fn test_error_message_falls_back_to_message() {
        let envelope: ApiResponse<()> =
            serde_json::from_value(json!({ "success": false, "message": "not found" })).unwrap();

        assert_eq!(envelope.error_message(), Some("not found"));
    }

    #[test]
    fn test_success_without_data_is_a_failure() {
        let envelope: ApiResponse<i64> = serde_json::from_value(json!({ "success": true })).unwrap();

        let err = envelope.into_result("fallback").unwrap_err();
        assert_eq!(err.message, "fallback");
    }

    #[test]
    fn test_failure_serializes_without_data() {
        let value = serde_json::to_value(ApiResponse::<i64>::failure("boom")).unwrap();

        assert_eq!(value, json!({ "success": false, "error": "boom" }));
    }
}
