//! HTTP DTOs for handoff endpoints.
//!
//! Response bodies are fixed strings that existing clients match on, so
//! their shapes are kept exactly as served.

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /validate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub password: Option<String>,
}

/// Body of `POST /uploadText`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadTextRequest {
    #[serde(default)]
    pub plaintext: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// `{"message": ...}` body used by `/validate`.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn password_valid() -> Self {
        Self {
            message: "Password is valid",
        }
    }

    pub fn password_invalid() -> Self {
        Self {
            message: "Password is invalid",
        }
    }
}

/// `{"success": "true"}` body used by `/data`.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: &'static str,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: "true" }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl ErrorResponse {
    pub fn invalid_request() -> Self {
        Self {
            error: "Invalid request",
        }
    }

    pub fn internal() -> Self {
        Self {
            error: "Internal error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_bodies_serialize_exactly() {
        assert_eq!(
            serde_json::to_string(&MessageResponse::password_valid()).unwrap(),
            r#"{"message":"Password is valid"}"#
        );
        assert_eq!(
            serde_json::to_string(&SuccessResponse::ok()).unwrap(),
            r#"{"success":"true"}"#
        );
        assert_eq!(
            serde_json::to_string(&ErrorResponse::invalid_request()).unwrap(),
            r#"{"error":"Invalid request"}"#
        );
    }

    #[test]
    fn request_fields_are_optional() {
        let req: ValidateRequest = serde_json::from_str("{}").unwrap();
        assert!(req.password.is_none());

        let req: UploadTextRequest = serde_json::from_str(r#"{"plaintext":"hi","x":1}"#).unwrap();
        assert_eq!(req.plaintext.as_deref(), Some("hi"));
    }
}
