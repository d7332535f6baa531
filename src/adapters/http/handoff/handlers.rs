//! HTTP handlers for handoff endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::SessionHandle;
use crate::application::handoff::{SubmitOutcome, TokenLifecycle, UploadOutcome, ValidationOutcome};
use crate::domain::handoff::HandoffError;

use super::dto::{ErrorResponse, MessageResponse, SuccessResponse, UploadTextRequest, ValidateRequest};
use super::extract::JsonOrForm;
use super::pages;

/// Where expired uploads are sent.
pub const TIMED_OUT_PATH: &str = "/timedout";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct HandoffHandlers {
    lifecycle: Arc<TokenLifecycle>,
}

impl HandoffHandlers {
    pub fn new(lifecycle: Arc<TokenLifecycle>) -> Self {
        Self { lifecycle }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// State-machine handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /generate - Issue a fresh token into the session
pub async fn generate(
    State(handlers): State<HandoffHandlers>,
    SessionHandle(session_id): SessionHandle,
) -> Response {
    match handlers.lifecycle.issue(session_id).await {
        Ok(_) => Html(pages::options()).into_response(),
        Err(e) => handle_handoff_error(e),
    }
}

/// POST /validate - Check a candidate token without consuming it
pub async fn validate(
    State(handlers): State<HandoffHandlers>,
    SessionHandle(session_id): SessionHandle,
    JsonOrForm(body): JsonOrForm<ValidateRequest>,
) -> Response {
    let candidate = body.and_then(|b| b.password);

    match handlers.lifecycle.validate(session_id, candidate.as_deref()).await {
        Ok(ValidationOutcome::Valid) => {
            (StatusCode::OK, Json(MessageResponse::password_valid())).into_response()
        }
        Ok(ValidationOutcome::Invalid(_)) => {
            (StatusCode::BAD_REQUEST, Json(MessageResponse::password_invalid())).into_response()
        }
        Err(e) => handle_handoff_error(e),
    }
}

/// POST /data - Submit a JSON payload, consuming the token
pub async fn submit_data(
    State(handlers): State<HandoffHandlers>,
    SessionHandle(session_id): SessionHandle,
    JsonOrForm(payload): JsonOrForm<serde_json::Value>,
) -> Response {
    match handlers.lifecycle.submit_payload(session_id, payload).await {
        Ok(SubmitOutcome::Consumed) => (StatusCode::OK, Json(SuccessResponse::ok())).into_response(),
        Ok(SubmitOutcome::Rejected(_)) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::invalid_request())).into_response()
        }
        Err(e) => handle_handoff_error(e),
    }
}

/// POST /uploadText - Submit plaintext for processing, consuming the token
pub async fn upload_text(
    State(handlers): State<HandoffHandlers>,
    SessionHandle(session_id): SessionHandle,
    JsonOrForm(body): JsonOrForm<UploadTextRequest>,
) -> Response {
    let plaintext = body.and_then(|b| b.plaintext);

    match handlers.lifecycle.submit_upload_text(session_id, plaintext).await {
        Ok(UploadOutcome::Consumed) => Html(pages::success()).into_response(),
        Ok(UploadOutcome::Expired) => {
            (StatusCode::FOUND, [(LOCATION, TIMED_OUT_PATH)]).into_response()
        }
        Ok(UploadOutcome::Rejected(_)) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::invalid_request())).into_response()
        }
        Err(e) => handle_handoff_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Page handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /index
pub async fn index_page() -> Html<String> {
    Html(pages::index())
}

/// GET /test - same page `/generate` renders, without issuing
pub async fn options_page() -> Html<String> {
    Html(pages::options())
}

/// GET /cryptfile
pub async fn cryptfile_page() -> Html<String> {
    Html(pages::cryptfile())
}

/// GET /crypttext
pub async fn crypttext_page() -> Html<String> {
    Html(pages::crypttext())
}

/// GET /timedout
pub async fn timedout_page() -> Html<String> {
    Html(pages::timedout())
}

/// POST /test - Echo the parsed body back
pub async fn echo(JsonOrForm(body): JsonOrForm<serde_json::Value>) -> Json<serde_json::Value> {
    let body = body.unwrap_or_else(|| serde_json::json!({}));
    tracing::debug!(body = %body, "Echoing test body");
    Json(body)
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_handoff_error(error: HandoffError) -> Response {
    tracing::error!(error = %error, "Handoff request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
}
