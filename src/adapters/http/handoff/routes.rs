//! HTTP routes for handoff endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    cryptfile_page, crypttext_page, echo, generate, index_page, options_page, submit_data,
    timedout_page, upload_text, validate, HandoffHandlers,
};

/// Creates the handoff router with all endpoints.
pub fn handoff_routes(handlers: HandoffHandlers) -> Router {
    Router::new()
        .route("/generate", get(generate))
        .route("/validate", post(validate))
        .route("/data", post(submit_data))
        .route("/uploadText", post(upload_text))
        .route("/index", get(index_page))
        .route("/test", get(options_page).post(echo))
        .route("/cryptfile", get(cryptfile_page))
        .route("/crypttext", get(crypttext_page))
        .route("/timedout", get(timedout_page))
        .with_state(handlers)
}
