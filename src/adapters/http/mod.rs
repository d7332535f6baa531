//! HTTP adapters - REST API implementations.
//!
//! `router` assembles the handoff endpoints with the session cookie
//! middleware and the shared tower-http layers.

pub mod handoff;
pub mod middleware;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::ports::SessionStore;

pub use handoff::{handoff_routes, HandoffHandlers};
pub use middleware::{session_cookie_middleware, SessionCookieConfig, SessionCookieState};

/// Full application router.
///
/// `store` must be the store the handlers' lifecycle writes to; the session
/// middleware checks cookie ids against it.
pub fn router(
    handlers: HandoffHandlers,
    store: Arc<dyn SessionStore>,
    cookie: SessionCookieConfig,
    server: &ServerConfig,
) -> Router {
    handoff_routes(handlers)
        .layer(axum::middleware::from_fn_with_state(
            Arc::new(SessionCookieState::new(cookie, store)),
            session_cookie_middleware,
        ))
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(build_cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

/// CORS layer from configured origins.
///
/// Explicit origins get credentials so the session cookie travels; `*`
/// cannot carry credentials. No origins means no cross-origin access.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new();
    }

    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
