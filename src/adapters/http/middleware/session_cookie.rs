//! Session cookie middleware and extractor.
//!
//! Every request is bound to an opaque server-side session id carried in a
//! cookie. The id is a random UUID and carries no state of its own; tokens
//! and timestamps stay in the `SessionStore`.
//!
//! Only ids the server minted and still holds a record for are honoured. A
//! cookie naming an unknown or expired id is replaced with a fresh one, so a
//! client cannot choose the id its token will be stored under.
//!
//! ```text
//! Request → session_cookie_middleware → CurrentSession in extensions
//!                                            ↓
//!                                  Handler → SessionHandle extractor
//!                                            ↓
//!           Set-Cookie appended when the id was freshly minted
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::SessionId;
use crate::ports::SessionStore;

/// Cookie attributes for the session id.
#[derive(Debug, Clone)]
pub struct SessionCookieConfig {
    name: String,
    secure: bool,
    max_age_secs: u64,
}

impl SessionCookieConfig {
    pub fn new(name: impl Into<String>, secure: bool, max_age_secs: u64) -> Self {
        Self {
            name: name.into(),
            secure,
            max_age_secs,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `Set-Cookie` value for `id`.
    pub fn header_value(&self, id: SessionId) -> String {
        let secure_flag = if self.secure { "; Secure" } else { "" };
        format!(
            "{}={}; HttpOnly{}; SameSite=Lax; Path=/; Max-Age={}",
            self.name, id, secure_flag, self.max_age_secs
        )
    }

    /// Session id from the request's `Cookie` headers.
    ///
    /// A cookie that is present but does not parse is treated as absent.
    pub fn extract(&self, headers: &HeaderMap) -> Option<SessionId> {
        let prefix = format!("{}=", self.name);
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .find_map(|part| part.trim().strip_prefix(prefix.as_str()))
            .and_then(|value| value.trim().parse().ok())
    }
}

/// Session bound to the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentSession {
    pub id: SessionId,
    pub is_new: bool,
}

/// State for `session_cookie_middleware`.
#[derive(Clone)]
pub struct SessionCookieState {
    cookie: SessionCookieConfig,
    store: Arc<dyn SessionStore>,
}

impl SessionCookieState {
    pub fn new(cookie: SessionCookieConfig, store: Arc<dyn SessionStore>) -> Self {
        Self { cookie, store }
    }

    /// Resolves the session for a request, minting one when the cookie is
    /// missing, malformed or names no stored record.
    async fn resolve(&self, headers: &HeaderMap) -> CurrentSession {
        if let Some(id) = self.cookie.extract(headers) {
            match self.store.exists(id).await {
                Ok(true) => return CurrentSession { id, is_new: false },
                Ok(false) => tracing::debug!(session_id = %id, "Ignoring unknown session id"),
                Err(e) => tracing::warn!(session_id = %id, error = %e, "Could not check session id"),
            }
        }

        let id = SessionId::new();
        tracing::debug!(session_id = %id, "Minted new session");
        CurrentSession { id, is_new: true }
    }
}

/// Binds each request to a session, minting one when needed.
pub async fn session_cookie_middleware(
    State(state): State<Arc<SessionCookieState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let session = state.resolve(request.headers()).await;

    request.extensions_mut().insert(session);
    let mut response = next.run(request).await;

    if session.is_new {
        match HeaderValue::from_str(&state.cookie.header_value(session.id)) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::error!(error = %e, "Session cookie is not a valid header value"),
        }
    }

    response
}

/// Extractor for the current session id.
///
/// Requires `session_cookie_middleware` on the route; without it the request
/// fails with 500.
#[derive(Debug, Clone, Copy)]
pub struct SessionHandle(pub SessionId);

impl<S> axum::extract::FromRequestParts<S> for SessionHandle
where
    S: Send + Sync,
{
    type Rejection = SessionRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<CurrentSession>()
                .map(|session| SessionHandle(session.id))
                .ok_or(SessionRejection::MiddlewareMissing)
        })
    }
}

/// Rejection when no session was bound to the request.
#[derive(Debug, Clone)]
pub enum SessionRejection {
    MiddlewareMissing,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        match self {
            SessionRejection::MiddlewareMissing => {
                tracing::error!("Session extractor used on a route without session middleware");
            }
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "Internal error" })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionStore;
    use crate::domain::handoff::HandoffSession;

    fn config() -> SessionCookieConfig {
        SessionCookieConfig::new("cryptgate_sid", false, 3600)
    }

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn header_value_carries_attributes() {
        let id = SessionId::new();
        let value = config().header_value(id);

        assert!(value.starts_with(&format!("cryptgate_sid={}", id)));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("SameSite=Lax"));
        assert!(value.contains("Path=/"));
        assert!(!value.contains("Secure"));
    }

    #[test]
    fn secure_flag_is_added_when_configured() {
        let config = SessionCookieConfig::new("sid", true, 60);
        assert!(config.header_value(SessionId::new()).contains("; Secure"));
    }

    #[test]
    fn extract_finds_cookie_among_others() {
        let id = SessionId::new();
        let headers = headers(&format!("theme=dark; cryptgate_sid={}; other=1", id));
        assert_eq!(config().extract(&headers), Some(id));
    }

    #[test]
    fn extract_ignores_malformed_or_missing_cookie() {
        assert_eq!(config().extract(&headers("cryptgate_sid=not-a-uuid")), None);
        assert_eq!(config().extract(&headers("theme=dark")), None);
        assert_eq!(config().extract(&HeaderMap::new()), None);
    }

    #[test]
    fn extract_does_not_match_name_suffix() {
        let id = SessionId::new();
        let headers = headers(&format!("old_cryptgate_sid={}", id));
        assert_eq!(config().extract(&headers), None);
    }

    fn state(store: &InMemorySessionStore) -> SessionCookieState {
        SessionCookieState::new(config(), Arc::new(store.clone()))
    }

    #[tokio::test]
    async fn resolve_keeps_id_with_stored_record() {
        let store = InMemorySessionStore::new();
        let id = SessionId::new();
        store.save(&HandoffSession::new(id)).await.unwrap();

        let session = state(&store)
            .resolve(&headers(&format!("cryptgate_sid={}", id)))
            .await;

        assert_eq!(session, CurrentSession { id, is_new: false });
    }

    #[tokio::test]
    async fn resolve_replaces_unknown_id() {
        let store = InMemorySessionStore::new();
        let planted: SessionId = "11111111-2222-4333-8444-555555555555".parse().unwrap();

        let session = state(&store)
            .resolve(&headers(&format!("cryptgate_sid={}", planted)))
            .await;

        assert!(session.is_new);
        assert_ne!(session.id, planted);
    }

    #[tokio::test]
    async fn resolve_mints_when_cookie_missing() {
        let store = InMemorySessionStore::new();
        let session = state(&store).resolve(&HeaderMap::new()).await;
        assert!(session.is_new);
    }
}
