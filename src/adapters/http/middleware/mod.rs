//! HTTP middleware for axum.
//!
//! - `session_cookie` - Binds requests to a server-side session id

pub mod session_cookie;

pub use session_cookie::{
    session_cookie_middleware, CurrentSession, SessionCookieConfig, SessionCookieState,
    SessionHandle, SessionRejection,
};
