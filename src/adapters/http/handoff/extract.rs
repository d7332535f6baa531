//! Lenient body extractor accepting JSON or urlencoded forms.

use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

/// Body parsed from JSON or form data, `None` when absent or unparseable.
///
/// Handlers decide what a missing body means; the extractor itself never
/// rejects, so malformed input flows into the normal failure responses.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub Option<T>);

enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("application/x-www-form-urlencoded") {
        BodyKind::Form
    } else if content_type.starts_with("application/json")
        || content_type.contains("+json")
    {
        BodyKind::Json
    } else {
        BodyKind::Other
    }
}

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = std::convert::Infallible;

    fn from_request<'life0, 'async_trait>(
        req: Request,
        state: &'life0 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let parsed = match body_kind(&req) {
                BodyKind::Json => match Json::<T>::from_request(req, state).await {
                    Ok(Json(value)) => Some(value),
                    Err(rejection) => {
                        tracing::debug!(error = %rejection, "Ignoring unparseable JSON body");
                        None
                    }
                },
                BodyKind::Form => match Form::<T>::from_request(req, state).await {
                    Ok(Form(value)) => Some(value),
                    Err(rejection) => {
                        tracing::debug!(error = %rejection, "Ignoring unparseable form body");
                        None
                    }
                },
                BodyKind::Other => None,
            };
            Ok(JsonOrForm(parsed))
        })
    }
}
