//! Simple API Key Authentication (Bearer Token)

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

/// API key guarding `/api/*`; `None` disables authentication
#[derive(Clone, Default)]
pub struct ApiKey(Option<Arc<str>>);

impl ApiKey {
    pub fn new(key: Option<String>) -> Self {
        Self(key.filter(|k| !k.is_empty()).map(Arc::from))
    }

    pub fn is_enabled(&self) -> bool {
        self.0.is_some()
    }
}

/// Authentication middleware
/// Validates Bearer token against the API key
pub async fn auth_middleware(
    State(api_key): State<ApiKey>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(expected) = api_key.0.as_deref() else {
        // No API key configured = auth disabled (for development)
        return Ok(next.run(request).await);
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match auth_header.map(|h| h.strip_prefix("Bearer ")) {
        Some(Some(token)) if token == expected => Ok(next.run(request).await),
        Some(Some(_)) => {
            tracing::warn!("Invalid API key attempted");
            Err(StatusCode::UNAUTHORIZED)
        }
        Some(None) => {
            tracing::warn!("Invalid Authorization header format");
            Err(StatusCode::UNAUTHORIZED)
        }
        None => {
            tracing::warn!("Missing Authorization header");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
