//! Authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use kontext_security::TokenProvider;
use std::sync::Arc;
use tracing::debug;

/// Authentication middleware state.
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub token_provider: Arc<TokenProvider>,
}

impl AuthMiddlewareState {
    /// Creates a new auth middleware state.
    #[must_use]
    pub fn new(token_provider: Arc<TokenProvider>) -> Self {
        Self { token_provider }
    }
}

/// Authentication middleware that resolves bearer tokens.
///
/// Extracts the token from the Authorization header, resolves it to the
/// caller's principal, and attaches the principal to the request
/// extensions. Requests without a resolvable token pass through without a
/// principal; the handler decides whether authentication is required.
pub async fn auth_middleware(
    State(state): State<AuthMiddlewareState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if let Some(auth_header) = auth_header {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            match state.token_provider.resolve_principal(token) {
                Ok(principal) => {
                    debug!("Authenticated caller: {}", principal.username);
                    request.extensions_mut().insert(principal);
                }
                Err(e) => {
                    debug!("Token resolution failed: {}", e);
                }
            }
        }
    }

    Ok(next.run(request).await)
}
