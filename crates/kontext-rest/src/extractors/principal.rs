//! Authenticated principal extractor.

use crate::responses::RestError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use kontext_core::KontextError;
use kontext_security::UserPrincipal;

/// Extractor for the authenticated caller.
///
/// The auth middleware resolves the bearer token and attaches the caller's
/// principal to the request extensions; this extractor hands it to the
/// handler, rejecting the request if no principal was established.
pub struct CurrentUser(pub UserPrincipal);

impl std::ops::Deref for CurrentUser {
    type Target = UserPrincipal;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let principal = parts
            .extensions
            .get::<UserPrincipal>()
            .cloned()
            .ok_or_else(|| {
                RestError(KontextError::Unauthorized(
                    "Missing or invalid bearer token".to_string(),
                ))
            })?;

        Ok(CurrentUser(principal))
    }
}

/// Optional principal extractor.
///
/// Yields `None` instead of rejecting when no valid token is present.
pub struct OptionalUser(pub Option<UserPrincipal>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let principal = parts.extensions.get::<UserPrincipal>().cloned();
        Ok(OptionalUser(principal))
    }
}
