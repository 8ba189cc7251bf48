//! API response types.
//!
//! Success bodies are serialized flat; the wire contract exposes entity
//! fields at the top level of the response. Errors are translated into a
//! structured `{code, message}` body with the matching HTTP status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kontext_core::{ErrorResponse, KontextError};
use serde::Serialize;

/// Application error type for Axum.
#[derive(Debug)]
pub struct RestError(pub KontextError);

impl From<KontextError> for RestError {
    fn from(err: KontextError) -> Self {
        Self(err)
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(ErrorResponse::from_error(&self.0));

        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, RestError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}
