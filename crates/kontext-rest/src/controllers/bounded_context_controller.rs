//! Bounded context controller.

use crate::{
    extractors::CurrentUser,
    responses::{ok, ApiResult, RestError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use kontext_core::{ContextId, KontextError};
use kontext_service::BoundedContextResponse;
use tracing::debug;

/// Creates the bounded context router.
pub fn router() -> Router<AppState> {
    Router::new().route("/:id", get(get_bounded_context))
}

/// Get a bounded context record by ID.
#[utoipa::path(
    get,
    path = "/boundedcontext/{id}",
    tag = "boundedcontext",
    params(
        ("id" = i32, Path, description = "Record identifier")
    ),
    responses(
        (status = 200, description = "The matching record", body = BoundedContextResponse),
        (status = 400, description = "Id is not an integer"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "No record matches the id")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_bounded_context(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<BoundedContextResponse> {
    debug!("Get bounded context request: {}", id);

    let id = parse_context_id(&id)?;

    let response = state.process.get(&user, id).await?;
    ok(response)
}

/// Helper to parse the record ID from the path parameter.
fn parse_context_id(id: &str) -> Result<ContextId, RestError> {
    ContextId::parse(id).map_err(|_| {
        RestError(KontextError::Validation(format!(
            "Invalid bounded context id: {}",
            id
        )))
    })
}
