//! Bounded-context-related DTOs.

use kontext_core::{BoundedContext, ContextId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Bounded context response DTO.
///
/// Serialized flat; the wire contract exposes `id`, `username` and
/// `password` at the top level of the response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BoundedContextResponse {
    pub id: ContextId,
    pub username: String,
    pub password: String,
}

impl From<BoundedContext> for BoundedContextResponse {
    fn from(ctx: BoundedContext) -> Self {
        Self {
            id: ctx.id,
            username: ctx.username,
            password: ctx.password,
        }
    }
}

impl From<&BoundedContext> for BoundedContextResponse {
    fn from(ctx: &BoundedContext) -> Self {
        Self {
            id: ctx.id,
            username: ctx.username.clone(),
            password: ctx.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> BoundedContext {
        BoundedContext::with_id(
            ContextId::new(1),
            "usertest".to_string(),
            "passTest".to_string(),
        )
    }

    #[test]
    fn test_response_from_entity() {
        let ctx = create_test_record();
        let response: BoundedContextResponse = ctx.clone().into();

        assert_eq!(response.id, ctx.id);
        assert_eq!(response.username, ctx.username);
        assert_eq!(response.password, ctx.password);
    }

    #[test]
    fn test_response_from_entity_ref() {
        let ctx = create_test_record();
        let response: BoundedContextResponse = (&ctx).into();

        assert_eq!(response.id, ctx.id);
        assert_eq!(response.username, ctx.username);
    }

    #[test]
    fn test_response_serializes_flat() {
        let response: BoundedContextResponse = create_test_record().into();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["username"], "usertest");
        assert_eq!(json["password"], "passTest");
    }
}
