//! OpenAPI documentation configuration.

use kontext_core::{ContextId, ErrorResponse};
use kontext_service::BoundedContextResponse;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the Kontext API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kontext API",
        version = "1.0.0",
        description = "RESTful API for the Kontext bounded context registry",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        crate::controllers::bounded_context_controller::get_bounded_context,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ContextId,
            ErrorResponse,
            BoundedContextResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "boundedcontext", description = "Bounded context registry endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Security addon for bearer authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Bearer token authentication"))
                        .build(),
                ),
            );
        }
    }
}
