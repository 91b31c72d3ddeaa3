//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated OpenAPI specification for the
//! REST API. Debug builds serve it as JSON at
//! `/api-docs/openapi.json` for external tooling.

use utoipa::OpenApi;

use crate::domain::{Error, NewUser, User};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users service API",
        description = "HTTP interface for listing and creating users, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, NewUser, Error)),
    tags(
        (name = "users", description = "User listing and creation"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
