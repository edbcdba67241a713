//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST surface:
//! the arithmetic routes, the user-collection CRUD routes, the greeting,
//! and the health probes. Debug builds serve the document raw at
//! `/api-docs/openapi.json`.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Arithmetic and user-collection service API",
        description = "Stateless arithmetic operations plus CRUD access to a single document collection."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::api::greeting::greet,
        crate::api::calc::addition,
        crate::api::calc::subtraction,
        crate::api::calc::multiplication,
        crate::api::calc::division,
        crate::api::calc::exponentiation,
        crate::api::calc::square_root,
        crate::api::calc::modulo,
        crate::api::users::create_user,
        crate::api::users::read_users,
        crate::api::users::update_user,
        crate::api::users::delete_user,
        crate::api::health::ready,
        crate::api::health::live,
    ),
    components(schemas(
        crate::api::calc::CalcSuccess,
        crate::api::calc::CalcFailure,
        crate::api::users::UpdateUserRequest,
        crate::api::users::DeleteUserRequest,
        crate::store::InsertAck,
        crate::store::UpdateAck,
        crate::store::DeleteAck,
        crate::store::StoreFailure,
    )),
    tags(
        (name = "greeting", description = "Service greeting"),
        (name = "calc", description = "Stateless arithmetic operations"),
        (name = "users", description = "Document-store CRUD pass-throughs"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
