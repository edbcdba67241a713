//! User-collection endpoints: thin pass-throughs to the store façade.
//!
//! ```text
//! POST   /create {"name":"a","email":"a@x.com"}
//! GET    /read
//! PUT    /update {"name":"a","newEmail":"b@x.com"}
//! DELETE /delete {"name":"a"}
//! ```
//!
//! Documents are schemaless: create accepts any JSON object verbatim, and
//! read returns documents as stored. Update and delete match the first
//! document with the given `name`; zero matches is reported through the
//! acknowledgment, not as an error.

use actix_web::{delete, get, post, put, web};
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::store::{DeleteAck, InsertAck, StoreError, StoreFailure, StoreGateway, UpdateAck};

/// Request body for `PUT /update`.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// Lookup key; the first matching document is updated.
    pub name: String,
    /// Replacement email value.
    pub new_email: String,
}

/// Request body for `DELETE /delete`.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct DeleteUserRequest {
    /// Lookup key; the first matching document is deleted.
    pub name: String,
}

fn log_failure(operation: &'static str, error: &StoreError) {
    error!(service = "users-service", operation, error = %error, "data endpoint failed");
}

/// Insert an arbitrary JSON document into the collection.
#[utoipa::path(
    post,
    path = "/create",
    request_body = Object,
    responses(
        (status = 200, description = "Insertion acknowledgment", body = InsertAck),
        (status = 500, description = "Store not connected or store error", body = StoreFailure)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/create")]
pub async fn create_user(
    store: web::Data<StoreGateway>,
    payload: web::Json<Document>,
) -> Result<web::Json<InsertAck>, StoreError> {
    let ack = store
        .create(payload.into_inner())
        .await
        .inspect_err(|error| log_failure("create", error))?;
    Ok(web::Json(ack))
}

/// Every document in the collection.
#[utoipa::path(
    get,
    path = "/read",
    responses(
        (status = 200, description = "All documents in the collection"),
        (status = 500, description = "Store not connected or store error", body = StoreFailure)
    ),
    tags = ["users"],
    operation_id = "readUsers"
)]
#[get("/read")]
pub async fn read_users(
    store: web::Data<StoreGateway>,
) -> Result<web::Json<Vec<Document>>, StoreError> {
    let documents = store
        .read_all()
        .await
        .inspect_err(|error| log_failure("read", error))?;
    Ok(web::Json(documents))
}

/// Overwrite the email of the first document matching `name`.
#[utoipa::path(
    put,
    path = "/update",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Update acknowledgment", body = UpdateAck),
        (status = 500, description = "Store not connected or store error", body = StoreFailure)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/update")]
pub async fn update_user(
    store: web::Data<StoreGateway>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<web::Json<UpdateAck>, StoreError> {
    let ack = store
        .update_email(&payload.name, &payload.new_email)
        .await
        .inspect_err(|error| log_failure("update", error))?;
    Ok(web::Json(ack))
}

/// Delete the first document matching `name`.
#[utoipa::path(
    delete,
    path = "/delete",
    request_body = DeleteUserRequest,
    responses(
        (status = 200, description = "Deletion acknowledgment", body = DeleteAck),
        (status = 500, description = "Store not connected or store error", body = StoreFailure)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/delete")]
pub async fn delete_user(
    store: web::Data<StoreGateway>,
    payload: web::Json<DeleteUserRequest>,
) -> Result<web::Json<DeleteAck>, StoreError> {
    let ack = store
        .delete_by_name(&payload.name)
        .await
        .inspect_err(|error| log_failure("delete", error))?;
    Ok(web::Json(ack))
}
