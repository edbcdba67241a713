//! Data-access façade over the external document store.
//!
//! The service owns a single collection (`users` in `testdb`) reached
//! through a handle that is installed exactly once, after the background
//! connection task has proven the connection. Until then every operation
//! fails fast without touching the driver.

use std::sync::OnceLock;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::{Client, Collection};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::config::StoreConfig;

/// Database holding the service's collection.
pub const DATABASE: &str = "testdb";
/// The single collection this service reads and writes.
pub const COLLECTION: &str = "users";

/// Failures surfaced by the data-access façade.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A data endpoint was called before the connection was established.
    #[error("Database not connected yet")]
    NotConnected,
    /// The store reported a failure; its message is passed through.
    #[error("{0}")]
    Store(#[from] mongodb::error::Error),
}

/// Wire shape of a data-endpoint failure.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct StoreFailure {
    /// Human-readable store error message.
    pub error: String,
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(StoreFailure {
            error: self.to_string(),
        })
    }
}

/// Insertion acknowledgment passed back to the caller.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    /// Whether the store acknowledged the write.
    pub acknowledged: bool,
    /// Identifier generated by the store, rendered as relaxed extended JSON.
    #[schema(value_type = Object)]
    pub inserted_id: serde_json::Value,
}

impl From<InsertOneResult> for InsertAck {
    fn from(result: InsertOneResult) -> Self {
        Self {
            acknowledged: true,
            inserted_id: result.inserted_id.into_relaxed_extjson(),
        }
    }
}

/// Update acknowledgment: matched/modified counts as reported by the store.
///
/// Zero matches is a valid outcome, not an error.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    /// Whether the store acknowledged the write.
    pub acknowledged: bool,
    /// Documents matching the filter (0 or 1 here).
    pub matched_count: u64,
    /// Documents actually modified.
    pub modified_count: u64,
}

impl From<UpdateResult> for UpdateAck {
    fn from(result: UpdateResult) -> Self {
        Self {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        }
    }
}

/// Deletion acknowledgment.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    /// Whether the store acknowledged the write.
    pub acknowledged: bool,
    /// Documents deleted (0 or 1 here).
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteAck {
    fn from(result: DeleteResult) -> Self {
        Self {
            acknowledged: true,
            deleted_count: result.deleted_count,
        }
    }
}

/// Write-once handle to the users collection.
///
/// Handlers receive the gateway as shared state and resolve the handle per
/// call. After installation the handle is read-only shared state; nothing
/// can reassign it.
#[derive(Default)]
pub struct StoreGateway {
    users: OnceLock<Collection<Document>>,
}

impl StoreGateway {
    /// Gateway with no connection yet; every operation reports
    /// [`StoreError::NotConnected`] until [`StoreGateway::install`] runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the collection handle. The first installed handle stays
    /// authoritative; later calls are ignored.
    pub fn install(&self, users: Collection<Document>) {
        if self.users.set(users).is_err() {
            warn!("store handle already installed; ignoring replacement");
        }
    }

    /// Whether the connection has been established.
    pub fn is_connected(&self) -> bool {
        self.users.get().is_some()
    }

    fn users(&self) -> Result<&Collection<Document>, StoreError> {
        self.users.get().ok_or(StoreError::NotConnected)
    }

    /// Insert `document` verbatim and return the store's acknowledgment.
    pub async fn create(&self, document: Document) -> Result<InsertAck, StoreError> {
        let result = self.users()?.insert_one(document).await?;
        Ok(result.into())
    }

    /// Every document in the collection, unfiltered and unpaginated.
    pub async fn read_all(&self) -> Result<Vec<Document>, StoreError> {
        let cursor = self.users()?.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Set the email of the first document whose `name` matches.
    pub async fn update_email(&self, name: &str, new_email: &str) -> Result<UpdateAck, StoreError> {
        let result = self
            .users()?
            .update_one(doc! { "name": name }, doc! { "$set": { "email": new_email } })
            .await?;
        Ok(result.into())
    }

    /// Delete the first document whose `name` matches.
    pub async fn delete_by_name(&self, name: &str) -> Result<DeleteAck, StoreError> {
        let result = self.users()?.delete_one(doc! { "name": name }).await?;
        Ok(result.into())
    }
}

/// Connect to the store and return the users collection handle.
///
/// The driver connects lazily, so a `ping` proves the deployment is
/// actually reachable before the handle is handed out.
pub async fn connect(config: &StoreConfig) -> Result<Collection<Document>, mongodb::error::Error> {
    let client = Client::with_uri_str(config.connection_string()).await?;
    let database = client.database(DATABASE);
    database.run_command(doc! { "ping": 1 }).await?;
    Ok(database.collection(COLLECTION))
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use serde_json::{Value, json};

    use super::*;

    /// Collection handle built without any I/O; the driver only parses the
    /// URI here.
    async fn offline_collection() -> Collection<Document> {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .expect("parse connection string");
        client.database(DATABASE).collection(COLLECTION)
    }

    #[actix_web::test]
    async fn operations_fail_fast_before_connection() {
        let gateway = StoreGateway::new();
        assert!(!gateway.is_connected());

        let error = gateway.read_all().await.expect_err("no handle installed");
        assert!(matches!(error, StoreError::NotConnected));
        assert_eq!(error.to_string(), "Database not connected yet");
    }

    #[actix_web::test]
    async fn install_marks_the_gateway_connected() {
        let gateway = StoreGateway::new();
        gateway.install(offline_collection().await);
        assert!(gateway.is_connected());
    }

    #[actix_web::test]
    async fn second_install_is_ignored() {
        let gateway = StoreGateway::new();
        gateway.install(offline_collection().await);
        gateway.install(offline_collection().await);
        assert!(gateway.is_connected());
    }

    #[actix_web::test]
    async fn not_connected_maps_to_internal_error_payload() {
        let response = StoreError::NotConnected.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        let payload: Value = serde_json::from_slice(&bytes).expect("JSON payload");
        assert_eq!(payload, json!({ "error": "Database not connected yet" }));
    }

    #[test]
    fn acks_serialise_to_camel_case() {
        let ack = InsertAck {
            acknowledged: true,
            inserted_id: json!({ "$oid": "665f1b2a8d5e4a3f9c0d1e2f" }),
        };
        let value = serde_json::to_value(&ack).expect("serialise insert ack");
        assert_eq!(
            value,
            json!({
                "acknowledged": true,
                "insertedId": { "$oid": "665f1b2a8d5e4a3f9c0d1e2f" }
            })
        );

        let ack = UpdateAck {
            acknowledged: true,
            matched_count: 1,
            modified_count: 0,
        };
        let value = serde_json::to_value(&ack).expect("serialise update ack");
        assert_eq!(
            value,
            json!({ "acknowledged": true, "matchedCount": 1, "modifiedCount": 0 })
        );

        let ack = DeleteAck {
            acknowledged: true,
            deleted_count: 0,
        };
        let value = serde_json::to_value(&ack).expect("serialise delete ack");
        assert_eq!(value, json!({ "acknowledged": true, "deletedCount": 0 }));
    }
}
