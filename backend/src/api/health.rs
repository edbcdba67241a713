//! Health probes for orchestration and load balancers.
//!
//! Readiness is keyed to the store connection: arithmetic works without a
//! store, but the full surface is only available once the collection
//! handle is installed, so `/health/ready` stays 503 until then.

use actix_web::{HttpResponse, get, http::header, web};

use crate::store::StoreGateway;

fn probe_response(probe_ok: bool) -> HttpResponse {
    let mut response = if probe_ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };

    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness probe. 200 once the store connection is established.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Store connection established"),
        (status = 503, description = "Store connection not yet established")
    )
)]
#[get("/health/ready")]
pub async fn ready(store: web::Data<StoreGateway>) -> HttpResponse {
    probe_response(store.is_connected())
}

/// Liveness probe. 200 while the process serves requests.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses((status = 200, description = "Process is alive"))
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    probe_response(true)
}
