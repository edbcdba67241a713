//! Integration tests over the fully assembled application.
//!
//! No store is running here: the gateway starts unconnected, which is
//! exactly the state the fail-fast contract is about. Store-backed CRUD
//! round-trips need a live deployment and are out of scope for this suite.

use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};
use backend::server::build_app;
use backend::store::{COLLECTION, DATABASE, StoreGateway};
use mongodb::Client;
use rstest::rstest;
use serde_json::{Value, json};

fn unconnected_gateway() -> web::Data<StoreGateway> {
    web::Data::new(StoreGateway::new())
}

#[actix_web::test]
async fn greeting_is_served_at_root() {
    let app = actix_test::init_service(build_app(unconnected_gateway())).await;
    let request = actix_test::TestRequest::get().uri("/").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = actix_test::read_body(response).await;
    assert_eq!(std::str::from_utf8(&body).expect("utf8 body"), "hello world");
}

#[rstest]
#[case("/exponentiation?n1=2&n2=10", json!({ "statusCode": 200, "result": 1024.0 }))]
#[case("/modulo?n1=10&n2=3", json!({ "statusCode": 200, "result": 1.0 }))]
#[case("/square-root?n1=16", json!({ "statusCode": 200, "result": 4.0 }))]
#[actix_web::test]
async fn arithmetic_routes_work_without_a_store(#[case] uri: &str, #[case] expected: Value) {
    let app = actix_test::init_service(build_app(unconnected_gateway())).await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, expected);
}

#[actix_web::test]
async fn arithmetic_failure_shape_is_uniform_across_routes() {
    let app = actix_test::init_service(build_app(unconnected_gateway())).await;
    for uri in ["/addition?n1=x&n2=1", "/division?n1=1&n2=0", "/square-root?n1=-1"] {
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("statusCode").and_then(Value::as_u64), Some(400));
        assert!(body.get("error").and_then(Value::as_str).is_some());
        assert!(body.get("result").is_none());
    }
}

#[actix_web::test]
async fn data_endpoints_report_not_connected_before_startup_completes() {
    let app = actix_test::init_service(build_app(unconnected_gateway())).await;
    let request = actix_test::TestRequest::post()
        .uri("/create")
        .set_json(json!({ "name": "a", "email": "a@x.com" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "error": "Database not connected yet" }));
}

#[actix_web::test]
async fn readiness_follows_the_store_handle() {
    let app = actix_test::init_service(build_app(unconnected_gateway())).await;
    let request = actix_test::TestRequest::get()
        .uri("/health/ready")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    // Install a handle the way the connection task would; the client is
    // built without I/O.
    let client = Client::with_uri_str("mongodb://localhost:27017")
        .await
        .expect("parse connection string");
    let gateway = StoreGateway::new();
    gateway.install(client.database(DATABASE).collection(COLLECTION));

    let app = actix_test::init_service(build_app(web::Data::new(gateway))).await;
    let request = actix_test::TestRequest::get()
        .uri("/health/ready")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn unknown_routes_are_not_found() {
    let app = actix_test::init_service(build_app(unconnected_gateway())).await;
    let request = actix_test::TestRequest::get().uri("/factorial?n1=3").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn openapi_document_is_served_in_debug_builds() {
    let app = actix_test::init_service(build_app(unconnected_gateway())).await;
    let request = actix_test::TestRequest::get()
        .uri("/api-docs/openapi.json")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = actix_test::read_body_json(response).await;
    let paths = body.get("paths").and_then(Value::as_object).expect("paths");
    assert!(paths.contains_key("/addition"));
    assert!(paths.contains_key("/create"));
}
