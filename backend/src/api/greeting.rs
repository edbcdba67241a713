//! Root greeting endpoint.

use actix_web::{HttpResponse, get};

/// Plain-text greeting confirming the service is up.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting text", body = String)),
    tags = ["greeting"],
    operation_id = "greet"
)]
#[get("/")]
pub async fn greet() -> HttpResponse {
    HttpResponse::Ok().body("hello world")
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test as actix_test};

    use super::*;

    #[actix_web::test]
    async fn greeting_body_is_fixed() {
        let app = actix_test::init_service(App::new().service(greet)).await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
                .await;
        assert!(response.status().is_success());

        let body = actix_test::read_body(response).await;
        assert_eq!(std::str::from_utf8(&body).expect("utf8 body"), "hello world");
    }
}
