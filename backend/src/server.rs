//! HTTP application assembly.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::api::calc::{
    addition, division, exponentiation, modulo, multiplication, square_root, subtraction,
};
use crate::api::greeting::greet;
use crate::api::health::{live, ready};
use crate::api::users::{create_user, delete_user, read_users, update_user};
use crate::store::StoreGateway;

/// Assemble the application with every route bound.
///
/// The gateway is shared across workers; handlers resolve the collection
/// handle per call, so an app built before the connection completes serves
/// arithmetic immediately and data endpoints as soon as the handle lands.
pub fn build_app(
    store: web::Data<StoreGateway>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(store)
        .service(greet)
        .service(addition)
        .service(subtraction)
        .service(multiplication)
        .service(division)
        .service(exponentiation)
        .service(square_root)
        .service(modulo)
        .service(create_user)
        .service(read_users)
        .service(update_user)
        .service(delete_user)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = {
        use utoipa::OpenApi;
        app.route(
            "/api-docs/openapi.json",
            web::get().to(|| async { web::Json(crate::doc::ApiDoc::openapi()) }),
        )
    };

    app
}
