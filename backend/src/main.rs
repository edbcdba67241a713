//! Service entry-point: telemetry, configuration, store connection, listen.

use actix_web::{HttpServer, web};
use tracing::{error, info, warn};

use backend::config::Config;
use backend::store::StoreGateway;
use backend::{server, store, telemetry};

/// Application bootstrap.
///
/// The store connection runs in the background: the HTTP server starts
/// immediately, arithmetic endpoints work from the first request, and the
/// data endpoints report not-connected until the handle is installed. A
/// failed connection is logged and leaves the service in that degraded
/// state rather than stopping it.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = telemetry::init() {
        warn!(error = %e, "tracing init failed");
    }

    let config = Config::from_env();

    let store_gateway = web::Data::new(StoreGateway::new());
    match config.store {
        Some(store_config) => {
            let gateway = store_gateway.clone();
            actix_web::rt::spawn(async move {
                match store::connect(&store_config).await {
                    Ok(users) => {
                        gateway.install(users);
                        info!("connected to MongoDB");
                    }
                    Err(error) => error!(error = %error, "failed to connect MongoDB"),
                }
            });
        }
        None => warn!("store credentials not configured; data endpoints will report not connected"),
    }

    let port = config.port;
    let server_gateway = store_gateway.clone();
    let server = HttpServer::new(move || server::build_app(server_gateway.clone()))
        .bind(("0.0.0.0", port))?;
    info!(port, "listening");
    server.run().await
}
