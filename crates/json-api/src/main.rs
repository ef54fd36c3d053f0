//! Product JSON API Server

use std::{process::ExitCode, sync::Arc};

use salvo::{
    affix_state::inject, catch_panic::CatchPanic, oapi::OpenApi, oapi::swagger_ui::SwaggerUi,
    prelude::*, trailing_slash::remove_slash,
};
use tracing::{error, info};

use product_api_app::{context::AppContext, domain::products::ProductValidator};

use crate::{
    config::ServerConfig,
    observability::{Observability, metrics_handler, request_logging},
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod envelope;
mod errors;
mod extensions;
mod healthcheck;
mod observability;
mod products;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Product JSON API Server entry point
#[tokio::main]
pub async fn main() -> ExitCode {
    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(error) => {
            #[expect(
                clippy::print_stderr,
                reason = "logging not initialized yet, must use eprintln for config errors"
            )]
            {
                eprintln!("Configuration error: {error}");
            }

            return ExitCode::FAILURE;
        }
    };

    let observability = match Observability::init(&config) {
        Ok(observability) => observability,
        Err(error) => {
            #[expect(
                clippy::print_stderr,
                reason = "observability failed to initialize, no subscriber to log through"
            )]
            {
                eprintln!("Observability error: {error}");
            }

            return ExitCode::FAILURE;
        }
    };

    let app = match build_app_context(&config).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");
            observability.shutdown();

            return ExitCode::FAILURE;
        }
    };

    let validator = Arc::new(ProductValidator::default());

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(inject(State::from_app_context(&app, validator)))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(router::app_router());

    let doc = OpenApi::new("Product API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server
        .serve(Service::new(router).hoop(remove_slash()))
        .await;

    app.products.close().await;

    info!("server stopped");

    observability.shutdown();

    ExitCode::SUCCESS
}

async fn build_app_context(
    config: &ServerConfig,
) -> Result<AppContext, product_api_app::context::AppInitError> {
    let database = &config.database;

    match database.postgres_url() {
        Some(url) => AppContext::from_database_url(url, database.database_max_connections).await,
        None => {
            info!("using in-memory product storage");

            Ok(AppContext::in_memory())
        }
    }
}
