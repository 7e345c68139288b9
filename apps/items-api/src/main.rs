use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::WrapErr;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env().wrap_err("Invalid configuration")?;

    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());

    // Connect to MongoDB with retry; no listener is bound until the store answers
    let mongo_client = database::mongodb::connect_from_config_with_retry(&config.mongodb, None)
        .await
        .wrap_err("Failed to connect to MongoDB")?;

    let state = AppState::new(config, mongo_client);

    info!(
        database = state.config.mongodb.database(),
        collection = state.config.mongodb.collection(),
        "Successfully connected to MongoDB"
    );

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = create_router::<openapi::ApiDoc>(api_routes);

    // Merge health endpoints
    let app = router.merge(health_router(state.config.app));

    let shutdown_timeout = state.config.shutdown_timeout;
    info!(
        "Starting Items API with graceful shutdown ({:?} timeout)",
        shutdown_timeout
    );

    let client = state.mongo_client.clone();
    create_production_app(app, &state.config.server, shutdown_timeout, async move {
        info!("Shutting down: closing MongoDB connections");
        client.shutdown().await;
        info!("MongoDB connection closed successfully");
    })
    .await
    .wrap_err("Server error")?;

    info!("Items API shutdown complete");
    Ok(())
}
