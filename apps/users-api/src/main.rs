use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    // Build router with API routes and OpenAPI docs
    let api_routes = api::routes();
    let router = create_router::<openapi::ApiDoc>(api_routes);

    // Merge the liveness endpoint at the root, outside /api
    let app = router.merge(health_router());

    info!("Starting Users API");

    // Serve with graceful shutdown; the in-memory store needs no cleanup
    create_app(app, &config.server).await?;

    info!("Users API shutdown complete");
    Ok(())
}
