//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use api_server::config::AppConfig;
use api_server::startup::Application;
use api_server::telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting Blog API Server on {}:{}", config.host, config.port);

    let app = Application::build(&config).await.map_err(|e| {
        tracing::error!("Startup failed: {}", e);
        std::io::Error::other(e)
    })?;

    app.run_until_stopped().await
}
