//! Server construction and lifecycle.

use std::net::TcpListener;

use actix_web::dev::{Server, ServerHandle};
use actix_web::{App, HttpServer, web};
use thiserror::Error;
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::handlers;
use crate::middleware::error::AppError;
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

/// Failures that stop the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("database unavailable: {0}")]
    Database(String),

    #[error("database migration failed: {0}")]
    Migration(String),
}

/// A bound, running HTTP server.
///
/// Once `build` returns, the listener is bound and connections queue until
/// the server future is polled.
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Connect the configured store and bind the listener.
    pub async fn build(config: &AppConfig) -> Result<Self, StartupError> {
        let state = AppState::from_config(config.database.as_ref()).await?;
        Self::build_with_state(config, state)
    }

    /// Bind the listener over an already constructed state.
    pub fn build_with_state(config: &AppConfig, state: AppState) -> Result<Self, StartupError> {
        let address = format!("{}:{}", config.host, config.port);
        let bind_err = |source| StartupError::Bind {
            address: address.clone(),
            source,
        };

        let listener = TcpListener::bind(&address).map_err(bind_err)?;
        let port = listener.local_addr().map_err(bind_err)?.port();
        let server = run(listener, state).map_err(bind_err)?;

        tracing::info!("Listening on {}:{}", config.host, port);

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Handle for stopping the server from another task.
    pub fn handle(&self) -> ServerHandle {
        self.server.handle()
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

/// Wire the app around a listener. Malformed JSON bodies become RFC 7807
/// `400 Bad Request` responses.
pub fn run(listener: TcpListener, state: AppState) -> std::io::Result<Server> {
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        let json_config = web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());

        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(state.clone())
            .app_data(json_config)
            .configure(handlers::configure_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
