//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::database::{DatabaseConnections, PostgresPostRepository};

use crate::startup::StartupError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()))
    }

    /// Build the state for the configured store.
    ///
    /// A configured database that cannot be reached is a startup failure.
    /// Only a missing configuration selects the in-memory store.
    pub async fn from_config(db_config: Option<&DatabaseConfig>) -> Result<Self, StartupError> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Self::in_memory());
        };

        let state = Self::connect(config).await?;
        tracing::info!("Application state initialized");
        Ok(state)
    }

    #[cfg(feature = "postgres")]
    async fn connect(config: &DatabaseConfig) -> Result<Self, StartupError> {
        use migration::{Migrator, MigratorTrait};

        let connections = DatabaseConnections::init(config)
            .await
            .map_err(|e| StartupError::Database(e.to_string()))?;

        if config.run_migrations {
            Migrator::up(&connections.main, None)
                .await
                .map_err(|e| StartupError::Migration(e.to_string()))?;
            tracing::info!("Database migrations applied");
        }

        Ok(Self::with_repository(Arc::new(PostgresPostRepository::new(
            connections.main,
        ))))
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect(_config: &DatabaseConfig) -> Result<Self, StartupError> {
        Err(StartupError::Database(
            "DATABASE_URL is set but this build has no postgres support".to_string(),
        ))
    }
}
