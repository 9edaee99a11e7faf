use std::time::Duration;

use api_server::config::AppConfig;
use api_server::startup::{Application, StartupError};
use blog_infra::database::DatabaseConfig;

#[tokio::test]
async fn build_with_unreachable_database_fails() {
    let mut database = DatabaseConfig::new("postgres://u:p@127.0.0.1:1/none");
    database.connect_timeout = Duration::from_secs(2);
    database.run_migrations = false;

    let config = AppConfig {
        database: Some(database),
        ..AppConfig::ephemeral()
    };

    match Application::build(&config).await {
        Err(StartupError::Database(detail)) => assert!(!detail.is_empty()),
        Err(other) => panic!("expected a database error, got {:?}", other),
        Ok(app) => panic!("server started on port {} without a database", app.port()),
    }
}
