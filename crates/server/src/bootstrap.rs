use thiserror::Error;
use tracing::info;

use cartly_core::config::{AppConfig, ConfigError, LoadOptions};
use cartly_db::{connect_with_settings, migrations, DbPool};

pub struct Application {
    pub config: AppConfig,
    pub db_pool: DbPool,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database connection failed: {0}")]
    DatabaseConnect(#[source] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[source] sqlx::migrate::MigrateError),
}

pub async fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config).await
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(event_name = "system.bootstrap.start", "starting application bootstrap");

    let db_pool = connect_with_settings(
        &config.database.url,
        config.database.max_connections,
        config.database.timeout_secs,
    )
    .await
    .map_err(BootstrapError::DatabaseConnect)?;
    info!(
        event_name = "system.bootstrap.database_connected",
        "database connection established"
    );

    migrations::run_pending(&db_pool).await.map_err(BootstrapError::Migration)?;
    info!(event_name = "system.bootstrap.migrations_applied", "database migrations applied");

    Ok(Application { config, db_pool })
}

#[cfg(test)]
mod tests {
    use cartly_core::config::AppConfig;

    use super::bootstrap_with_config;

    #[tokio::test]
    async fn bootstrap_connects_and_migrates() {
        let mut config = AppConfig::default();
        config.database.url = "sqlite::memory:".to_string();
        config.database.max_connections = 1;

        let app = bootstrap_with_config(config).await.expect("bootstrap");

        let table_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'products'",
        )
        .fetch_one(&app.db_pool)
        .await
        .expect("query sqlite_master");
        assert_eq!(table_count, 1);
    }

    #[tokio::test]
    async fn bootstrap_surfaces_connection_failures() {
        let mut config = AppConfig::default();
        config.database.url = "sqlite:///nonexistent-dir/cartly.db".to_string();
        config.database.max_connections = 1;
        config.database.timeout_secs = 1;

        let result = bootstrap_with_config(config).await;
        assert!(matches!(result, Err(super::BootstrapError::DatabaseConnect(_))));
    }
}
