use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::{retry, retry_with_backoff, RetryConfig};

/// Connect to a PostgreSQL database with default pool settings.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_from_config(PostgresConfig::new(database_url)).await
}

/// Connect using a [`PostgresConfig`].
pub async fn connect_from_config(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(config.into_connect_options()).await?;
    info!("Connected to PostgreSQL database");
    Ok(db)
}

/// Connect with automatic retry on failure.
///
/// Uses exponential backoff; handy for startup ordering against a database
/// that is still coming up.
pub async fn connect_with_retry(
    database_url: &str,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    connect_from_config_with_retry(PostgresConfig::new(database_url), retry_config).await
}

/// Connect from config with automatic retry on failure.
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    match retry_config {
        Some(retry_config) => {
            retry_with_backoff(|| connect_from_config(config.clone()), retry_config).await
        }
        None => retry(|| connect_from_config(config.clone())).await,
    }
}

/// Apply all pending migrations from the given migrator.
pub async fn run_migrations<M: MigratorTrait>(db: &DatabaseConnection) -> Result<(), DbErr> {
    let pending = M::get_pending_migrations(db).await?.len();
    if pending > 0 {
        info!(pending, "Applying database migrations");
    }
    M::up(db, None).await?;
    Ok(())
}
