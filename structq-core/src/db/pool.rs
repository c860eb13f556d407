//! Database connection pool management

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::debug;

use crate::config::DatabaseConfig;

/// Create a PostgreSQL connection pool and open its first connection.
///
/// Fails once `connect_timeout` elapses without a usable connection, so an
/// unreachable server surfaces as an error instead of a hang.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::default()).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    debug!(
        max_connections = config.max_connections,
        timeout_secs = config.connect_timeout.as_secs(),
        "Connecting to database"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.connect_timeout)
        .connect(&config.url)
        .await
}
