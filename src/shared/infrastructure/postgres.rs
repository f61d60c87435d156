// Connection pool for the ticketing database.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::shell::config::DatabaseConfig;

pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    tracing::info!(
        max_connections = config.max_connections,
        "connecting to postgres"
    );
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;
    Ok(pool)
}
