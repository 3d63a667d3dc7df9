pub(crate) mod init_schema;
pub(crate) mod seed;
pub(crate) mod serve;

use anyhow::Result;
use flora_core::AppConfig;
use flora_storage::PgStorage;

pub(crate) async fn connect(config: &AppConfig) -> Result<PgStorage> {
    let storage = PgStorage::new(&config.database_url, config.pg_max_connections).await?;
    tracing::info!(max_connections = config.pg_max_connections, "connected to PostgreSQL");
    Ok(storage)
}
