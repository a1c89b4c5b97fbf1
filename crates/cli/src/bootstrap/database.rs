use safubot_domain::config::DatabaseConfig;
use safubot_infrastructure::database::{create_read_pool, verify_schema};
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let database_url = format!("sqlite:{}", cfg.path);
    info!("Opening scam database: {}", database_url);

    let pool = create_read_pool(&database_url, cfg).await.map_err(|e| {
        error!("Failed to open scam database: {}", e);
        anyhow::anyhow!(e)
    })?;

    verify_schema(&pool).await.map_err(|e| {
        error!("Scam database schema check failed: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        "Scam database ready (read-only, read_pool max={})",
        cfg.read_pool_max_connections
    );

    Ok(pool)
}
