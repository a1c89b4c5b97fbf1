use safubot_domain::config::DatabaseConfig;
use safubot_domain::DomainError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{error, warn};

/// Tables the curation process must have created before the bot starts.
pub const REQUIRED_TABLES: [&str; 3] = ["addresses", "domains", "domain_address_mapping"];

/// Mapping-table foreign keys that the cross-reference joins filter on.
pub const MAPPING_LOOKUP_COLUMNS: [&str; 2] = ["address_id", "domain_id"];

// Leading column of every index on the mapping table.
const MAPPING_INDEX_LEADERS: &str = "SELECT info.name
     FROM pragma_index_list('domain_address_mapping') AS list
     JOIN pragma_index_info(list.name) AS info
     WHERE info.seqno = 0";

/// Pool of read-only connections. The bot never writes to the scam database,
/// and SQLite lets any number of readers proceed concurrently.
pub async fn create_read_pool(
    database_url: &str,
    cfg: &DatabaseConfig,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .read_only(true)
        .busy_timeout(Duration::from_secs(cfg.busy_timeout_secs));

    SqlitePoolOptions::new()
        .max_connections(cfg.read_pool_max_connections.max(1))
        .acquire_timeout(Duration::from_secs(cfg.query_timeout_secs.max(1)))
        .connect_with(options)
        .await
}

/// Fails when any of [`REQUIRED_TABLES`] is missing, and warns when a mapping
/// foreign key has no lookup index. The schema is owned by the curation
/// tooling, so nothing is created here.
pub async fn verify_schema(pool: &SqlitePool) -> Result<(), DomainError> {
    let present: Vec<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table'")
            .fetch_all(pool)
            .await
            .map_err(schema_unreadable)?;

    let missing: Vec<&str> = REQUIRED_TABLES
        .iter()
        .copied()
        .filter(|table| !present.iter().any(|(name,)| name.as_str() == *table))
        .collect();

    if !missing.is_empty() {
        return Err(DomainError::StoreUnavailable(format!(
            "scam database is missing tables: {}",
            missing.join(", ")
        )));
    }

    let unindexed = unindexed_mapping_columns(pool).await?;
    if !unindexed.is_empty() {
        warn!(
            columns = %unindexed.join(", "),
            "domain_address_mapping has no lookup index on these columns; cross-reference queries will scan the table"
        );
    }

    Ok(())
}

/// Entries of [`MAPPING_LOOKUP_COLUMNS`] that do not lead any index on
/// `domain_address_mapping`.
pub async fn unindexed_mapping_columns(
    pool: &SqlitePool,
) -> Result<Vec<&'static str>, DomainError> {
    let leaders: Vec<(Option<String>,)> = sqlx::query_as(MAPPING_INDEX_LEADERS)
        .fetch_all(pool)
        .await
        .map_err(schema_unreadable)?;

    Ok(MAPPING_LOOKUP_COLUMNS
        .iter()
        .copied()
        .filter(|column| {
            !leaders
                .iter()
                .any(|(name,)| name.as_deref() == Some(*column))
        })
        .collect())
}

fn schema_unreadable(e: sqlx::Error) -> DomainError {
    error!(error = %e, "Failed to read database schema");
    DomainError::StoreUnavailable(e.to_string())
}
