use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,

    #[serde(default = "default_read_pool_max_connections")]
    pub read_pool_max_connections: u32,

    /// How long SQLite waits on a locked database file before giving up.
    /// The curation process may hold a write lock while it refreshes data.
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,

    /// Upper bound for one lookup (existence check plus cross-reference).
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            read_pool_max_connections: default_read_pool_max_connections(),
            busy_timeout_secs: default_busy_timeout_secs(),
            query_timeout_secs: default_query_timeout_secs(),
        }
    }
}

fn default_db_path() -> String {
    "scam_check.db".to_string()
}

fn default_read_pool_max_connections() -> u32 {
    8
}

fn default_busy_timeout_secs() -> u64 {
    5
}

fn default_query_timeout_secs() -> u64 {
    5
}
