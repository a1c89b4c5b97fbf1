#![allow(dead_code)]

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub const SCHEMA: [&str; 5] = [
    "CREATE TABLE addresses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        address TEXT NOT NULL UNIQUE
    )",
    "CREATE TABLE domains (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        domain TEXT NOT NULL UNIQUE
    )",
    "CREATE TABLE domain_address_mapping (
        domain_id INTEGER,
        address_id INTEGER,
        FOREIGN KEY (domain_id) REFERENCES domains(id),
        FOREIGN KEY (address_id) REFERENCES addresses(id)
    )",
    "CREATE INDEX idx_mapping_address ON domain_address_mapping (address_id)",
    "CREATE INDEX idx_mapping_domain ON domain_address_mapping (domain_id)",
];

/// Single-connection pool: every `sqlite::memory:` connection is its own
/// database, so a larger pool would see empty databases.
pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    create_schema(&pool).await;
    pool
}

pub async fn create_schema(pool: &SqlitePool) {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await.unwrap();
    }
}

pub async fn insert_address(pool: &SqlitePool, address: &str) -> i64 {
    sqlx::query_as::<_, (i64,)>("INSERT INTO addresses (address) VALUES (?) RETURNING id")
        .bind(address)
        .fetch_one(pool)
        .await
        .unwrap()
        .0
}

pub async fn insert_domain(pool: &SqlitePool, domain: &str) -> i64 {
    sqlx::query_as::<_, (i64,)>("INSERT INTO domains (domain) VALUES (?) RETURNING id")
        .bind(domain)
        .fetch_one(pool)
        .await
        .unwrap()
        .0
}

/// sqlx enables foreign keys on every connection; corrupt fixtures need them
/// off.
pub async fn disable_foreign_keys(pool: &SqlitePool) {
    sqlx::query("PRAGMA foreign_keys = OFF")
        .execute(pool)
        .await
        .unwrap();
}

pub async fn link(pool: &SqlitePool, domain_id: i64, address_id: i64) {
    sqlx::query("INSERT INTO domain_address_mapping (domain_id, address_id) VALUES (?, ?)")
        .bind(domain_id)
        .bind(address_id)
        .execute(pool)
        .await
        .unwrap();
}

/// Inserts both endpoints (if new) and the mapping row between them.
pub async fn associate(pool: &SqlitePool, address: &str, domain: &str) {
    let address_id = find_or_insert(pool, "addresses", "address", address).await;
    let domain_id = find_or_insert(pool, "domains", "domain", domain).await;
    link(pool, domain_id, address_id).await;
}

async fn find_or_insert(pool: &SqlitePool, table: &str, column: &str, value: &str) -> i64 {
    let existing = sqlx::query_as::<_, (i64,)>(&format!(
        "SELECT id FROM {} WHERE {} = ?",
        table, column
    ))
    .bind(value)
    .fetch_optional(pool)
    .await
    .unwrap();

    match existing {
        Some((id,)) => id,
        None => sqlx::query_as::<_, (i64,)>(&format!(
            "INSERT INTO {} ({}) VALUES (?) RETURNING id",
            table, column
        ))
        .bind(value)
        .fetch_one(pool)
        .await
        .unwrap()
        .0,
    }
}
