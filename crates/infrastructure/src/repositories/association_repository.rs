use async_trait::async_trait;
use safubot_application::ports::AssociationStore;
use safubot_domain::DomainError;
use sqlx::{Sqlite, SqliteConnection, SqlitePool};
use tracing::{error, instrument, warn};

const ADDRESS_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM addresses WHERE address = ?)";

const DOMAIN_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM domains WHERE domain = ?)";

// The opposite side is LEFT JOINed so mapping rows pointing at a deleted
// entity surface as NULL and can be reported instead of vanishing silently.
const DOMAINS_FOR_ADDRESS: &str = "SELECT domains.domain
     FROM addresses
     JOIN domain_address_mapping ON domain_address_mapping.address_id = addresses.id
     LEFT JOIN domains ON domains.id = domain_address_mapping.domain_id
     WHERE addresses.address = ?
     ORDER BY domain_address_mapping.rowid";

const ADDRESSES_FOR_DOMAIN: &str = "SELECT addresses.address
     FROM domains
     JOIN domain_address_mapping ON domain_address_mapping.domain_id = domains.id
     LEFT JOIN addresses ON addresses.id = domain_address_mapping.address_id
     WHERE domains.domain = ?
     ORDER BY domain_address_mapping.rowid";

/// Scam store backed by the curated SQLite database.
pub struct SqliteAssociationRepository {
    pool: SqlitePool,
}

impl SqliteAssociationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn exists<'e, E>(executor: E, sql: &'static str, key: &str) -> Result<bool, DomainError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let (exists,) = sqlx::query_as::<_, (i64,)>(sql)
            .bind(key)
            .fetch_one(executor)
            .await
            .map_err(|e| Self::unavailable(e, "Failed to check existence"))?;
        Ok(exists != 0)
    }

    async fn linked<'e, E>(
        executor: E,
        sql: &'static str,
        key: &str,
    ) -> Result<Vec<String>, DomainError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, (Option<String>,)>(sql)
            .bind(key)
            .fetch_all(executor)
            .await
            .map_err(|e| Self::unavailable(e, "Failed to query associations"))?;

        let total = rows.len();
        let linked: Vec<String> = rows.into_iter().filter_map(|(value,)| value).collect();

        let dangling = total - linked.len();
        if dangling > 0 {
            warn!(
                subject = %key,
                dangling,
                "Mapping rows reference missing entities; omitting them"
            );
        }

        Ok(linked)
    }

    async fn associations_in_snapshot(
        &self,
        exists_sql: &'static str,
        linked_sql: &'static str,
        key: &str,
    ) -> Result<Option<Vec<String>>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| Self::unavailable(e, "Failed to open read transaction"))?;

        let conn: &mut SqliteConnection = &mut tx;
        let found = if Self::exists(&mut *conn, exists_sql, key).await? {
            Some(Self::linked(&mut *conn, linked_sql, key).await?)
        } else {
            None
        };

        tx.commit()
            .await
            .map_err(|e| Self::unavailable(e, "Failed to close read transaction"))?;

        Ok(found)
    }

    fn unavailable(e: sqlx::Error, context: &'static str) -> DomainError {
        error!(error = %e, "{}", context);
        DomainError::StoreUnavailable(e.to_string())
    }
}

#[async_trait]
impl AssociationStore for SqliteAssociationRepository {
    #[instrument(skip(self))]
    async fn address_exists(&self, address: &str) -> Result<bool, DomainError> {
        Self::exists(&self.pool, ADDRESS_EXISTS, address).await
    }

    #[instrument(skip(self))]
    async fn domains_for_address(&self, address: &str) -> Result<Vec<String>, DomainError> {
        Self::linked(&self.pool, DOMAINS_FOR_ADDRESS, address).await
    }

    #[instrument(skip(self))]
    async fn domain_exists(&self, domain: &str) -> Result<bool, DomainError> {
        Self::exists(&self.pool, DOMAIN_EXISTS, domain).await
    }

    #[instrument(skip(self))]
    async fn addresses_for_domain(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        Self::linked(&self.pool, ADDRESSES_FOR_DOMAIN, domain).await
    }

    #[instrument(skip(self))]
    async fn address_associations(
        &self,
        address: &str,
    ) -> Result<Option<Vec<String>>, DomainError> {
        self.associations_in_snapshot(ADDRESS_EXISTS, DOMAINS_FOR_ADDRESS, address)
            .await
    }

    #[instrument(skip(self))]
    async fn domain_associations(&self, domain: &str) -> Result<Option<Vec<String>>, DomainError> {
        self.associations_in_snapshot(DOMAIN_EXISTS, ADDRESSES_FOR_DOMAIN, domain)
            .await
    }
}
