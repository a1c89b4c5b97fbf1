use safubot_domain::{normalize_domain, DomainError, EntityKind, LookupResult};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::ports::AssociationStore;

const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Checks addresses and domains against the scam store.
///
/// Stateless apart from the injected store, so one instance is shared by all
/// concurrent requests.
pub struct LookupUseCase {
    store: Arc<dyn AssociationStore>,
    query_timeout: Duration,
}

impl LookupUseCase {
    pub fn new(store: Arc<dyn AssociationStore>) -> Self {
        Self {
            store,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    /// Addresses are matched verbatim, case included.
    #[instrument(skip(self))]
    pub async fn check_address(&self, raw_address: &str) -> Result<LookupResult, DomainError> {
        let subject = raw_address.to_string();
        let found = self
            .bounded(self.store.address_associations(&subject))
            .await?;
        Ok(Self::into_result(EntityKind::Address, subject, found))
    }

    #[instrument(skip(self))]
    pub async fn check_domain(&self, raw_domain: &str) -> Result<LookupResult, DomainError> {
        let subject = normalize_domain(raw_domain);
        debug!(normalized = %subject, "Domain normalized");
        let found = self
            .bounded(self.store.domain_associations(&subject))
            .await?;
        Ok(Self::into_result(EntityKind::Domain, subject, found))
    }

    async fn bounded<T, F>(&self, query: F) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, DomainError>>,
    {
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout_ms = self.query_timeout.as_millis() as u64, "Store query timed out");
                Err(DomainError::StoreUnavailable(format!(
                    "query exceeded {}ms",
                    self.query_timeout.as_millis()
                )))
            }
        }
    }

    fn into_result(kind: EntityKind, subject: String, found: Option<Vec<String>>) -> LookupResult {
        match found {
            Some(associated) => LookupResult::flagged(kind, subject, associated),
            None => LookupResult::clear(kind, subject),
        }
    }
}
