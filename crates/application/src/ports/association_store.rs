use async_trait::async_trait;
use safubot_domain::DomainError;

/// Read-only view of the scam store: addresses, domains and the many-to-many
/// mapping between them.
///
/// Implementations must never mutate the store. Any failure to query it is a
/// `DomainError::StoreUnavailable`, never an empty result. Sequences come back
/// in a deterministic order for a given store state.
#[async_trait]
pub trait AssociationStore: Send + Sync {
    async fn address_exists(&self, address: &str) -> Result<bool, DomainError>;

    async fn domains_for_address(&self, address: &str) -> Result<Vec<String>, DomainError>;

    /// `domain` must already be normalized.
    async fn domain_exists(&self, domain: &str) -> Result<bool, DomainError>;

    async fn addresses_for_domain(&self, domain: &str) -> Result<Vec<String>, DomainError>;

    /// Existence plus cross-reference as one logical query. `None` when the
    /// address is unknown. Stores that can read from a single snapshot should
    /// override this.
    async fn address_associations(
        &self,
        address: &str,
    ) -> Result<Option<Vec<String>>, DomainError> {
        if !self.address_exists(address).await? {
            return Ok(None);
        }
        self.domains_for_address(address).await.map(Some)
    }

    async fn domain_associations(&self, domain: &str) -> Result<Option<Vec<String>>, DomainError> {
        if !self.domain_exists(domain).await? {
            return Ok(None);
        }
        self.addresses_for_domain(domain).await.map(Some)
    }
}
