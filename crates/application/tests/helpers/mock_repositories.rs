#![allow(dead_code)]

use async_trait::async_trait;
use safubot_application::ports::{AssociationStore, ChatTransport, QuestionAnswerer, ReplyTarget};
use safubot_domain::DomainError;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
struct StoreState {
    addresses: BTreeSet<String>,
    domains: BTreeSet<String>,
    mapping: Vec<(String, String)>,
}

/// In-memory scam store. Mapping rows are kept in insertion order, which is
/// the order cross-reference results come back in.
#[derive(Clone, Default)]
pub struct MockAssociationStore {
    state: Arc<RwLock<StoreState>>,
    should_fail: Arc<RwLock<bool>>,
    delay: Arc<RwLock<Option<Duration>>>,
}

impl MockAssociationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the given `(address, domain)` associations plus both
    /// endpoints of each.
    pub async fn with_associations(pairs: Vec<(&str, &str)>) -> Self {
        let store = Self::new();
        for (address, domain) in pairs {
            store.add_association(address, domain).await;
        }
        store
    }

    pub async fn add_address(&self, address: &str) {
        self.state.write().await.addresses.insert(address.to_string());
    }

    pub async fn add_domain(&self, domain: &str) {
        self.state.write().await.domains.insert(domain.to_string());
    }

    pub async fn add_association(&self, address: &str, domain: &str) {
        let mut state = self.state.write().await;
        state.addresses.insert(address.to_string());
        state.domains.insert(domain.to_string());
        state.mapping.push((address.to_string(), domain.to_string()));
    }

    pub async fn remove_associations_for_address(&self, address: &str) {
        self.state.write().await.mapping.retain(|(a, _)| a != address);
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    async fn check_available(&self) -> Result<(), DomainError> {
        if let Some(delay) = *self.delay.read().await {
            tokio::time::sleep(delay).await;
        }
        if *self.should_fail.read().await {
            return Err(DomainError::StoreUnavailable("mock store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AssociationStore for MockAssociationStore {
    async fn address_exists(&self, address: &str) -> Result<bool, DomainError> {
        self.check_available().await?;
        Ok(self.state.read().await.addresses.contains(address))
    }

    async fn domains_for_address(&self, address: &str) -> Result<Vec<String>, DomainError> {
        self.check_available().await?;
        let state = self.state.read().await;
        Ok(state
            .mapping
            .iter()
            .filter(|(a, d)| a == address && state.domains.contains(d))
            .map(|(_, d)| d.clone())
            .collect())
    }

    async fn domain_exists(&self, domain: &str) -> Result<bool, DomainError> {
        self.check_available().await?;
        Ok(self.state.read().await.domains.contains(domain))
    }

    async fn addresses_for_domain(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        self.check_available().await?;
        let state = self.state.read().await;
        Ok(state
            .mapping
            .iter()
            .filter(|(a, d)| d == domain && state.addresses.contains(a))
            .map(|(a, _)| a.clone())
            .collect())
    }
}

#[derive(Clone, Default)]
pub struct MockQuestionAnswerer {
    answer: Arc<RwLock<Option<String>>>,
    questions: Arc<RwLock<Vec<String>>>,
    delay: Arc<RwLock<Option<Duration>>>,
}

impl MockQuestionAnswerer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Arc::new(RwLock::new(Some(answer.to_string()))),
            ..Self::default()
        }
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub async fn questions(&self) -> Vec<String> {
        self.questions.read().await.clone()
    }
}

#[async_trait]
impl QuestionAnswerer for MockQuestionAnswerer {
    async fn answer(&self, question: &str) -> Result<String, DomainError> {
        self.questions.write().await.push(question.to_string());
        if let Some(delay) = *self.delay.read().await {
            tokio::time::sleep(delay).await;
        }
        self.answer
            .read()
            .await
            .clone()
            .ok_or_else(|| DomainError::ExternalServiceError("mock answerer offline".to_string()))
    }
}

#[derive(Clone, Default)]
pub struct RecordingChatTransport {
    sent: Arc<RwLock<Vec<(ReplyTarget, String)>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl RecordingChatTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn sent(&self) -> Vec<(ReplyTarget, String)> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl ChatTransport for RecordingChatTransport {
    async fn send_reply(&self, target: ReplyTarget, text: &str) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::TransportError("mock transport offline".to_string()));
        }
        self.sent.write().await.push((target, text.to_string()));
        Ok(())
    }
}
