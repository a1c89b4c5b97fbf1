#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use safubot_api::{create_routes, AppState};
use safubot_application::ports::{AssociationStore, ChatTransport, QuestionAnswerer, ReplyTarget};
use safubot_application::services::CommandDispatcher;
use safubot_application::use_cases::{AskQuestionUseCase, HandleMessageUseCase, LookupUseCase};
use safubot_domain::DomainError;
use std::sync::{Arc, Mutex};

/// Fixed store: `0xABC` <-> `scam.example`, or always failing.
pub struct FixedStore {
    pub offline: bool,
}

impl FixedStore {
    fn check(&self) -> Result<(), DomainError> {
        if self.offline {
            Err(DomainError::StoreUnavailable("offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AssociationStore for FixedStore {
    async fn address_exists(&self, address: &str) -> Result<bool, DomainError> {
        self.check()?;
        Ok(address == "0xABC")
    }

    async fn domains_for_address(&self, address: &str) -> Result<Vec<String>, DomainError> {
        self.check()?;
        Ok(if address == "0xABC" {
            vec!["scam.example".to_string()]
        } else {
            vec![]
        })
    }

    async fn domain_exists(&self, domain: &str) -> Result<bool, DomainError> {
        self.check()?;
        Ok(domain == "scam.example")
    }

    async fn addresses_for_domain(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        self.check()?;
        Ok(if domain == "scam.example" {
            vec!["0xABC".to_string()]
        } else {
            vec![]
        })
    }
}

pub struct EchoAnswerer;

#[async_trait]
impl QuestionAnswerer for EchoAnswerer {
    async fn answer(&self, question: &str) -> Result<String, DomainError> {
        Ok(format!("You asked: {}", question))
    }
}

#[derive(Clone, Default)]
pub struct RecordingTransport {
    pub sent: Arc<Mutex<Vec<(ReplyTarget, String)>>>,
}

impl RecordingTransport {
    pub fn sent(&self) -> Vec<(ReplyTarget, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn send_reply(&self, target: ReplyTarget, text: &str) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push((target, text.to_string()));
        Ok(())
    }
}

pub fn create_app(store_offline: bool, transport: RecordingTransport) -> Router {
    let lookup = Arc::new(LookupUseCase::new(Arc::new(FixedStore {
        offline: store_offline,
    })));
    let ask = Arc::new(AskQuestionUseCase::new(Arc::new(EchoAnswerer)));
    let dispatcher = Arc::new(CommandDispatcher::new(lookup.clone(), ask));
    let handle_message = Arc::new(HandleMessageUseCase::new(dispatcher, Arc::new(transport)));

    create_routes(AppState {
        handle_message,
        lookup,
    })
}
