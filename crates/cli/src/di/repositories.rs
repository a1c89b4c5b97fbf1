use safubot_domain::{Config, DomainError};
use safubot_infrastructure::{
    assistant::OpenAiCompatibleAssistant, repositories::SqliteAssociationRepository,
    telegram::TelegramClient,
};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Adapters behind the application ports.
pub struct Repositories {
    pub associations: Arc<SqliteAssociationRepository>,
    pub assistant: Arc<OpenAiCompatibleAssistant>,
    pub telegram: Arc<TelegramClient>,
}

impl Repositories {
    pub fn new(pool: SqlitePool, config: &Config) -> Result<Self, DomainError> {
        Ok(Self {
            associations: Arc::new(SqliteAssociationRepository::new(pool)),
            assistant: Arc::new(OpenAiCompatibleAssistant::new(&config.assistant)?),
            telegram: Arc::new(TelegramClient::new(&config.telegram)?),
        })
    }
}
