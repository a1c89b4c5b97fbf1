use async_trait::async_trait;
use safubot_domain::DomainError;

/// Free-form security Q&A backed by a language model.
#[async_trait]
pub trait QuestionAnswerer: Send + Sync {
    async fn answer(&self, question: &str) -> Result<String, DomainError>;
}
