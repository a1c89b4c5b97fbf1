use async_trait::async_trait;
use safubot_domain::DomainError;

/// Identifies the inbound message a reply belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTarget {
    pub chat_id: i64,
    pub message_id: i64,
}

#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_reply(&self, target: ReplyTarget, text: &str) -> Result<(), DomainError>;
}
