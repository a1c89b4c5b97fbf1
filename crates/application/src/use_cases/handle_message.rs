use safubot_domain::{DomainError, ParsedCommand};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{ChatTransport, ReplyTarget};
use crate::services::CommandDispatcher;

/// Turns one inbound chat message into at most one reply.
pub struct HandleMessageUseCase {
    dispatcher: Arc<CommandDispatcher>,
    transport: Arc<dyn ChatTransport>,
}

impl HandleMessageUseCase {
    pub fn new(dispatcher: Arc<CommandDispatcher>, transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            dispatcher,
            transport,
        }
    }

    /// Returns whether a reply was sent. Messages that are not commands, and
    /// commands the bot does not know, are ignored.
    #[instrument(skip(self, text), fields(chat_id = target.chat_id))]
    pub async fn execute(&self, target: ReplyTarget, text: &str) -> Result<bool, DomainError> {
        let Some(parsed) = ParsedCommand::parse(text) else {
            return Ok(false);
        };

        let Some(reply) = self.dispatcher.dispatch(&parsed).await else {
            debug!(command = %parsed.name, "Ignoring unrecognized command");
            return Ok(false);
        };

        self.transport.send_reply(target, &reply).await?;
        Ok(true)
    }
}
