use safubot_domain::{BotCommand, CommandArgument, DomainError, LookupResult, ParsedCommand};
use std::sync::Arc;
use tracing::{error, warn};

use super::replies;
use crate::use_cases::{AskQuestionUseCase, LookupUseCase};

/// Maps bot commands onto use cases and renders their outcome as reply text.
pub struct CommandDispatcher {
    lookup: Arc<LookupUseCase>,
    ask: Arc<AskQuestionUseCase>,
}

impl CommandDispatcher {
    pub fn new(lookup: Arc<LookupUseCase>, ask: Arc<AskQuestionUseCase>) -> Self {
        Self { lookup, ask }
    }

    /// `None` means the command is unknown and no reply should be sent.
    pub async fn dispatch(&self, parsed: &ParsedCommand) -> Option<String> {
        let command = parsed.command()?;
        Some(self.run(command, &parsed.argument).await)
    }

    pub async fn run(&self, command: BotCommand, argument: &CommandArgument) -> String {
        match (command, argument) {
            (BotCommand::Start | BotCommand::Help, _) => replies::WELCOME_MESSAGE.to_string(),
            (_, CommandArgument::Absent) => replies::usage(command)
                .unwrap_or(replies::WELCOME_MESSAGE)
                .to_string(),
            (BotCommand::Address, CommandArgument::Present(arg)) => {
                Self::render(self.lookup.check_address(arg).await)
            }
            (BotCommand::Domain, CommandArgument::Present(arg)) => {
                Self::render(self.lookup.check_domain(arg).await)
            }
            (BotCommand::Ask, CommandArgument::Present(arg)) => {
                match self.ask.execute(arg).await {
                    Ok(answer) => answer,
                    Err(e) => {
                        warn!(error = %e, "Question answering failed");
                        replies::ASK_FAILED_MESSAGE.to_string()
                    }
                }
            }
        }
    }

    fn render(result: Result<LookupResult, DomainError>) -> String {
        match result {
            Ok(result) => replies::render_lookup(&result),
            Err(e) => {
                error!(error = %e, "Scam lookup failed");
                replies::STORE_UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }
}
