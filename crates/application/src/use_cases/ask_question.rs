use safubot_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{instrument, warn};

use crate::ports::QuestionAnswerer;

const DEFAULT_ANSWER_TIMEOUT: Duration = Duration::from_secs(30);

/// Relays a question to the language model. Failures are surfaced, never
/// retried.
pub struct AskQuestionUseCase {
    answerer: Arc<dyn QuestionAnswerer>,
    timeout: Duration,
}

impl AskQuestionUseCase {
    pub fn new(answerer: Arc<dyn QuestionAnswerer>) -> Self {
        Self {
            answerer,
            timeout: DEFAULT_ANSWER_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[instrument(skip(self, question), fields(question_len = question.len()))]
    pub async fn execute(&self, question: &str) -> Result<String, DomainError> {
        match tokio::time::timeout(self.timeout, self.answerer.answer(question)).await {
            Ok(answer) => answer,
            Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs(), "Question answering timed out");
                Err(DomainError::ExternalServiceError(
                    "question answering timed out".to_string(),
                ))
            }
        }
    }
}
