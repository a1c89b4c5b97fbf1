//! Question answering through an OpenAI-compatible `/chat/completions`
//! endpoint (Hyperbolic by default).

use async_trait::async_trait;
use safubot_application::ports::QuestionAnswerer;
use safubot_domain::config::AssistantConfig;
use safubot_domain::DomainError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

pub const SYSTEM_PROMPT: &str = "You are an AI assistant specializing in cryptocurrency security and scam prevention. \
Provide accurate and helpful information about staying safe in the crypto world. \
If asked about specific addresses or domains, remind users to use the /address or /domain commands for checking against the scam database.";

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct OpenAiCompatibleAssistant {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiCompatibleAssistant {
    pub fn new(cfg: &AssistantConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| DomainError::ExternalServiceError(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", cfg.base_url.trim_end_matches('/')),
            api_key: cfg.api_key.clone(),
            model: cfg.model.clone(),
            temperature: cfg.temperature,
            max_tokens: cfg.max_tokens,
        })
    }

    fn build_request<'a>(&'a self, question: &'a str) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: question,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    fn extract_answer(response: ChatCompletionResponse) -> Result<String, DomainError> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                DomainError::ExternalServiceError("completion contained no answer".to_string())
            })
    }
}

#[async_trait]
impl QuestionAnswerer for OpenAiCompatibleAssistant {
    #[instrument(skip(self, question), fields(question_len = question.len()))]
    async fn answer(&self, question: &str) -> Result<String, DomainError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.build_request(question))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!(error = %e, "Chat completion request failed");
                DomainError::ExternalServiceError(e.to_string())
            })?;

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Chat completion response could not be decoded");
            DomainError::ExternalServiceError(e.to_string())
        })?;

        let answer = Self::extract_answer(body)?;
        debug!(model = %self.model, answer_len = answer.len(), "Chat completion received");
        Ok(answer)
    }
}
