use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completion endpoint used to answer `/ask`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssistantConfig {
    /// Usually supplied through `HYPERBOLIC_API_KEY` rather than the file.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.hyperbolic.xyz/v1".to_string()
}

fn default_model() -> String {
    "meta-llama/Meta-Llama-3.1-70B-Instruct".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_timeout_secs() -> u64 {
    30
}
