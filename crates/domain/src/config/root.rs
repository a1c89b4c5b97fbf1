use serde::{Deserialize, Serialize};

use super::assistant::AssistantConfig;
use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::telegram::TelegramConfig;

pub const TELEGRAM_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
pub const ASSISTANT_KEY_ENV: &str = "HYPERBOLIC_API_KEY";
pub const PORT_ENV: &str = "PORT";

/// Main configuration structure for SafuBot
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// HTTP listener and webhook registration
    pub server: ServerConfig,

    /// Telegram Bot API access
    pub telegram: TelegramConfig,

    /// Language model used for `/ask`
    pub assistant: AssistantConfig,

    /// Scam database (read-only)
    pub database: DatabaseConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. safubot.toml in current directory
    /// 3. /etc/safubot/config.toml
    /// 4. Default configuration
    ///
    /// Environment secrets are applied on top of the file, and command-line
    /// overrides on top of both.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("safubot.toml").exists() {
            Self::from_file("safubot.toml")?
        } else if std::path::Path::new("/etc/safubot/config.toml").exists() {
            Self::from_file("/etc/safubot/config.toml")?
        } else {
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply secrets and the hosting platform's `PORT` from the environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(TELEGRAM_TOKEN_ENV).filter(|v| !v.is_empty()) {
            self.telegram.bot_token = token;
        }
        if let Some(key) = lookup(ASSISTANT_KEY_ENV).filter(|v| !v.is_empty()) {
            self.assistant.api_key = key;
        }
        if let Some(port) = lookup(PORT_ENV).and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(url) = overrides.webhook_url {
            self.server.webhook_url = Some(url);
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Server port cannot be 0".to_string()));
        }

        if self.telegram.bot_token.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "No bot token found. Set the {} environment variable.",
                TELEGRAM_TOKEN_ENV
            )));
        }

        if self.assistant.api_key.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "No assistant API key found. Set the {} environment variable.",
                ASSISTANT_KEY_ENV
            )));
        }

        if self.database.query_timeout_secs == 0 || self.assistant.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Timeouts must be at least one second".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub webhook_url: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
