pub mod assistant;
pub mod database;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod telegram;

pub use assistant::AssistantConfig;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config, ASSISTANT_KEY_ENV, PORT_ENV, TELEGRAM_TOKEN_ENV};
pub use server::ServerConfig;
pub use telegram::TelegramConfig;
