//! SafuBot Domain Layer
pub mod command;
pub mod config;
pub mod errors;
pub mod lookup;
pub mod normalizer;

pub use command::{BotCommand, CommandArgument, ParsedCommand};
pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use lookup::{EntityKind, LookupResult};
pub use normalizer::normalize_domain;
