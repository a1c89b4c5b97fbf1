mod client;

pub use client::{split_message, TelegramClient, MAX_MESSAGE_UNITS};
