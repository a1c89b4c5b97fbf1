//! SafuBot Infrastructure Layer
pub mod assistant;
pub mod database;
pub mod repositories;
pub mod telegram;
