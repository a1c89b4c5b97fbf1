pub mod health;
pub mod lookup;
pub mod webhook;

pub use health::{health_check, home};
pub use lookup::{lookup_address, lookup_domain};
pub use webhook::webhook;
