pub mod lookup;
pub mod telegram;

pub use lookup::LookupQuery;
pub use telegram::{Chat, Message, Update};
