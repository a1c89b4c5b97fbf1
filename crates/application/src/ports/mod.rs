mod association_store;
mod chat_transport;
mod question_answerer;

pub use association_store::AssociationStore;
pub use chat_transport::{ChatTransport, ReplyTarget};
pub use question_answerer::QuestionAnswerer;
