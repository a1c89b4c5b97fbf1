mod ask_question;
mod handle_message;
mod lookup;

pub use ask_question::AskQuestionUseCase;
pub use handle_message::HandleMessageUseCase;
pub use lookup::LookupUseCase;
