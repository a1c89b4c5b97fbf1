mod command_dispatcher;
pub mod replies;

pub use command_dispatcher::CommandDispatcher;
