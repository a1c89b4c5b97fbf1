use super::Repositories;
use safubot_application::services::CommandDispatcher;
use safubot_application::use_cases::{AskQuestionUseCase, HandleMessageUseCase, LookupUseCase};
use safubot_domain::Config;
use std::sync::Arc;
use std::time::Duration;

pub struct UseCases {
    pub lookup: Arc<LookupUseCase>,
    pub handle_message: Arc<HandleMessageUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config) -> Self {
        let lookup = Arc::new(
            LookupUseCase::new(repos.associations.clone())
                .with_query_timeout(Duration::from_secs(config.database.query_timeout_secs)),
        );
        let ask = Arc::new(
            AskQuestionUseCase::new(repos.assistant.clone())
                .with_timeout(Duration::from_secs(config.assistant.timeout_secs)),
        );
        let dispatcher = Arc::new(CommandDispatcher::new(lookup.clone(), ask));
        let handle_message = Arc::new(HandleMessageUseCase::new(
            dispatcher,
            repos.telegram.clone(),
        ));

        Self {
            lookup,
            handle_message,
        }
    }
}
