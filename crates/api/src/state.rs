use safubot_application::use_cases::{HandleMessageUseCase, LookupUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub handle_message: Arc<HandleMessageUseCase>,
    pub lookup: Arc<LookupUseCase>,
}
