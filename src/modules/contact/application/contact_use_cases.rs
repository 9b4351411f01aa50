use std::sync::Arc;

use crate::contact::application::use_cases::submit_message::SubmitMessageUseCase;

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitMessageUseCase + Send + Sync>,
}
