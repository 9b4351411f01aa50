use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;

use crate::contact::application::ports::outgoing::message_store::{
    MessageStore, MessageStoreError,
};
use crate::contact::domain::entities::{ContactForm, ContactMessage, ContactMessageData};

#[derive(Debug, Error)]
pub enum SubmitMessageError {
    #[error("backend is not available")]
    Unavailable,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<MessageStoreError> for SubmitMessageError {
    fn from(e: MessageStoreError) -> Self {
        match e {
            MessageStoreError::Unavailable => SubmitMessageError::Unavailable,
            MessageStoreError::Database(msg) => SubmitMessageError::Internal(msg),
        }
    }
}

/// Stamps the submission time and the unread flag, then stores the
/// message. Contact is a write path; failures surface to the caller.
#[async_trait]
pub trait SubmitMessageUseCase: Send + Sync {
    async fn execute(&self, form: ContactForm) -> Result<ContactMessage, SubmitMessageError>;
}

pub struct SubmitMessageService {
    store: Arc<dyn MessageStore>,
}

impl SubmitMessageService {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SubmitMessageUseCase for SubmitMessageService {
    async fn execute(&self, form: ContactForm) -> Result<ContactMessage, SubmitMessageError> {
        let data = ContactMessageData {
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
            created_at: Utc::now(),
            read: false,
        };

        Ok(self.store.insert(data).await?)
    }
}
