use async_trait::async_trait;
use thiserror::Error;

use crate::contact::domain::entities::{ContactMessage, ContactMessageData};

#[derive(Debug, Clone, Error)]
pub enum MessageStoreError {
    #[error("message store is not available")]
    Unavailable,

    #[error("database error: {0}")]
    Database(String),
}

/// Write-only store. Messages are read out-of-band, not through this
/// service.
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn insert(&self, data: ContactMessageData)
        -> Result<ContactMessage, MessageStoreError>;
}
