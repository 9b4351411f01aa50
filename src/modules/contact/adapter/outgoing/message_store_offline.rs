use async_trait::async_trait;

use crate::contact::application::ports::outgoing::message_store::{
    MessageStore, MessageStoreError,
};
use crate::contact::domain::entities::{ContactMessage, ContactMessageData};

/// Stands in when the database is not configured. Contact submission
/// is a write path, so it fails rather than degrading.
#[derive(Clone, Default)]
pub struct MessageStoreOffline;

#[async_trait]
impl MessageStore for MessageStoreOffline {
    async fn insert(
        &self,
        _data: ContactMessageData,
    ) -> Result<ContactMessage, MessageStoreError> {
        Err(MessageStoreError::Unavailable)
    }
}
