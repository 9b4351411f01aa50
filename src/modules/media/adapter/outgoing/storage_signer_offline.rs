use async_trait::async_trait;

use crate::media::application::ports::outgoing::storage_signer::{
    StorageSigner, StorageSignerError,
};
use crate::media::domain::entities::UploadTicket;

/// Stands in when storage is not configured. Uploads are a write
/// path, so they fail rather than degrading.
#[derive(Clone, Default)]
pub struct StorageSignerOffline;

#[async_trait]
impl StorageSigner for StorageSignerOffline {
    async fn create_upload(&self, _object_name: &str) -> Result<UploadTicket, StorageSignerError> {
        Err(StorageSignerError::Unavailable)
    }
}
