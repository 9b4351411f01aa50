use async_trait::async_trait;
use thiserror::Error;

use crate::media::domain::entities::UploadTicket;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageSignerError {
    #[error("storage is not available")]
    Unavailable,

    #[error("access denied")]
    AccessDenied,

    #[error("bucket not found")]
    BucketNotFound,

    #[error("invalid storage configuration")]
    Configuration,

    #[error("infrastructure error")]
    Infrastructure,
}

/// Signs URLs so the dashboard can upload directly to object storage
/// without routing file bytes through this service.
#[async_trait]
pub trait StorageSigner: Send + Sync {
    async fn create_upload(&self, object_name: &str) -> Result<UploadTicket, StorageSignerError>;
}
