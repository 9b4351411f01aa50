use async_trait::async_trait;

use crate::profile::domain::entities::Profile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Database error: {0}")]
    Database(String),
}

/// Port over the single profile row.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// `Ok(None)` means the row has never been written.
    async fn get(&self) -> Result<Option<Profile>, ProfileStoreError>;

    /// Full-record upsert.
    async fn put(&self, profile: &Profile) -> Result<(), ProfileStoreError>;
}
