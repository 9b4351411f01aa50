use async_trait::async_trait;

use crate::timeline::domain::entities::{Experience, ExperienceData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceStoreError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}

#[async_trait]
pub trait ExperienceStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceStoreError>;

    /// Assigns a fresh id and returns the stored record.
    async fn insert(&self, data: ExperienceData) -> Result<Experience, ExperienceStoreError>;

    /// Full-record replace. `NotFound` when no row matched.
    async fn replace(&self, id: &str, data: &ExperienceData)
        -> Result<(), ExperienceStoreError>;

    /// Deleting a nonexistent id is a silent no-op.
    async fn remove(&self, id: &str) -> Result<(), ExperienceStoreError>;
}
