use async_trait::async_trait;

use crate::timeline::domain::entities::{Education, EducationData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationStoreError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}

#[async_trait]
pub trait EducationStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Education>, EducationStoreError>;

    /// Assigns a fresh id and returns the stored record.
    async fn insert(&self, data: EducationData) -> Result<Education, EducationStoreError>;

    /// Full-record replace. `NotFound` when no row matched.
    async fn replace(&self, id: &str, data: &EducationData) -> Result<(), EducationStoreError>;

    /// Deleting a nonexistent id is a silent no-op.
    async fn remove(&self, id: &str) -> Result<(), EducationStoreError>;
}
