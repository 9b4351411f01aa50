use async_trait::async_trait;

use crate::skill::domain::entities::{SkillCategory, SkillCategoryData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryStoreError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}

#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn list(&self) -> Result<Vec<SkillCategory>, CategoryStoreError>;

    /// Assigns a fresh id and returns the stored record.
    async fn insert(&self, data: SkillCategoryData) -> Result<SkillCategory, CategoryStoreError>;

    /// Full-record replace. `NotFound` when no row matched.
    async fn replace(&self, id: &str, data: &SkillCategoryData)
        -> Result<(), CategoryStoreError>;

    /// Deleting a nonexistent id is a silent no-op.
    async fn remove(&self, id: &str) -> Result<(), CategoryStoreError>;
}
