use async_trait::async_trait;

use crate::skill::domain::entities::{Skill, SkillData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillStoreError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[async_trait]
pub trait SkillStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Skill>, SkillStoreError>;

    /// Assigns a fresh id and returns the stored record.
    async fn insert(&self, data: SkillData) -> Result<Skill, SkillStoreError>;

    /// Full-record replace. `NotFound` when no row matched.
    async fn replace(&self, id: &str, data: &SkillData) -> Result<(), SkillStoreError>;

    /// Deleting a nonexistent id is a silent no-op.
    async fn remove(&self, id: &str) -> Result<(), SkillStoreError>;
}
