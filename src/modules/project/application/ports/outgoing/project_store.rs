use async_trait::async_trait;

use crate::project::domain::entities::{Project, ProjectData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectStoreError {
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
pub trait ProjectStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, ProjectStoreError>;

    async fn get(&self, id: &str) -> Result<Project, ProjectStoreError>;

    /// Assigns a fresh id and returns the stored record.
    async fn insert(&self, data: ProjectData) -> Result<Project, ProjectStoreError>;

    /// Full-record replace. `NotFound` when no row matched.
    async fn replace(&self, id: &str, data: &ProjectData) -> Result<(), ProjectStoreError>;

    /// Deleting a nonexistent id is a silent no-op.
    async fn remove(&self, id: &str) -> Result<(), ProjectStoreError>;
}
