use async_trait::async_trait;

use crate::interest::domain::entities::{Interest, InterestData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum InterestStoreError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}

#[async_trait]
pub trait InterestStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Interest>, InterestStoreError>;

    /// Assigns a fresh id and returns the stored record.
    async fn insert(&self, data: InterestData) -> Result<Interest, InterestStoreError>;

    /// Full-record replace. `NotFound` when no row matched.
    async fn replace(&self, id: &str, data: &InterestData) -> Result<(), InterestStoreError>;

    /// Deleting a nonexistent id is a silent no-op.
    async fn remove(&self, id: &str) -> Result<(), InterestStoreError>;
}
