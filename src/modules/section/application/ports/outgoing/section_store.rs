use async_trait::async_trait;
use thiserror::Error;

use crate::section::domain::entities::{Section, SectionData};

#[derive(Debug, Clone, Error)]
pub enum SectionStoreError {
    #[error("section store is not available")]
    Unavailable,

    #[error("database error: {0}")]
    Database(String),
}

#[async_trait]
pub trait SectionStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Section>, SectionStoreError>;

    async fn get(&self, id: &str) -> Result<Option<Section>, SectionStoreError>;

    /// Inserts the row or overwrites an existing one.
    async fn upsert(&self, id: &str, data: &SectionData) -> Result<(), SectionStoreError>;
}
