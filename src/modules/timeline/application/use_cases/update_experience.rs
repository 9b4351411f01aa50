use std::sync::Arc;

use async_trait::async_trait;

use crate::timeline::application::ports::outgoing::experience_store::{
    ExperienceStore, ExperienceStoreError,
};
use crate::timeline::domain::entities::{Experience, ExperienceData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateExperienceError {
    #[error("Record not found")]
    NotFound,

    #[error("Backend is not available")]
    Unavailable,

    #[error("Experience update failed: {0}")]
    Internal(String),
}

impl From<ExperienceStoreError> for UpdateExperienceError {
    fn from(e: ExperienceStoreError) -> Self {
        match e {
            ExperienceStoreError::NotFound => UpdateExperienceError::NotFound,
            ExperienceStoreError::Unavailable => UpdateExperienceError::Unavailable,
            other => UpdateExperienceError::Internal(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        id: &str,
        data: ExperienceData,
    ) -> Result<Experience, UpdateExperienceError>;
}

pub struct UpdateExperienceService {
    store: Arc<dyn ExperienceStore>,
}

impl UpdateExperienceService {
    pub fn new(store: Arc<dyn ExperienceStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UpdateExperienceUseCase for UpdateExperienceService {
    async fn execute(
        &self,
        id: &str,
        data: ExperienceData,
    ) -> Result<Experience, UpdateExperienceError> {
        self.store.replace(id, &data).await?;

        // The caller's input is the source of truth; no re-read.
        Ok(Experience {
            id: id.to_string(),
            data,
        })
    }
}
