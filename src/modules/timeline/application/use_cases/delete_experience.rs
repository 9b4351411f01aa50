use std::sync::Arc;

use async_trait::async_trait;

use crate::timeline::application::ports::outgoing::experience_store::{
    ExperienceStore, ExperienceStoreError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteExperienceError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Experience delete failed: {0}")]
    Internal(String),
}

/// Deleting a nonexistent id succeeds silently.
#[async_trait]
pub trait DeleteExperienceUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), DeleteExperienceError>;
}

pub struct DeleteExperienceService {
    store: Arc<dyn ExperienceStore>,
}

impl DeleteExperienceService {
    pub fn new(store: Arc<dyn ExperienceStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DeleteExperienceUseCase for DeleteExperienceService {
    async fn execute(&self, id: &str) -> Result<(), DeleteExperienceError> {
        match self.store.remove(id).await {
            Ok(()) | Err(ExperienceStoreError::NotFound) => Ok(()),
            Err(ExperienceStoreError::Unavailable) => Err(DeleteExperienceError::Unavailable),
            Err(e) => Err(DeleteExperienceError::Internal(e.to_string())),
        }
    }
}
