use std::sync::Arc;

use async_trait::async_trait;

use crate::timeline::application::ports::outgoing::education_store::{
    EducationStore, EducationStoreError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteEducationError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Education delete failed: {0}")]
    Internal(String),
}

/// Deleting a nonexistent id succeeds silently.
#[async_trait]
pub trait DeleteEducationUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), DeleteEducationError>;
}

pub struct DeleteEducationService {
    store: Arc<dyn EducationStore>,
}

impl DeleteEducationService {
    pub fn new(store: Arc<dyn EducationStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DeleteEducationUseCase for DeleteEducationService {
    async fn execute(&self, id: &str) -> Result<(), DeleteEducationError> {
        match self.store.remove(id).await {
            Ok(()) | Err(EducationStoreError::NotFound) => Ok(()),
            Err(EducationStoreError::Unavailable) => Err(DeleteEducationError::Unavailable),
            Err(e) => Err(DeleteEducationError::Internal(e.to_string())),
        }
    }
}
