use std::sync::Arc;

use async_trait::async_trait;

use crate::interest::application::ports::outgoing::interest_store::{
    InterestStore, InterestStoreError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteInterestError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Interest delete failed: {0}")]
    Internal(String),
}

/// Deleting a nonexistent id succeeds silently.
#[async_trait]
pub trait DeleteInterestUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), DeleteInterestError>;
}

pub struct DeleteInterestService {
    store: Arc<dyn InterestStore>,
}

impl DeleteInterestService {
    pub fn new(store: Arc<dyn InterestStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DeleteInterestUseCase for DeleteInterestService {
    async fn execute(&self, id: &str) -> Result<(), DeleteInterestError> {
        match self.store.remove(id).await {
            Ok(()) | Err(InterestStoreError::NotFound) => Ok(()),
            Err(InterestStoreError::Unavailable) => Err(DeleteInterestError::Unavailable),
            Err(e) => Err(DeleteInterestError::Internal(e.to_string())),
        }
    }
}
