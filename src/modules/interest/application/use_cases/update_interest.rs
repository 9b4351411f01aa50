use std::sync::Arc;

use async_trait::async_trait;

use crate::interest::application::ports::outgoing::interest_store::{
    InterestStore, InterestStoreError,
};
use crate::interest::domain::entities::{Interest, InterestData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateInterestError {
    #[error("Record not found")]
    NotFound,

    #[error("Backend is not available")]
    Unavailable,

    #[error("Interest update failed: {0}")]
    Internal(String),
}

impl From<InterestStoreError> for UpdateInterestError {
    fn from(e: InterestStoreError) -> Self {
        match e {
            InterestStoreError::NotFound => UpdateInterestError::NotFound,
            InterestStoreError::Unavailable => UpdateInterestError::Unavailable,
            other => UpdateInterestError::Internal(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UpdateInterestUseCase: Send + Sync {
    async fn execute(&self, id: &str, data: InterestData)
        -> Result<Interest, UpdateInterestError>;
}

pub struct UpdateInterestService {
    store: Arc<dyn InterestStore>,
}

impl UpdateInterestService {
    pub fn new(store: Arc<dyn InterestStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UpdateInterestUseCase for UpdateInterestService {
    async fn execute(
        &self,
        id: &str,
        data: InterestData,
    ) -> Result<Interest, UpdateInterestError> {
        self.store.replace(id, &data).await?;

        // The caller's input is the source of truth; no re-read.
        Ok(Interest {
            id: id.to_string(),
            data,
        })
    }
}
