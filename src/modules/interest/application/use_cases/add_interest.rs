use std::sync::Arc;

use async_trait::async_trait;

use crate::interest::application::ports::outgoing::interest_store::{
    InterestStore, InterestStoreError,
};
use crate::interest::domain::entities::{Interest, InterestData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddInterestError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Interest create failed: {0}")]
    Internal(String),
}

impl From<InterestStoreError> for AddInterestError {
    fn from(e: InterestStoreError) -> Self {
        match e {
            InterestStoreError::Unavailable => AddInterestError::Unavailable,
            other => AddInterestError::Internal(other.to_string()),
        }
    }
}

#[async_trait]
pub trait AddInterestUseCase: Send + Sync {
    async fn execute(&self, data: InterestData) -> Result<Interest, AddInterestError>;
}

pub struct AddInterestService {
    store: Arc<dyn InterestStore>,
}

impl AddInterestService {
    pub fn new(store: Arc<dyn InterestStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AddInterestUseCase for AddInterestService {
    async fn execute(&self, data: InterestData) -> Result<Interest, AddInterestError> {
        Ok(self.store.insert(data).await?)
    }
}
