use std::sync::Arc;

use async_trait::async_trait;

use crate::timeline::application::ports::outgoing::education_store::{
    EducationStore, EducationStoreError,
};
use crate::timeline::domain::entities::{Education, EducationData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddEducationError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Education create failed: {0}")]
    Internal(String),
}

impl From<EducationStoreError> for AddEducationError {
    fn from(e: EducationStoreError) -> Self {
        match e {
            EducationStoreError::Unavailable => AddEducationError::Unavailable,
            other => AddEducationError::Internal(other.to_string()),
        }
    }
}

#[async_trait]
pub trait AddEducationUseCase: Send + Sync {
    async fn execute(&self, data: EducationData) -> Result<Education, AddEducationError>;
}

pub struct AddEducationService {
    store: Arc<dyn EducationStore>,
}

impl AddEducationService {
    pub fn new(store: Arc<dyn EducationStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AddEducationUseCase for AddEducationService {
    async fn execute(&self, data: EducationData) -> Result<Education, AddEducationError> {
        Ok(self.store.insert(data).await?)
    }
}
