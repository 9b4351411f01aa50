use std::sync::Arc;

use async_trait::async_trait;

use crate::timeline::application::ports::outgoing::education_store::{
    EducationStore, EducationStoreError,
};
use crate::timeline::domain::entities::{Education, EducationData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateEducationError {
    #[error("Record not found")]
    NotFound,

    #[error("Backend is not available")]
    Unavailable,

    #[error("Education update failed: {0}")]
    Internal(String),
}

impl From<EducationStoreError> for UpdateEducationError {
    fn from(e: EducationStoreError) -> Self {
        match e {
            EducationStoreError::NotFound => UpdateEducationError::NotFound,
            EducationStoreError::Unavailable => UpdateEducationError::Unavailable,
            other => UpdateEducationError::Internal(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UpdateEducationUseCase: Send + Sync {
    async fn execute(
        &self,
        id: &str,
        data: EducationData,
    ) -> Result<Education, UpdateEducationError>;
}

pub struct UpdateEducationService {
    store: Arc<dyn EducationStore>,
}

impl UpdateEducationService {
    pub fn new(store: Arc<dyn EducationStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UpdateEducationUseCase for UpdateEducationService {
    async fn execute(
        &self,
        id: &str,
        data: EducationData,
    ) -> Result<Education, UpdateEducationError> {
        self.store.replace(id, &data).await?;

        // The caller's input is the source of truth; no re-read.
        Ok(Education {
            id: id.to_string(),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::domain::defaults::default_education;

    struct MockStore {
        error: Option<EducationStoreError>,
    }

    #[async_trait]
    impl EducationStore for MockStore {
        async fn list(&self) -> Result<Vec<Education>, EducationStoreError> {
            unreachable!()
        }

        async fn insert(&self, _data: EducationData) -> Result<Education, EducationStoreError> {
            unreachable!()
        }

        async fn replace(
            &self,
            _id: &str,
            _data: &EducationData,
        ) -> Result<(), EducationStoreError> {
            match &self.error {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }

        async fn remove(&self, _id: &str) -> Result<(), EducationStoreError> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn test_update_echoes_input() {
        let service = UpdateEducationService::new(Arc::new(MockStore { error: None }));
        let data = default_education().remove(0).data;

        let education = service.execute("ed-1", data.clone()).await.unwrap();
        assert_eq!(education.id, "ed-1");
        assert_eq!(education.data, data);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let service = UpdateEducationService::new(Arc::new(MockStore {
            error: Some(EducationStoreError::NotFound),
        }));

        let result = service
            .execute("ghost", default_education().remove(0).data)
            .await;
        assert!(matches!(result, Err(UpdateEducationError::NotFound)));
    }
}
