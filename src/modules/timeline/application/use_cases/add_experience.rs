use std::sync::Arc;

use async_trait::async_trait;

use crate::timeline::application::ports::outgoing::experience_store::{
    ExperienceStore, ExperienceStoreError,
};
use crate::timeline::domain::entities::{Experience, ExperienceData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddExperienceError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Experience create failed: {0}")]
    Internal(String),
}

impl From<ExperienceStoreError> for AddExperienceError {
    fn from(e: ExperienceStoreError) -> Self {
        match e {
            ExperienceStoreError::Unavailable => AddExperienceError::Unavailable,
            other => AddExperienceError::Internal(other.to_string()),
        }
    }
}

#[async_trait]
pub trait AddExperienceUseCase: Send + Sync {
    async fn execute(&self, data: ExperienceData) -> Result<Experience, AddExperienceError>;
}

pub struct AddExperienceService {
    store: Arc<dyn ExperienceStore>,
}

impl AddExperienceService {
    pub fn new(store: Arc<dyn ExperienceStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AddExperienceUseCase for AddExperienceService {
    async fn execute(&self, data: ExperienceData) -> Result<Experience, AddExperienceError> {
        Ok(self.store.insert(data).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::domain::defaults::default_experiences;
    use uuid::Uuid;

    struct MockStore {
        error: Option<ExperienceStoreError>,
    }

    #[async_trait]
    impl ExperienceStore for MockStore {
        async fn list(&self) -> Result<Vec<Experience>, ExperienceStoreError> {
            unreachable!()
        }

        async fn insert(&self, data: ExperienceData) -> Result<Experience, ExperienceStoreError> {
            if let Some(e) = &self.error {
                return Err(e.clone());
            }
            Ok(Experience {
                id: Uuid::new_v4().to_string(),
                data,
            })
        }

        async fn replace(
            &self,
            _id: &str,
            _data: &ExperienceData,
        ) -> Result<(), ExperienceStoreError> {
            unreachable!()
        }

        async fn remove(&self, _id: &str) -> Result<(), ExperienceStoreError> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn test_add_assigns_id_and_keeps_data() {
        let service = AddExperienceService::new(Arc::new(MockStore { error: None }));
        let data = default_experiences().remove(0).data;

        let experience = service.execute(data.clone()).await.unwrap();
        assert!(!experience.id.is_empty());
        assert_eq!(experience.data, data);
    }

    #[tokio::test]
    async fn test_add_offline_fails() {
        let service = AddExperienceService::new(Arc::new(MockStore {
            error: Some(ExperienceStoreError::Unavailable),
        }));

        let result = service.execute(default_experiences().remove(0).data).await;
        assert!(matches!(result, Err(AddExperienceError::Unavailable)));
    }
}
