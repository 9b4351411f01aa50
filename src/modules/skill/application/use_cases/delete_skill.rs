use std::sync::Arc;

use async_trait::async_trait;

use crate::skill::application::ports::outgoing::skill_store::{SkillStore, SkillStoreError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteSkillError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Skill delete failed: {0}")]
    Internal(String),
}

/// Deleting a nonexistent id succeeds silently.
#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), DeleteSkillError>;
}

pub struct DeleteSkillService {
    store: Arc<dyn SkillStore>,
}

impl DeleteSkillService {
    pub fn new(store: Arc<dyn SkillStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DeleteSkillUseCase for DeleteSkillService {
    async fn execute(&self, id: &str) -> Result<(), DeleteSkillError> {
        match self.store.remove(id).await {
            Ok(()) | Err(SkillStoreError::NotFound) => Ok(()),
            Err(SkillStoreError::Unavailable) => Err(DeleteSkillError::Unavailable),
            Err(e) => Err(DeleteSkillError::Internal(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::domain::entities::{Skill, SkillData};

    struct MockStore {
        error: Option<SkillStoreError>,
    }

    #[async_trait]
    impl SkillStore for MockStore {
        async fn list(&self) -> Result<Vec<Skill>, SkillStoreError> {
            unreachable!()
        }

        async fn insert(&self, _data: SkillData) -> Result<Skill, SkillStoreError> {
            unreachable!()
        }

        async fn replace(&self, _id: &str, _data: &SkillData) -> Result<(), SkillStoreError> {
            unreachable!()
        }

        async fn remove(&self, _id: &str) -> Result<(), SkillStoreError> {
            match &self.error {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn test_delete_succeeds() {
        let service = DeleteSkillService::new(Arc::new(MockStore { error: None }));
        assert!(service.execute("s-1").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_offline_fails() {
        let service = DeleteSkillService::new(Arc::new(MockStore {
            error: Some(SkillStoreError::Unavailable),
        }));
        assert!(matches!(
            service.execute("s-1").await,
            Err(DeleteSkillError::Unavailable)
        ));
    }
}
