use std::sync::Arc;

use async_trait::async_trait;

use crate::skill::application::ports::outgoing::category_store::{
    CategoryStore, CategoryStoreError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCategoryError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Category delete failed: {0}")]
    Internal(String),
}

/// Deleting a nonexistent id succeeds silently. Skills referencing the
/// category keep their label; no cascading cleanup.
#[async_trait]
pub trait DeleteCategoryUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), DeleteCategoryError>;
}

pub struct DeleteCategoryService {
    store: Arc<dyn CategoryStore>,
}

impl DeleteCategoryService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DeleteCategoryUseCase for DeleteCategoryService {
    async fn execute(&self, id: &str) -> Result<(), DeleteCategoryError> {
        match self.store.remove(id).await {
            Ok(()) | Err(CategoryStoreError::NotFound) => Ok(()),
            Err(CategoryStoreError::Unavailable) => Err(DeleteCategoryError::Unavailable),
            Err(e) => Err(DeleteCategoryError::Internal(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::domain::entities::{SkillCategory, SkillCategoryData};

    struct MockStore {
        error: Option<CategoryStoreError>,
    }

    #[async_trait]
    impl CategoryStore for MockStore {
        async fn list(&self) -> Result<Vec<SkillCategory>, CategoryStoreError> {
            unreachable!()
        }

        async fn insert(
            &self,
            _data: SkillCategoryData,
        ) -> Result<SkillCategory, CategoryStoreError> {
            unreachable!()
        }

        async fn replace(
            &self,
            _id: &str,
            _data: &SkillCategoryData,
        ) -> Result<(), CategoryStoreError> {
            unreachable!()
        }

        async fn remove(&self, _id: &str) -> Result<(), CategoryStoreError> {
            match &self.error {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn test_delete_succeeds() {
        let service = DeleteCategoryService::new(Arc::new(MockStore { error: None }));
        assert!(service.execute("frontend").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_offline_fails() {
        let service = DeleteCategoryService::new(Arc::new(MockStore {
            error: Some(CategoryStoreError::Unavailable),
        }));
        assert!(matches!(
            service.execute("frontend").await,
            Err(DeleteCategoryError::Unavailable)
        ));
    }
}
