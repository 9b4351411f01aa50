use std::sync::Arc;

use async_trait::async_trait;

use crate::skill::application::ports::outgoing::category_store::{
    CategoryStore, CategoryStoreError,
};
use crate::skill::domain::entities::{SkillCategory, SkillCategoryData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCategoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Backend is not available")]
    Unavailable,

    #[error("Category update failed: {0}")]
    Internal(String),
}

impl From<CategoryStoreError> for UpdateCategoryError {
    fn from(e: CategoryStoreError) -> Self {
        match e {
            CategoryStoreError::NotFound => UpdateCategoryError::NotFound,
            CategoryStoreError::Unavailable => UpdateCategoryError::Unavailable,
            other => UpdateCategoryError::Internal(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UpdateCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        id: &str,
        data: SkillCategoryData,
    ) -> Result<SkillCategory, UpdateCategoryError>;
}

pub struct UpdateCategoryService {
    store: Arc<dyn CategoryStore>,
}

impl UpdateCategoryService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UpdateCategoryUseCase for UpdateCategoryService {
    async fn execute(
        &self,
        id: &str,
        data: SkillCategoryData,
    ) -> Result<SkillCategory, UpdateCategoryError> {
        self.store.replace(id, &data).await?;

        // The caller's input is the source of truth; no re-read.
        Ok(SkillCategory {
            id: id.to_string(),
            data,
        })
    }
}
