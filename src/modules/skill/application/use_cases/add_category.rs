use std::sync::Arc;

use async_trait::async_trait;

use crate::skill::application::ports::outgoing::category_store::{
    CategoryStore, CategoryStoreError,
};
use crate::skill::domain::entities::{SkillCategory, SkillCategoryData};
use crate::skill::domain::ordering::next_order;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddCategoryError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Category create failed: {0}")]
    Internal(String),
}

impl From<CategoryStoreError> for AddCategoryError {
    fn from(e: CategoryStoreError) -> Self {
        match e {
            CategoryStoreError::Unavailable => AddCategoryError::Unavailable,
            other => AddCategoryError::Internal(other.to_string()),
        }
    }
}

/// `order` is optional on the wire; when absent the next free slot
/// (max + 1, or 1 on an empty list) is assigned. Advisory only, so a
/// concurrent insert can still produce a duplicate order.
#[async_trait]
pub trait AddCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        name: String,
        order: Option<i32>,
    ) -> Result<SkillCategory, AddCategoryError>;
}

pub struct AddCategoryService {
    store: Arc<dyn CategoryStore>,
}

impl AddCategoryService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AddCategoryUseCase for AddCategoryService {
    async fn execute(
        &self,
        name: String,
        order: Option<i32>,
    ) -> Result<SkillCategory, AddCategoryError> {
        let order = match order {
            Some(order) => order,
            None => next_order(&self.store.list().await?),
        };

        Ok(self.store.insert(SkillCategoryData { name, order }).await?)
    }
}
