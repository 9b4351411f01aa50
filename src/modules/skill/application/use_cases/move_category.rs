use std::sync::Arc;

use async_trait::async_trait;

use crate::skill::application::ports::outgoing::category_store::{
    CategoryStore, CategoryStoreError,
};
use crate::skill::domain::entities::{MoveDirection, SkillCategory, SkillCategoryData};
use crate::skill::domain::ordering::sort_by_order;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MoveCategoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Backend is not available")]
    Unavailable,

    #[error("Category move failed: {0}")]
    Internal(String),
}

impl From<CategoryStoreError> for MoveCategoryError {
    fn from(e: CategoryStoreError) -> Self {
        match e {
            CategoryStoreError::NotFound => MoveCategoryError::NotFound,
            CategoryStoreError::Unavailable => MoveCategoryError::Unavailable,
            other => MoveCategoryError::Internal(other.to_string()),
        }
    }
}

/// Swaps the category's `order` with its neighbor in the given
/// direction and returns the re-sorted list. Moving past an edge is a
/// no-op.
///
/// The swap is two independent writes with no transaction: a failure
/// between them leaves the orders half-applied, possibly duplicated.
/// Known limitation, kept as-is until reordering gets a product-level
/// conflict story.
#[async_trait]
pub trait MoveCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        id: &str,
        direction: MoveDirection,
    ) -> Result<Vec<SkillCategory>, MoveCategoryError>;
}

pub struct MoveCategoryService {
    store: Arc<dyn CategoryStore>,
}

impl MoveCategoryService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MoveCategoryUseCase for MoveCategoryService {
    async fn execute(
        &self,
        id: &str,
        direction: MoveDirection,
    ) -> Result<Vec<SkillCategory>, MoveCategoryError> {
        let mut categories = sort_by_order(self.store.list().await?);

        let index = categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(MoveCategoryError::NotFound)?;

        let neighbor = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < categories.len() => index + 1,
            _ => return Ok(categories),
        };

        let current_order = categories[index].data.order;
        let neighbor_order = categories[neighbor].data.order;

        let current_data = SkillCategoryData {
            name: categories[index].data.name.clone(),
            order: neighbor_order,
        };
        let neighbor_data = SkillCategoryData {
            name: categories[neighbor].data.name.clone(),
            order: current_order,
        };

        self.store.replace(&categories[index].id, &current_data).await?;
        self.store
            .replace(&categories[neighbor].id, &neighbor_data)
            .await?;

        categories[index].data = current_data;
        categories[neighbor].data = neighbor_data;

        Ok(sort_by_order(categories))
    }
}
