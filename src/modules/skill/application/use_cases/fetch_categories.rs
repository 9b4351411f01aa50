use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::skill::application::ports::outgoing::category_store::CategoryStore;
use crate::skill::domain::entities::SkillCategory;
use crate::skill::domain::ordering::sort_by_order;

/// Category list in display order. Never fails; degrades to the
/// injected fallback catalog.
#[async_trait]
pub trait FetchCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Vec<SkillCategory>;
}

pub struct FetchCategoriesService {
    store: Arc<dyn CategoryStore>,
    fallback: Vec<SkillCategory>,
}

impl FetchCategoriesService {
    pub fn new(store: Arc<dyn CategoryStore>, fallback: Vec<SkillCategory>) -> Self {
        Self { store, fallback }
    }
}

#[async_trait]
impl FetchCategoriesUseCase for FetchCategoriesService {
    async fn execute(&self) -> Vec<SkillCategory> {
        let categories = match self.store.list().await {
            Ok(categories) if !categories.is_empty() => categories,
            Ok(_) => self.fallback.clone(),
            Err(e) => {
                warn!(error = %e, "Category list failed, serving fallback");
                self.fallback.clone()
            }
        };

        sort_by_order(categories)
    }
}
