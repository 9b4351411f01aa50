use async_trait::async_trait;

use crate::skill::application::ports::outgoing::category_store::{
    CategoryStore, CategoryStoreError,
};
use crate::skill::application::ports::outgoing::skill_store::{SkillStore, SkillStoreError};
use crate::skill::domain::entities::{Skill, SkillCategory, SkillCategoryData, SkillData};

/// Null objects wired in when the app boots without a database.

#[derive(Clone, Default)]
pub struct SkillStoreOffline;

#[async_trait]
impl SkillStore for SkillStoreOffline {
    async fn list(&self) -> Result<Vec<Skill>, SkillStoreError> {
        Err(SkillStoreError::Unavailable)
    }

    async fn insert(&self, _data: SkillData) -> Result<Skill, SkillStoreError> {
        Err(SkillStoreError::Unavailable)
    }

    async fn replace(&self, _id: &str, _data: &SkillData) -> Result<(), SkillStoreError> {
        Err(SkillStoreError::Unavailable)
    }

    async fn remove(&self, _id: &str) -> Result<(), SkillStoreError> {
        Err(SkillStoreError::Unavailable)
    }
}

#[derive(Clone, Default)]
pub struct CategoryStoreOffline;

#[async_trait]
impl CategoryStore for CategoryStoreOffline {
    async fn list(&self) -> Result<Vec<SkillCategory>, CategoryStoreError> {
        Err(CategoryStoreError::Unavailable)
    }

    async fn insert(&self, _data: SkillCategoryData) -> Result<SkillCategory, CategoryStoreError> {
        Err(CategoryStoreError::Unavailable)
    }

    async fn replace(
        &self,
        _id: &str,
        _data: &SkillCategoryData,
    ) -> Result<(), CategoryStoreError> {
        Err(CategoryStoreError::Unavailable)
    }

    async fn remove(&self, _id: &str) -> Result<(), CategoryStoreError> {
        Err(CategoryStoreError::Unavailable)
    }
}
