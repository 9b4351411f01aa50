use std::sync::Arc;

use async_trait::async_trait;

use crate::skill::application::ports::outgoing::skill_store::{SkillStore, SkillStoreError};
use crate::skill::domain::entities::{Skill, SkillData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddSkillError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Skill create failed: {0}")]
    Internal(String),
}

impl From<SkillStoreError> for AddSkillError {
    fn from(e: SkillStoreError) -> Self {
        match e {
            SkillStoreError::Unavailable => AddSkillError::Unavailable,
            other => AddSkillError::Internal(other.to_string()),
        }
    }
}

#[async_trait]
pub trait AddSkillUseCase: Send + Sync {
    async fn execute(&self, data: SkillData) -> Result<Skill, AddSkillError>;
}

pub struct AddSkillService {
    store: Arc<dyn SkillStore>,
}

impl AddSkillService {
    pub fn new(store: Arc<dyn SkillStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AddSkillUseCase for AddSkillService {
    async fn execute(&self, data: SkillData) -> Result<Skill, AddSkillError> {
        Ok(self.store.insert(data).await?)
    }
}
