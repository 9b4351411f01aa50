use std::sync::Arc;

use async_trait::async_trait;

use crate::skill::application::ports::outgoing::skill_store::{SkillStore, SkillStoreError};
use crate::skill::domain::entities::{Skill, SkillData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSkillError {
    #[error("Record not found")]
    NotFound,

    #[error("Backend is not available")]
    Unavailable,

    #[error("Skill update failed: {0}")]
    Internal(String),
}

impl From<SkillStoreError> for UpdateSkillError {
    fn from(e: SkillStoreError) -> Self {
        match e {
            SkillStoreError::NotFound => UpdateSkillError::NotFound,
            SkillStoreError::Unavailable => UpdateSkillError::Unavailable,
            other => UpdateSkillError::Internal(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(&self, id: &str, data: SkillData) -> Result<Skill, UpdateSkillError>;
}

pub struct UpdateSkillService {
    store: Arc<dyn SkillStore>,
}

impl UpdateSkillService {
    pub fn new(store: Arc<dyn SkillStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UpdateSkillUseCase for UpdateSkillService {
    async fn execute(&self, id: &str, data: SkillData) -> Result<Skill, UpdateSkillError> {
        self.store.replace(id, &data).await?;

        // The caller's input is the source of truth; no re-read.
        Ok(Skill {
            id: id.to_string(),
            data,
        })
    }
}
