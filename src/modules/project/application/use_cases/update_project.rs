use std::sync::Arc;

use async_trait::async_trait;

use crate::project::application::ports::outgoing::project_store::{
    ProjectStore, ProjectStoreError,
};
use crate::project::domain::entities::{Project, ProjectData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Backend is not available")]
    Unavailable,

    #[error("Project update failed: {0}")]
    Internal(String),
}

impl From<ProjectStoreError> for UpdateProjectError {
    fn from(e: ProjectStoreError) -> Self {
        match e {
            ProjectStoreError::Unavailable => UpdateProjectError::Unavailable,
            ProjectStoreError::NotFound => UpdateProjectError::NotFound,
            other => UpdateProjectError::Internal(other.to_string()),
        }
    }
}

/// Full-record replace. The result is the caller's input joined with the
/// id, never re-read from the database.
#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, id: &str, data: ProjectData) -> Result<Project, UpdateProjectError>;
}

pub struct UpdateProjectService {
    store: Arc<dyn ProjectStore>,
}

impl UpdateProjectService {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UpdateProjectUseCase for UpdateProjectService {
    async fn execute(&self, id: &str, data: ProjectData) -> Result<Project, UpdateProjectError> {
        self.store.replace(id, &data).await?;
        Ok(Project {
            id: id.to_string(),
            data,
        })
    }
}
