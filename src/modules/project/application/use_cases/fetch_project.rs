use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::project::application::ports::outgoing::project_store::{
    ProjectStore, ProjectStoreError,
};
use crate::project::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Backend is not available")]
    Unavailable,

    #[error("Project fetch failed: {0}")]
    Internal(String),
}

/// Single-project read. When the backend is offline the id is resolved
/// against the fallback catalog so fallback detail links stay navigable;
/// a missing row on a live backend is a plain 404.
#[async_trait]
pub trait FetchProjectUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<Project, FetchProjectError>;
}

pub struct FetchProjectService {
    store: Arc<dyn ProjectStore>,
    fallback: Vec<Project>,
}

impl FetchProjectService {
    pub fn new(store: Arc<dyn ProjectStore>, fallback: Vec<Project>) -> Self {
        Self { store, fallback }
    }
}

#[async_trait]
impl FetchProjectUseCase for FetchProjectService {
    async fn execute(&self, id: &str) -> Result<Project, FetchProjectError> {
        match self.store.get(id).await {
            Ok(project) => Ok(project),
            Err(ProjectStoreError::Unavailable) => {
                warn!(id, "Project fetch offline, resolving against fallback");
                self.fallback
                    .iter()
                    .find(|p| p.id == id)
                    .cloned()
                    .ok_or(FetchProjectError::Unavailable)
            }
            Err(ProjectStoreError::NotFound) => Err(FetchProjectError::NotFound),
            Err(e) => Err(FetchProjectError::Internal(e.to_string())),
        }
    }
}
