use std::sync::Arc;

use async_trait::async_trait;

use crate::project::application::ports::outgoing::project_store::{
    ProjectStore, ProjectStoreError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProjectError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Project delete failed: {0}")]
    Internal(String),
}

/// Deleting a nonexistent id succeeds silently.
#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), DeleteProjectError>;
}

pub struct DeleteProjectService {
    store: Arc<dyn ProjectStore>,
}

impl DeleteProjectService {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DeleteProjectUseCase for DeleteProjectService {
    async fn execute(&self, id: &str) -> Result<(), DeleteProjectError> {
        match self.store.remove(id).await {
            Ok(()) | Err(ProjectStoreError::NotFound) => Ok(()),
            Err(ProjectStoreError::Unavailable) => Err(DeleteProjectError::Unavailable),
            Err(e) => Err(DeleteProjectError::Internal(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::domain::entities::{Project, ProjectData};

    struct MockStore {
        error: Option<ProjectStoreError>,
    }

    #[async_trait]
    impl ProjectStore for MockStore {
        async fn list(&self) -> Result<Vec<Project>, ProjectStoreError> {
            unreachable!()
        }

        async fn get(&self, _id: &str) -> Result<Project, ProjectStoreError> {
            unreachable!()
        }

        async fn insert(&self, _data: ProjectData) -> Result<Project, ProjectStoreError> {
            unreachable!()
        }

        async fn replace(&self, _id: &str, _data: &ProjectData) -> Result<(), ProjectStoreError> {
            unreachable!()
        }

        async fn remove(&self, _id: &str) -> Result<(), ProjectStoreError> {
            match &self.error {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn test_delete_succeeds() {
        let service = DeleteProjectService::new(Arc::new(MockStore { error: None }));
        assert!(service.execute("p-1").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_silent() {
        let service = DeleteProjectService::new(Arc::new(MockStore {
            error: Some(ProjectStoreError::NotFound),
        }));
        assert!(service.execute("ghost").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_offline_fails() {
        let service = DeleteProjectService::new(Arc::new(MockStore {
            error: Some(ProjectStoreError::Unavailable),
        }));
        assert!(matches!(
            service.execute("p-1").await,
            Err(DeleteProjectError::Unavailable)
        ));
    }
}
