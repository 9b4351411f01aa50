use std::sync::Arc;

use async_trait::async_trait;

use crate::project::application::ports::outgoing::project_store::{
    ProjectStore, ProjectStoreError,
};
use crate::project::domain::entities::{Project, ProjectData};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddProjectError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Project create failed: {0}")]
    Internal(String),
}

impl From<ProjectStoreError> for AddProjectError {
    fn from(e: ProjectStoreError) -> Self {
        match e {
            ProjectStoreError::Unavailable => AddProjectError::Unavailable,
            other => AddProjectError::Internal(other.to_string()),
        }
    }
}

#[async_trait]
pub trait AddProjectUseCase: Send + Sync {
    async fn execute(&self, data: ProjectData) -> Result<Project, AddProjectError>;
}

pub struct AddProjectService {
    store: Arc<dyn ProjectStore>,
}

impl AddProjectService {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AddProjectUseCase for AddProjectService {
    async fn execute(&self, data: ProjectData) -> Result<Project, AddProjectError> {
        Ok(self.store.insert(data).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::domain::defaults::default_projects;
    use uuid::Uuid;

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

        async fn insert(&self, data: ProjectData) -> Result<Project, ProjectStoreError> {
            if let Some(e) = &self.error {
                return Err(e.clone());
            }
            Ok(Project {
                id: Uuid::new_v4().to_string(),
                data,
            })
        }

        async fn replace(&self, _id: &str, _data: &ProjectData) -> Result<(), ProjectStoreError> {
            unreachable!()
        }

        async fn remove(&self, _id: &str) -> Result<(), ProjectStoreError> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn test_add_assigns_id_and_keeps_data() {
        let service = AddProjectService::new(Arc::new(MockStore { error: None }));
        let data = default_projects().remove(0).data;

        let project = service.execute(data.clone()).await.unwrap();
        assert!(!project.id.is_empty());
        assert_eq!(project.data, data);
    }

    #[tokio::test]
    async fn test_add_offline_fails() {
        let service = AddProjectService::new(Arc::new(MockStore {
            error: Some(ProjectStoreError::Unavailable),
        }));

        let result = service.execute(default_projects().remove(0).data).await;
        assert!(matches!(result, Err(AddProjectError::Unavailable)));
    }
}
