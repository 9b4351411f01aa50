use async_trait::async_trait;

use crate::project::application::ports::outgoing::project_store::{
    ProjectStore, ProjectStoreError,
};
use crate::project::domain::entities::{Project, ProjectData};

/// Stand-in used when the app boots without a database. Every call
/// reports `Unavailable` so reads fall back and writes surface a 503.
#[derive(Clone, Default)]
pub struct ProjectStoreOffline;

#[async_trait]
impl ProjectStore for ProjectStoreOffline {
    async fn list(&self) -> Result<Vec<Project>, ProjectStoreError> {
        Err(ProjectStoreError::Unavailable)
    }

    async fn get(&self, _id: &str) -> Result<Project, ProjectStoreError> {
        Err(ProjectStoreError::Unavailable)
    }

    async fn insert(&self, _data: ProjectData) -> Result<Project, ProjectStoreError> {
        Err(ProjectStoreError::Unavailable)
    }

    async fn replace(&self, _id: &str, _data: &ProjectData) -> Result<(), ProjectStoreError> {
        Err(ProjectStoreError::Unavailable)
    }

    async fn remove(&self, _id: &str) -> Result<(), ProjectStoreError> {
        Err(ProjectStoreError::Unavailable)
    }
}
