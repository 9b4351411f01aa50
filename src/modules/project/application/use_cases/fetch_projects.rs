use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::project::application::ports::outgoing::project_store::ProjectStore;
use crate::project::domain::entities::Project;

/// Public project list. Never fails: any store error or an empty
/// collection degrades to the injected fallback catalog, whole, never
/// merged with partial rows.
#[async_trait]
pub trait FetchProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Project>;
}

pub struct FetchProjectsService {
    store: Arc<dyn ProjectStore>,
    fallback: Vec<Project>,
}

impl FetchProjectsService {
    pub fn new(store: Arc<dyn ProjectStore>, fallback: Vec<Project>) -> Self {
        Self { store, fallback }
    }
}

#[async_trait]
impl FetchProjectsUseCase for FetchProjectsService {
    async fn execute(&self) -> Vec<Project> {
        match self.store.list().await {
            Ok(projects) if !projects.is_empty() => projects,
            Ok(_) => self.fallback.clone(),
            Err(e) => {
                warn!(error = %e, "Project list failed, serving fallback");
                self.fallback.clone()
            }
        }
    }
}
