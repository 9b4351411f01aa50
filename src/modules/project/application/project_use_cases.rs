use std::sync::Arc;

use crate::project::application::use_cases::add_project::AddProjectUseCase;
use crate::project::application::use_cases::delete_project::DeleteProjectUseCase;
use crate::project::application::use_cases::fetch_project::FetchProjectUseCase;
use crate::project::application::use_cases::fetch_projects::FetchProjectsUseCase;
use crate::project::application::use_cases::update_project::UpdateProjectUseCase;

#[derive(Clone)]
pub struct ProjectUseCases {
    pub fetch_list: Arc<dyn FetchProjectsUseCase + Send + Sync>,
    pub fetch_single: Arc<dyn FetchProjectUseCase + Send + Sync>,
    pub add: Arc<dyn AddProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
}
