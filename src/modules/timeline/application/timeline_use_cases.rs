use std::sync::Arc;

use crate::timeline::application::use_cases::add_education::AddEducationUseCase;
use crate::timeline::application::use_cases::add_experience::AddExperienceUseCase;
use crate::timeline::application::use_cases::delete_education::DeleteEducationUseCase;
use crate::timeline::application::use_cases::delete_experience::DeleteExperienceUseCase;
use crate::timeline::application::use_cases::fetch_education::FetchEducationUseCase;
use crate::timeline::application::use_cases::fetch_experiences::FetchExperiencesUseCase;
use crate::timeline::application::use_cases::update_education::UpdateEducationUseCase;
use crate::timeline::application::use_cases::update_experience::UpdateExperienceUseCase;

#[derive(Clone)]
pub struct TimelineUseCases {
    pub fetch_experiences: Arc<dyn FetchExperiencesUseCase + Send + Sync>,
    pub add_experience: Arc<dyn AddExperienceUseCase + Send + Sync>,
    pub update_experience: Arc<dyn UpdateExperienceUseCase + Send + Sync>,
    pub delete_experience: Arc<dyn DeleteExperienceUseCase + Send + Sync>,
    pub fetch_education: Arc<dyn FetchEducationUseCase + Send + Sync>,
    pub add_education: Arc<dyn AddEducationUseCase + Send + Sync>,
    pub update_education: Arc<dyn UpdateEducationUseCase + Send + Sync>,
    pub delete_education: Arc<dyn DeleteEducationUseCase + Send + Sync>,
}
