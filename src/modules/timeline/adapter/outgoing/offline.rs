use async_trait::async_trait;

use crate::timeline::application::ports::outgoing::education_store::{
    EducationStore, EducationStoreError,
};
use crate::timeline::application::ports::outgoing::experience_store::{
    ExperienceStore, ExperienceStoreError,
};
use crate::timeline::domain::entities::{Education, EducationData, Experience, ExperienceData};

/// Null objects wired in when the app boots without a database.

#[derive(Clone, Default)]
pub struct ExperienceStoreOffline;

#[async_trait]
impl ExperienceStore for ExperienceStoreOffline {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceStoreError> {
        Err(ExperienceStoreError::Unavailable)
    }

    async fn insert(&self, _data: ExperienceData) -> Result<Experience, ExperienceStoreError> {
        Err(ExperienceStoreError::Unavailable)
    }

    async fn replace(
        &self,
        _id: &str,
        _data: &ExperienceData,
    ) -> Result<(), ExperienceStoreError> {
        Err(ExperienceStoreError::Unavailable)
    }

    async fn remove(&self, _id: &str) -> Result<(), ExperienceStoreError> {
        Err(ExperienceStoreError::Unavailable)
    }
}

#[derive(Clone, Default)]
pub struct EducationStoreOffline;

#[async_trait]
impl EducationStore for EducationStoreOffline {
    async fn list(&self) -> Result<Vec<Education>, EducationStoreError> {
        Err(EducationStoreError::Unavailable)
    }

    async fn insert(&self, _data: EducationData) -> Result<Education, EducationStoreError> {
        Err(EducationStoreError::Unavailable)
    }

    async fn replace(&self, _id: &str, _data: &EducationData) -> Result<(), EducationStoreError> {
        Err(EducationStoreError::Unavailable)
    }

    async fn remove(&self, _id: &str) -> Result<(), EducationStoreError> {
        Err(EducationStoreError::Unavailable)
    }
}
