use async_trait::async_trait;

use crate::section::application::ports::outgoing::section_store::{
    SectionStore, SectionStoreError,
};
use crate::section::domain::entities::{Section, SectionData};

/// Stands in when the database is not configured. Reads degrade
/// upstream (fallback list, visible-by-default); writes surface the
/// unavailability.
#[derive(Clone, Default)]
pub struct SectionStoreOffline;

#[async_trait]
impl SectionStore for SectionStoreOffline {
    async fn list(&self) -> Result<Vec<Section>, SectionStoreError> {
        Err(SectionStoreError::Unavailable)
    }

    async fn get(&self, _id: &str) -> Result<Option<Section>, SectionStoreError> {
        Err(SectionStoreError::Unavailable)
    }

    async fn upsert(&self, _id: &str, _data: &SectionData) -> Result<(), SectionStoreError> {
        Err(SectionStoreError::Unavailable)
    }
}
