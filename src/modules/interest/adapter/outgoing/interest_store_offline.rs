use async_trait::async_trait;

use crate::interest::application::ports::outgoing::interest_store::{
    InterestStore, InterestStoreError,
};
use crate::interest::domain::entities::{Interest, InterestData};

/// Null object wired in when the app boots without a database.
#[derive(Clone, Default)]
pub struct InterestStoreOffline;

#[async_trait]
impl InterestStore for InterestStoreOffline {
    async fn list(&self) -> Result<Vec<Interest>, InterestStoreError> {
        Err(InterestStoreError::Unavailable)
    }

    async fn insert(&self, _data: InterestData) -> Result<Interest, InterestStoreError> {
        Err(InterestStoreError::Unavailable)
    }

    async fn replace(&self, _id: &str, _data: &InterestData) -> Result<(), InterestStoreError> {
        Err(InterestStoreError::Unavailable)
    }

    async fn remove(&self, _id: &str) -> Result<(), InterestStoreError> {
        Err(InterestStoreError::Unavailable)
    }
}
