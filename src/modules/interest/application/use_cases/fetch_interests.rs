use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::interest::application::ports::outgoing::interest_store::InterestStore;
use crate::interest::domain::entities::Interest;

/// Public interest list, unordered. Never fails; degrades to the
/// injected fallback catalog.
#[async_trait]
pub trait FetchInterestsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Interest>;
}

pub struct FetchInterestsService {
    store: Arc<dyn InterestStore>,
    fallback: Vec<Interest>,
}

impl FetchInterestsService {
    pub fn new(store: Arc<dyn InterestStore>, fallback: Vec<Interest>) -> Self {
        Self { store, fallback }
    }
}

#[async_trait]
impl FetchInterestsUseCase for FetchInterestsService {
    async fn execute(&self) -> Vec<Interest> {
        match self.store.list().await {
            Ok(interests) if !interests.is_empty() => interests,
            Ok(_) => self.fallback.clone(),
            Err(e) => {
                warn!(error = %e, "Interest list failed, serving fallback");
                self.fallback.clone()
            }
        }
    }
}
