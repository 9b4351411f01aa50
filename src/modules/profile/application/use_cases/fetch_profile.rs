use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::profile::application::ports::outgoing::profile_store::ProfileStore;
use crate::profile::domain::entities::Profile;

/// Public profile read. Never fails: a missing row, an offline backend, or
/// a database error all degrade to the fallback profile.
#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn execute(&self) -> Profile;
}

pub struct FetchProfileService {
    store: Arc<dyn ProfileStore>,
    fallback: Profile,
}

impl FetchProfileService {
    pub fn new(store: Arc<dyn ProfileStore>, fallback: Profile) -> Self {
        Self { store, fallback }
    }
}

#[async_trait]
impl FetchProfileUseCase for FetchProfileService {
    async fn execute(&self) -> Profile {
        match self.store.get().await {
            Ok(Some(profile)) => profile,
            Ok(None) => self.fallback.clone(),
            Err(e) => {
                warn!(error = %e, "Profile read failed, serving fallback");
                self.fallback.clone()
            }
        }
    }
}
