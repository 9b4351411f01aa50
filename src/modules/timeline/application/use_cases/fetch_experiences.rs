use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::timeline::application::ports::outgoing::experience_store::ExperienceStore;
use crate::timeline::domain::entities::Experience;
use crate::timeline::domain::sorting::sort_most_recent_first;

/// Work history, most recent first (open-ended positions on top).
/// Never fails; degrades to the injected fallback catalog.
#[async_trait]
pub trait FetchExperiencesUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Experience>;
}

pub struct FetchExperiencesService {
    store: Arc<dyn ExperienceStore>,
    fallback: Vec<Experience>,
}

impl FetchExperiencesService {
    pub fn new(store: Arc<dyn ExperienceStore>, fallback: Vec<Experience>) -> Self {
        Self { store, fallback }
    }
}

#[async_trait]
impl FetchExperiencesUseCase for FetchExperiencesService {
    async fn execute(&self) -> Vec<Experience> {
        let mut experiences = match self.store.list().await {
            Ok(experiences) if !experiences.is_empty() => experiences,
            Ok(_) => self.fallback.clone(),
            Err(e) => {
                warn!(error = %e, "Experience list failed, serving fallback");
                self.fallback.clone()
            }
        };

        sort_most_recent_first(&mut experiences, |e| e.data.end_date);
        experiences
    }
}
