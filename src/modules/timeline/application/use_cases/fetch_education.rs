use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::timeline::application::ports::outgoing::education_store::EducationStore;
use crate::timeline::domain::entities::Education;
use crate::timeline::domain::sorting::sort_most_recent_first;

/// Education history, same sort rule as experiences. Never fails.
#[async_trait]
pub trait FetchEducationUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Education>;
}

pub struct FetchEducationService {
    store: Arc<dyn EducationStore>,
    fallback: Vec<Education>,
}

impl FetchEducationService {
    pub fn new(store: Arc<dyn EducationStore>, fallback: Vec<Education>) -> Self {
        Self { store, fallback }
    }
}

#[async_trait]
impl FetchEducationUseCase for FetchEducationService {
    async fn execute(&self) -> Vec<Education> {
        let mut education = match self.store.list().await {
            Ok(education) if !education.is_empty() => education,
            Ok(_) => self.fallback.clone(),
            Err(e) => {
                warn!(error = %e, "Education list failed, serving fallback");
                self.fallback.clone()
            }
        };

        sort_most_recent_first(&mut education, |e| e.data.end_date);
        education
    }
}
