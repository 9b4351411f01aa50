use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::section::application::ports::outgoing::section_store::SectionStore;

/// Visibility flag for one section. Fails open: an unreachable store,
/// a missing row, or a query error all resolve to visible so content
/// is shown rather than hidden on any uncertainty.
#[async_trait]
pub trait GetVisibilityUseCase: Send + Sync {
    async fn execute(&self, section_id: &str) -> bool;
}

pub struct GetVisibilityService {
    store: Arc<dyn SectionStore>,
}

impl GetVisibilityService {
    pub fn new(store: Arc<dyn SectionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GetVisibilityUseCase for GetVisibilityService {
    async fn execute(&self, section_id: &str) -> bool {
        match self.store.get(section_id).await {
            Ok(Some(section)) => section.data.visible,
            Ok(None) => true,
            Err(e) => {
                warn!(error = %e, section_id, "Visibility lookup failed, assuming visible");
                true
            }
        }
    }
}
