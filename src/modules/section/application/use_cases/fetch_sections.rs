use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::section::application::ports::outgoing::section_store::SectionStore;
use crate::section::domain::entities::Section;

/// Full visibility list for the dashboard toggles. Never fails;
/// degrades to the injected fallback catalog.
#[async_trait]
pub trait FetchSectionsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Section>;
}

pub struct FetchSectionsService {
    store: Arc<dyn SectionStore>,
    fallback: Vec<Section>,
}

impl FetchSectionsService {
    pub fn new(store: Arc<dyn SectionStore>, fallback: Vec<Section>) -> Self {
        Self { store, fallback }
    }
}

#[async_trait]
impl FetchSectionsUseCase for FetchSectionsService {
    async fn execute(&self) -> Vec<Section> {
        match self.store.list().await {
            Ok(sections) if !sections.is_empty() => sections,
            Ok(_) => self.fallback.clone(),
            Err(e) => {
                warn!(error = %e, "Section list failed, serving fallback");
                self.fallback.clone()
            }
        }
    }
}
