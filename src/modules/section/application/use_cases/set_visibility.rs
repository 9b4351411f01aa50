use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::section::application::ports::outgoing::section_store::{
    SectionStore, SectionStoreError,
};
use crate::section::domain::entities::{section_name, Section, SectionData};

#[derive(Debug, Error)]
pub enum SetVisibilityError {
    #[error("backend is not available")]
    Unavailable,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<SectionStoreError> for SetVisibilityError {
    fn from(e: SectionStoreError) -> Self {
        match e {
            SectionStoreError::Unavailable => SetVisibilityError::Unavailable,
            SectionStoreError::Database(msg) => SetVisibilityError::Internal(msg),
        }
    }
}

/// Toggles one section on the public site. The display name is
/// recomputed from the section key on every write, so renamed keys
/// cannot drift from their labels.
#[async_trait]
pub trait SetVisibilityUseCase: Send + Sync {
    async fn execute(&self, section_id: &str, visible: bool)
        -> Result<Section, SetVisibilityError>;
}

pub struct SetVisibilityService {
    store: Arc<dyn SectionStore>,
}

impl SetVisibilityService {
    pub fn new(store: Arc<dyn SectionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SetVisibilityUseCase for SetVisibilityService {
    async fn execute(
        &self,
        section_id: &str,
        visible: bool,
    ) -> Result<Section, SetVisibilityError> {
        let data = SectionData {
            name: section_name(section_id),
            visible,
        };

        self.store.upsert(section_id, &data).await?;

        Ok(Section {
            id: section_id.to_string(),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockStore {
        upserted: Mutex<Vec<(String, SectionData)>>,
        result: Result<(), SectionStoreError>,
    }

    #[async_trait]
    impl SectionStore for MockStore {
        async fn list(&self) -> Result<Vec<Section>, SectionStoreError> {
            unreachable!()
        }

        async fn get(&self, _id: &str) -> Result<Option<Section>, SectionStoreError> {
            unreachable!()
        }

        async fn upsert(&self, id: &str, data: &SectionData) -> Result<(), SectionStoreError> {
            self.upserted
                .lock()
                .unwrap()
                .push((id.to_string(), data.clone()));
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_upserts_flag_with_display_name() {
        let store = Arc::new(MockStore {
            upserted: Mutex::new(vec![]),
            result: Ok(()),
        });
        let service = SetVisibilityService::new(store.clone());

        let section = service.execute("skills", false).await.unwrap();

        assert_eq!(section.id, "skills");
        assert_eq!(section.data.name, "Skills");
        assert!(!section.data.visible);

        let upserted = store.upserted.lock().unwrap();
        assert_eq!(upserted.len(), 1);
        assert_eq!(upserted[0].0, "skills");
        assert!(!upserted[0].1.visible);
    }

    #[tokio::test]
    async fn test_offline_store_is_unavailable() {
        let store = Arc::new(MockStore {
            upserted: Mutex::new(vec![]),
            result: Err(SectionStoreError::Unavailable),
        });
        let service = SetVisibilityService::new(store);

        let result = service.execute("skills", true).await;
        assert!(matches!(result, Err(SetVisibilityError::Unavailable)));
    }

    #[tokio::test]
    async fn test_database_error_is_internal() {
        let store = Arc::new(MockStore {
            upserted: Mutex::new(vec![]),
            result: Err(SectionStoreError::Database("boom".to_string())),
        });
        let service = SetVisibilityService::new(store);

        let result = service.execute("skills", true).await;
        assert!(matches!(result, Err(SetVisibilityError::Internal(_))));
    }
}
