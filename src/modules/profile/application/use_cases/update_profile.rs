use std::sync::Arc;

use async_trait::async_trait;

use crate::profile::application::ports::outgoing::profile_store::{
    ProfileStore, ProfileStoreError,
};
use crate::profile::domain::entities::Profile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Profile update failed: {0}")]
    Internal(String),
}

impl From<ProfileStoreError> for UpdateProfileError {
    fn from(e: ProfileStoreError) -> Self {
        match e {
            ProfileStoreError::Unavailable => UpdateProfileError::Unavailable,
            ProfileStoreError::Database(msg) => UpdateProfileError::Internal(msg),
        }
    }
}

/// Full-record profile replace. Creates the row on first write.
#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, profile: Profile) -> Result<Profile, UpdateProfileError>;
}

pub struct UpdateProfileService {
    store: Arc<dyn ProfileStore>,
}

impl UpdateProfileService {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UpdateProfileUseCase for UpdateProfileService {
    async fn execute(&self, profile: Profile) -> Result<Profile, UpdateProfileError> {
        self.store.put(&profile).await?;
        // The caller's input is the source of truth; no re-read.
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::domain::defaults::default_profile;
    use std::sync::Mutex;

    struct MockStore {
        error: Option<ProfileStoreError>,
        written: Mutex<Vec<Profile>>,
    }

    #[async_trait]
    impl ProfileStore for MockStore {
        async fn get(&self) -> Result<Option<Profile>, ProfileStoreError> {
            unreachable!("update never reads")
        }

        async fn put(&self, profile: &Profile) -> Result<(), ProfileStoreError> {
            if let Some(e) = &self.error {
                return Err(e.clone());
            }
            self.written.lock().unwrap().push(profile.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_update_writes_and_echoes_input() {
        let store = Arc::new(MockStore {
            error: None,
            written: Mutex::new(vec![]),
        });
        let service = UpdateProfileService::new(store.clone());

        let input = Profile {
            name: "Grace Hopper".to_string(),
            ..default_profile()
        };

        let result = service.execute(input.clone()).await.unwrap();
        assert_eq!(result, input);
        assert_eq!(store.written.lock().unwrap().as_slice(), &[input]);
    }

    #[tokio::test]
    async fn test_update_offline_fails() {
        let store = Arc::new(MockStore {
            error: Some(ProfileStoreError::Unavailable),
            written: Mutex::new(vec![]),
        });
        let service = UpdateProfileService::new(store);

        let result = service.execute(default_profile()).await;
        assert!(matches!(result, Err(UpdateProfileError::Unavailable)));
    }

    #[tokio::test]
    async fn test_update_database_error() {
        let store = Arc::new(MockStore {
            error: Some(ProfileStoreError::Database("timeout".to_string())),
            written: Mutex::new(vec![]),
        });
        let service = UpdateProfileService::new(store);

        let result = service.execute(default_profile()).await;
        assert!(matches!(result, Err(UpdateProfileError::Internal(_))));
    }
}
