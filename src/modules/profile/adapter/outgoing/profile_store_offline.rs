use async_trait::async_trait;

use crate::profile::application::ports::outgoing::profile_store::{
    ProfileStore, ProfileStoreError,
};
use crate::profile::domain::entities::Profile;

/// Store wired in when the backend gate is closed. Reads degrade to the
/// fallback profile upstream; writes surface 503.
#[derive(Clone, Default)]
pub struct ProfileStoreOffline;

#[async_trait]
impl ProfileStore for ProfileStoreOffline {
    async fn get(&self) -> Result<Option<Profile>, ProfileStoreError> {
        Err(ProfileStoreError::Unavailable)
    }

    async fn put(&self, _profile: &Profile) -> Result<(), ProfileStoreError> {
        Err(ProfileStoreError::Unavailable)
    }
}
