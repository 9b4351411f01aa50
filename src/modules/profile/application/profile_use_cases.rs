use std::sync::Arc;

use crate::profile::application::use_cases::{
    fetch_profile::FetchProfileUseCase, update_profile::UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub fetch: Arc<dyn FetchProfileUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProfileUseCase + Send + Sync>,
}
