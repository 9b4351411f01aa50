use std::sync::Arc;

use crate::interest::application::use_cases::add_interest::AddInterestUseCase;
use crate::interest::application::use_cases::delete_interest::DeleteInterestUseCase;
use crate::interest::application::use_cases::fetch_interests::FetchInterestsUseCase;
use crate::interest::application::use_cases::update_interest::UpdateInterestUseCase;

#[derive(Clone)]
pub struct InterestUseCases {
    pub fetch: Arc<dyn FetchInterestsUseCase + Send + Sync>,
    pub add: Arc<dyn AddInterestUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateInterestUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteInterestUseCase + Send + Sync>,
}
