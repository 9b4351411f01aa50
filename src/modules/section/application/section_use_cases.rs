use std::sync::Arc;

use crate::section::application::use_cases::fetch_sections::FetchSectionsUseCase;
use crate::section::application::use_cases::get_visibility::GetVisibilityUseCase;
use crate::section::application::use_cases::set_visibility::SetVisibilityUseCase;

#[derive(Clone)]
pub struct SectionUseCases {
    pub fetch: Arc<dyn FetchSectionsUseCase + Send + Sync>,
    pub get_visibility: Arc<dyn GetVisibilityUseCase + Send + Sync>,
    pub set_visibility: Arc<dyn SetVisibilityUseCase + Send + Sync>,
}
