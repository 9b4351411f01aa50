use std::sync::Arc;

use crate::media::application::use_cases::create_upload_url::CreateUploadUrlUseCase;

#[derive(Clone)]
pub struct MediaUseCases {
    pub create_upload_url: Arc<dyn CreateUploadUrlUseCase + Send + Sync>,
}
