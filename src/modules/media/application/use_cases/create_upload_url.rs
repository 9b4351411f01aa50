use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;

use crate::media::application::ports::outgoing::storage_signer::{
    StorageSigner, StorageSignerError,
};
use crate::media::domain::entities::{object_name, UploadFolder, UploadTicket};

#[derive(Debug, Error)]
pub enum CreateUploadUrlError {
    #[error("backend is not available")]
    Unavailable,

    #[error("invalid filename")]
    InvalidFilename,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StorageSignerError> for CreateUploadUrlError {
    fn from(e: StorageSignerError) -> Self {
        match e {
            StorageSignerError::Unavailable => CreateUploadUrlError::Unavailable,
            other => CreateUploadUrlError::Internal(other.to_string()),
        }
    }
}

/// Issues a signed upload URL for one file. The object key is
/// namespaced with the current millisecond timestamp so repeat
/// uploads of the same filename never collide.
#[async_trait]
pub trait CreateUploadUrlUseCase: Send + Sync {
    async fn execute(
        &self,
        folder: UploadFolder,
        filename: &str,
    ) -> Result<UploadTicket, CreateUploadUrlError>;
}

pub struct CreateUploadUrlService {
    signer: Arc<dyn StorageSigner>,
}

impl CreateUploadUrlService {
    pub fn new(signer: Arc<dyn StorageSigner>) -> Self {
        Self { signer }
    }
}

#[async_trait]
impl CreateUploadUrlUseCase for CreateUploadUrlService {
    async fn execute(
        &self,
        folder: UploadFolder,
        filename: &str,
    ) -> Result<UploadTicket, CreateUploadUrlError> {
        let filename = filename.trim();
        if filename.is_empty() || filename.contains('/') {
            return Err(CreateUploadUrlError::InvalidFilename);
        }

        let object = object_name(folder, filename, Utc::now().timestamp_millis());

        Ok(self.signer.create_upload(&object).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockSigner {
        signed: Mutex<Vec<String>>,
        result: Result<(), StorageSignerError>,
    }

    #[async_trait]
    impl StorageSigner for MockSigner {
        async fn create_upload(
            &self,
            object_name: &str,
        ) -> Result<UploadTicket, StorageSignerError> {
            self.signed.lock().unwrap().push(object_name.to_string());
            match &self.result {
                Ok(()) => Ok(UploadTicket {
                    upload_url: format!("https://signed.example/{}", object_name),
                    public_url: format!(
                        "https://storage.googleapis.com/folio-content/{}",
                        object_name
                    ),
                    object_name: object_name.to_string(),
                }),
                Err(e) => Err(e.clone()),
            }
        }
    }

    #[tokio::test]
    async fn test_object_key_carries_folder_and_filename() {
        let signer = Arc::new(MockSigner {
            signed: Mutex::new(vec![]),
            result: Ok(()),
        });
        let service = CreateUploadUrlService::new(signer.clone());

        let ticket = service
            .execute(UploadFolder::SkillIcons, "rust.png")
            .await
            .unwrap();

        let signed = signer.signed.lock().unwrap();
        assert_eq!(signed.len(), 1);
        assert!(signed[0].starts_with("skills/icons/"));
        assert!(signed[0].ends_with("_rust.png"));
        assert_eq!(ticket.object_name, signed[0]);
    }

    #[tokio::test]
    async fn test_rejects_empty_filename() {
        let signer = Arc::new(MockSigner {
            signed: Mutex::new(vec![]),
            result: Ok(()),
        });
        let service = CreateUploadUrlService::new(signer);

        let result = service.execute(UploadFolder::Profile, "   ").await;
        assert!(matches!(result, Err(CreateUploadUrlError::InvalidFilename)));
    }

    #[tokio::test]
    async fn test_rejects_path_separator_in_filename() {
        let signer = Arc::new(MockSigner {
            signed: Mutex::new(vec![]),
            result: Ok(()),
        });
        let service = CreateUploadUrlService::new(signer);

        let result = service.execute(UploadFolder::Projects, "../escape.png").await;
        assert!(matches!(result, Err(CreateUploadUrlError::InvalidFilename)));
    }

    #[tokio::test]
    async fn test_offline_signer_is_unavailable() {
        let signer = Arc::new(MockSigner {
            signed: Mutex::new(vec![]),
            result: Err(StorageSignerError::Unavailable),
        });
        let service = CreateUploadUrlService::new(signer);

        let result = service.execute(UploadFolder::Education, "logo.png").await;
        assert!(matches!(result, Err(CreateUploadUrlError::Unavailable)));
    }

    #[tokio::test]
    async fn test_signer_failure_is_internal() {
        let signer = Arc::new(MockSigner {
            signed: Mutex::new(vec![]),
            result: Err(StorageSignerError::AccessDenied),
        });
        let service = CreateUploadUrlService::new(signer);

        let result = service.execute(UploadFolder::Education, "logo.png").await;
        assert!(matches!(result, Err(CreateUploadUrlError::Internal(_))));
    }
}
