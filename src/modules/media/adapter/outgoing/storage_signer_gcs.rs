use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::media::application::ports::outgoing::storage_signer::{
    StorageSigner, StorageSignerError,
};
use crate::media::domain::entities::UploadTicket;

/// TTL for signed upload URLs.
const SIGNED_URL_TTL: Duration = Duration::from_secs(15 * 60);

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

/// Uploaded objects are publicly readable at the plain storage URL.
fn public_url(bucket: &str, object_name: &str) -> String {
    format!("https://storage.googleapis.com/{}/{}", bucket, object_name)
}

fn map_sign_error(msg: &str) -> StorageSignerError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        StorageSignerError::AccessDenied
    } else if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        StorageSignerError::BucketNotFound
    } else if m.contains("invalid") || m.contains("config") || m.contains("configuration") {
        StorageSignerError::Configuration
    } else {
        StorageSignerError::Infrastructure
    }
}

/// Internal seam so the adapter is testable without mocking
/// google-cloud-storage types.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        self.0.sign_put_url(bucket_resource, object_name, ttl).await
    }
}

#[derive(Clone)]
pub struct GcsStorageSigner {
    bucket: String,
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    signed_url_ttl: Duration,
}

impl GcsStorageSigner {
    /// Synchronous constructor; the GCS client is initialized lazily
    /// on first use.
    pub fn new(bucket: String) -> Self {
        Self {
            bucket,
            client: Arc::new(OnceCell::new()),
            signed_url_ttl: SIGNED_URL_TTL,
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_client(bucket: &str, client: Arc<dyn GcsClient>, signed_url_ttl: Duration) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            bucket: bucket.to_string(),
            client: Arc::new(once),
            signed_url_ttl,
        }
    }
}

#[async_trait]
impl StorageSigner for GcsStorageSigner {
    async fn create_upload(&self, object_name: &str) -> Result<UploadTicket, StorageSignerError> {
        let client = self
            .get_client()
            .await
            .map_err(|_| StorageSignerError::Infrastructure)?;

        let upload_url = client
            .sign_put_url(
                &bucket_resource(&self.bucket),
                object_name,
                self.signed_url_ttl,
            )
            .await
            .map_err(|e| map_sign_error(&e))?;

        Ok(UploadTicket {
            upload_url,
            public_url: public_url(&self.bucket, object_name),
            object_name: object_name.to_string(),
        })
    }
}

struct RealGcsClient {
    signer: google_cloud_auth::signer::Signer,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS signer...");

        let signer = google_cloud_auth::credentials::Builder::default()
            .build_signer()
            .map_err(|e| {
                let msg = e.to_string();
                tracing::error!("Failed to build GCS signer: {:?}", e);

                if msg.contains("authorized_user") {
                    tracing::error!(
                        "Signed URLs require a service account key. \
                         Set GOOGLE_APPLICATION_CREDENTIALS to a service-account JSON (type=service_account)."
                    );
                }

                e
            })?;

        tracing::info!("GCS signer created");

        Ok(Self { signer })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        let url = google_cloud_storage::builder::storage::SignedUrlBuilder::for_object(
            bucket_resource.to_string(),
            object_name.to_string(),
        )
        .with_method(google_cloud_storage::http::Method::PUT)
        .with_expiration(ttl)
        .sign_with(&self.signer)
        .await
        .map_err(|e| e.to_string())?;

        Ok(url)
    }
}
