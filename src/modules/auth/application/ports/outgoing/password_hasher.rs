use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Invalid password hash: {0}")]
    InvalidHash(String),

    #[error("Hashing failed: {0}")]
    HashingFailed(String),
}

/// Port for verifying the admin password against the configured hash.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
