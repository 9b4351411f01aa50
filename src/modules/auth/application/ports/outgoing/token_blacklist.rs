use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenBlacklistError {
    #[error("Blacklist store error: {0}")]
    StoreError(String),

    #[error("Token already expired")]
    AlreadyExpired,

    #[error("Blacklist is not available")]
    Unavailable,
}

/// Port for revoking session tokens by their jti until natural expiry.
#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    async fn revoke(&self, jti: &str, expires_at: DateTime<Utc>) -> Result<(), TokenBlacklistError>;

    async fn is_revoked(&self, jti: &str) -> Result<bool, TokenBlacklistError>;
}
