use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::ports::outgoing::token_blacklist::{
    TokenBlacklist, TokenBlacklistError,
};
use crate::auth::application::ports::outgoing::token_provider::{
    IssuedToken, TokenClaims, TokenError, TokenProvider,
};

/// Token provider used when the backend is not configured. No token can
/// ever be minted or verified, so every admin route answers 401 and
/// login answers 503.
#[derive(Clone, Default)]
pub struct OfflineTokenProvider;

impl TokenProvider for OfflineTokenProvider {
    fn generate_access_token(&self, _subject: &str) -> Result<IssuedToken, TokenError> {
        Err(TokenError::Unavailable)
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        Err(TokenError::Unavailable)
    }
}

/// Blacklist counterpart for offline mode. Nothing is ever revoked
/// because nothing can be issued.
#[derive(Clone, Default)]
pub struct OfflineTokenBlacklist;

#[async_trait]
impl TokenBlacklist for OfflineTokenBlacklist {
    async fn revoke(
        &self,
        _jti: &str,
        _expires_at: DateTime<Utc>,
    ) -> Result<(), TokenBlacklistError> {
        Err(TokenBlacklistError::Unavailable)
    }

    async fn is_revoked(&self, _jti: &str) -> Result<bool, TokenBlacklistError> {
        Ok(false)
    }
}
