use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

use crate::auth::application::ports::outgoing::token_blacklist::{
    TokenBlacklist, TokenBlacklistError,
};
use crate::auth::application::ports::outgoing::token_provider::TokenClaims;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Backend is not available")]
    Unavailable,

    #[error("Token revocation failed: {0}")]
    RevocationFailed(String),
}

impl From<TokenBlacklistError> for LogoutError {
    fn from(e: TokenBlacklistError) -> Self {
        match e {
            TokenBlacklistError::Unavailable => LogoutError::Unavailable,
            // Revoking an already-expired token is a successful logout as far
            // as the caller is concerned, but it never reaches here (see below).
            other => LogoutError::RevocationFailed(other.to_string()),
        }
    }
}

// ============================================================================
// Use Case
// ============================================================================

#[async_trait]
pub trait LogoutAdminUseCase: Send + Sync {
    async fn execute(&self, claims: &TokenClaims) -> Result<(), LogoutError>;
}

pub struct LogoutAdminService {
    blacklist: Arc<dyn TokenBlacklist>,
}

impl LogoutAdminService {
    pub fn new(blacklist: Arc<dyn TokenBlacklist>) -> Self {
        Self { blacklist }
    }
}

#[async_trait]
impl LogoutAdminUseCase for LogoutAdminService {
    async fn execute(&self, claims: &TokenClaims) -> Result<(), LogoutError> {
        let expires_at: DateTime<Utc> = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .unwrap_or_else(Utc::now);

        match self.blacklist.revoke(&claims.jti, expires_at).await {
            Ok(()) => {
                info!("Admin session revoked");
                Ok(())
            }
            // The token lapsed between verification and revocation; the
            // session is gone either way.
            Err(TokenBlacklistError::AlreadyExpired) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Null-object logout used while the backend gate is closed.
pub struct LogoutUnavailable;

#[async_trait]
impl LogoutAdminUseCase for LogoutUnavailable {
    async fn execute(&self, _claims: &TokenClaims) -> Result<(), LogoutError> {
        Err(LogoutError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockBlacklist {
        result: Result<(), TokenBlacklistError>,
        revoked: Mutex<Vec<String>>,
    }

    impl MockBlacklist {
        fn new(result: Result<(), TokenBlacklistError>) -> Self {
            Self {
                result,
                revoked: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TokenBlacklist for MockBlacklist {
        async fn revoke(
            &self,
            jti: &str,
            _expires_at: DateTime<Utc>,
        ) -> Result<(), TokenBlacklistError> {
            self.revoked.lock().unwrap().push(jti.to_string());
            self.result.clone()
        }

        async fn is_revoked(&self, _jti: &str) -> Result<bool, TokenBlacklistError> {
            Ok(false)
        }
    }

    fn claims() -> TokenClaims {
        TokenClaims {
            sub: "admin@example.com".to_string(),
            exp: (Utc::now() + chrono::Duration::hours(1)).timestamp(),
            iat: Utc::now().timestamp(),
            nbf: Utc::now().timestamp(),
            token_type: "access".to_string(),
            jti: "jti-42".to_string(),
        }
    }

    #[tokio::test]
    async fn logout_revokes_jti() {
        let blacklist = Arc::new(MockBlacklist::new(Ok(())));
        let service = LogoutAdminService::new(blacklist.clone());

        let result = service.execute(&claims()).await;

        assert!(result.is_ok());
        assert_eq!(*blacklist.revoked.lock().unwrap(), vec!["jti-42"]);
    }

    #[tokio::test]
    async fn logout_of_expired_token_is_ok() {
        let blacklist = Arc::new(MockBlacklist::new(Err(TokenBlacklistError::AlreadyExpired)));
        let service = LogoutAdminService::new(blacklist);

        assert!(service.execute(&claims()).await.is_ok());
    }

    #[tokio::test]
    async fn logout_store_error_propagates() {
        let blacklist = Arc::new(MockBlacklist::new(Err(TokenBlacklistError::StoreError(
            "redis down".to_string(),
        ))));
        let service = LogoutAdminService::new(blacklist);

        let result = service.execute(&claims()).await;
        assert!(matches!(result, Err(LogoutError::RevocationFailed(_))));
    }

    #[tokio::test]
    async fn offline_logout_is_unavailable() {
        let result = LogoutUnavailable.execute(&claims()).await;
        assert!(matches!(result, Err(LogoutError::Unavailable)));
    }
}
