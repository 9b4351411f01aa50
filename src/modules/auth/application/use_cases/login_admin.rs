use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};
use crate::auth::domain::AdminCredentials;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Backend is not available")]
    Unavailable,

    #[error("Login failed: {0}")]
    Internal(String),
}

// ============================================================================
// Use Case
// ============================================================================

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub access_token: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, email: &str, password: &str) -> Result<LoginResult, LoginError>;
}

pub struct LoginAdminService {
    credentials: AdminCredentials,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl LoginAdminService {
    pub fn new(
        credentials: AdminCredentials,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            credentials,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl LoginAdminUseCase for LoginAdminService {
    async fn execute(&self, email: &str, password: &str) -> Result<LoginResult, LoginError> {
        if !email.trim().eq_ignore_ascii_case(&self.credentials.email) {
            // Verify anyway so a wrong email costs the same as a wrong password
            let _ = self
                .hasher
                .verify_password(password, &self.credentials.password_hash)
                .await;
            return Err(LoginError::InvalidCredentials);
        }

        let matches = self
            .hasher
            .verify_password(password, &self.credentials.password_hash)
            .await
            .map_err(|e| LoginError::Internal(e.to_string()))?;

        if !matches {
            warn!("Failed admin login attempt");
            return Err(LoginError::InvalidCredentials);
        }

        let issued = self
            .tokens
            .generate_access_token(&self.credentials.email)
            .map_err(|e| match e {
                TokenError::Unavailable => LoginError::Unavailable,
                other => LoginError::Internal(other.to_string()),
            })?;

        Ok(LoginResult {
            access_token: issued.token,
            expires_at: issued.expires_at,
        })
    }
}

/// Null-object login used while the backend gate is closed.
pub struct LoginUnavailable;

#[async_trait]
impl LoginAdminUseCase for LoginUnavailable {
    async fn execute(&self, _email: &str, _password: &str) -> Result<LoginResult, LoginError> {
        Err(LoginError::Unavailable)
    }
}
