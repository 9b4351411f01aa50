use serde::{Deserialize, Serialize};

/// Claims carried by an admin session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject; always the configured admin email.
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub token_type: String,
    /// Unique token id, used for revocation on logout.
    pub jti: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token encoding failed: {0}")]
    EncodingError(String),

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token service is not available")]
    Unavailable,
}

/// Port for minting and verifying session tokens.
pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, subject: &str) -> Result<IssuedToken, TokenError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub jti: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}
