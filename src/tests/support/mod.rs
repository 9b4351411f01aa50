pub mod app_state_builder;

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::ports::outgoing::token_blacklist::{
    TokenBlacklist, TokenBlacklistError,
};
use crate::auth::application::ports::outgoing::token_provider::{
    IssuedToken, TokenClaims, TokenError, TokenProvider,
};

pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";
pub const TEST_ACCESS_TOKEN: &str = "valid-token";

/// Accepts exactly [`TEST_ACCESS_TOKEN`] and rejects everything else.
struct TestTokenProvider;

impl TokenProvider for TestTokenProvider {
    fn generate_access_token(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        Ok(IssuedToken {
            token: TEST_ACCESS_TOKEN.to_string(),
            jti: format!("jti-{subject}"),
            expires_at: Utc::now() + chrono::Duration::hours(1),
        })
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        if token != TEST_ACCESS_TOKEN {
            return Err(TokenError::InvalidToken);
        }

        let now = Utc::now();
        Ok(TokenClaims {
            sub: TEST_ADMIN_EMAIL.to_string(),
            exp: (now + chrono::Duration::hours(1)).timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: "access".to_string(),
            jti: "test-jti".to_string(),
        })
    }
}

struct TestTokenBlacklist;

#[async_trait]
impl TokenBlacklist for TestTokenBlacklist {
    async fn revoke(
        &self,
        _jti: &str,
        _expires_at: DateTime<Utc>,
    ) -> Result<(), TokenBlacklistError> {
        Ok(())
    }

    async fn is_revoked(&self, _jti: &str) -> Result<bool, TokenBlacklistError> {
        Ok(false)
    }
}

/// App data pair the `AdminUser` extractor resolves against.
pub fn admin_auth_data() -> (
    web::Data<Arc<dyn TokenProvider>>,
    web::Data<Arc<dyn TokenBlacklist>>,
) {
    let tokens: Arc<dyn TokenProvider> = Arc::new(TestTokenProvider);
    let blacklist: Arc<dyn TokenBlacklist> = Arc::new(TestTokenBlacklist);
    (web::Data::new(tokens), web::Data::new(blacklist))
}

/// Authorization header accepted by [`admin_auth_data`].
pub fn admin_bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {TEST_ACCESS_TOKEN}"))
}
