use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};

use std::sync::Arc;

use crate::auth::application::ports::outgoing::token_blacklist::{
    TokenBlacklist, TokenBlacklistError,
};

/// Redis-backed token revocation store.
///
/// Revoked session tokens are keyed by jti with a TTL matching the
/// token's remaining lifetime, so Redis expiry is the only cleanup.
#[derive(Clone)]
pub struct RedisTokenBlacklist {
    pool: Arc<Pool>,
}

impl RedisTokenBlacklist {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn jti_key(jti: &str) -> String {
        format!("auth:blacklist:jti:{jti}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenBlacklistError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenBlacklistError::StoreError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl TokenBlacklist for RedisTokenBlacklist {
    async fn revoke(
        &self,
        jti: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenBlacklistError> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            return Err(TokenBlacklistError::AlreadyExpired);
        }

        let key = Self::jti_key(jti);
        let mut conn = self.get_conn().await?;

        let _: () = conn
            .set_ex(key, "1", ttl as u64)
            .await
            .map_err(|e| TokenBlacklistError::StoreError(e.to_string()))?;

        Ok(())
    }

    async fn is_revoked(&self, jti: &str) -> Result<bool, TokenBlacklistError> {
        let key = Self::jti_key(jti);
        let mut conn = self.get_conn().await?;

        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| TokenBlacklistError::StoreError(e.to_string()))?;

        Ok(exists)
    }
}
