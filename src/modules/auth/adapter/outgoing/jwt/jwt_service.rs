use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    IssuedToken, TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    /// Initialize the service with config
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    /// Generate an access token for the admin session
    fn generate_access_token(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.config.access_token_expiry);
        let jti = Uuid::new_v4().to_string();

        let claims = TokenClaims {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: "access".to_string(),
            jti: jti.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))?;

        Ok(IssuedToken {
            token,
            jti,
            expires_at,
        })
    }

    /// Verify and decode a token
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: token expired");
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: token not yet valid");
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: invalid token signature detected");
                    }
                    _ => {
                        tracing::warn!("Token verification failed: malformed token");
                    }
                }

                TokenError::InvalidToken
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_jwt_service() -> JwtTokenService {
        let config = JwtConfig {
            secret_key: "FAKE_JWT_SECRET_DO_NOT_USE_IN_PROD_x".to_string(),
            access_token_expiry: 3600,
        };
        JwtTokenService::new(config)
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = create_test_jwt_service();

        let issued = service
            .generate_access_token("admin@example.com")
            .expect("Token should be generated");

        let claims = service.verify_token(&issued.token);
        assert!(claims.is_ok(), "Token should be valid");
        let claims = claims.unwrap();
        assert_eq!(claims.sub, "admin@example.com");
        assert_eq!(claims.token_type, "access");
        assert_eq!(claims.jti, issued.jti);
    }

    #[test]
    fn test_issued_tokens_carry_unique_jti() {
        let service = create_test_jwt_service();

        let first = service.generate_access_token("admin@example.com").unwrap();
        let second = service.generate_access_token("admin@example.com").unwrap();

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_invalid_token_verification() {
        let service = create_test_jwt_service();

        let result = service.verify_token("invalid.jwt.token");

        assert!(result.is_err(), "Invalid token should fail verification");
        assert!(matches!(result.unwrap_err(), TokenError::InvalidToken));
    }

    #[test]
    fn test_expired_token() {
        let config = JwtConfig {
            secret_key: "FAKE_JWT_SECRET_DO_NOT_USE_IN_PROD_x".to_string(),
            access_token_expiry: -35, // Already expired (beyond leeway)
        };
        let service = JwtTokenService::new(config);

        let issued = service
            .generate_access_token("admin@example.com")
            .expect("Token should be generated");

        let result = service.verify_token(&issued.token);

        assert!(result.is_err(), "Expired token should be invalid");
        assert!(matches!(result.unwrap_err(), TokenError::InvalidToken));
    }

    #[test]
    fn test_invalid_signature() {
        let service = create_test_jwt_service();
        let issued = service.generate_access_token("admin@example.com").unwrap();

        let different_config = JwtConfig {
            secret_key: "A_DIFFERENT_SECRET_KEY_OF_SUFFICIENT_LEN".to_string(),
            access_token_expiry: 3600,
        };
        let different_service = JwtTokenService::new(different_config);

        let result = different_service.verify_token(&issued.token);

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), TokenError::InvalidToken));
    }

    #[test]
    fn test_token_expiry_is_in_future() {
        let service = create_test_jwt_service();

        let issued = service.generate_access_token("admin@example.com").unwrap();
        let claims = service.verify_token(&issued.token).unwrap();

        let now = Utc::now().timestamp();
        assert!(claims.exp > now, "Expiry should be in the future");
        assert!(claims.iat <= now, "Issued at should be now or in the past");
        assert!(claims.nbf <= now, "Not before should be now or in the past");
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn test_jwt_service_debug() {
        let service = create_test_jwt_service();
        let debug_str = format!("{:?}", service);
        assert!(debug_str.contains("JwtTokenService"));
    }
}
