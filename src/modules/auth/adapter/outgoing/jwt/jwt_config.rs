use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Build the config from an already-validated secret plus env overrides.
    pub fn new(secret_key: String) -> Self {
        let access_token_expiry = env::var("JWT_ACCESS_EXPIRY")
            .unwrap_or_else(|_| "3600".to_string())
            .parse::<i64>()
            .unwrap_or(3600);

        Self {
            secret_key,
            access_token_expiry,
        }
    }
}
