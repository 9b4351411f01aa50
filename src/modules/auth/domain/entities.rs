/// The single admin identity. There is no users table; credentials are
/// provisioned through configuration.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    /// PHC-format Argon2 hash of the admin password.
    pub password_hash: String,
}
