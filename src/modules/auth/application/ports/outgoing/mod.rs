pub mod password_hasher;
pub mod token_blacklist;
pub mod token_provider;
