pub mod jwt;
pub mod offline;
pub mod security;
pub mod token_blacklist_redis;
