pub mod auth_use_cases;
pub mod ports;
pub mod use_cases;
