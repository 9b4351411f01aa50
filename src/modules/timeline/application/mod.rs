pub mod ports;
pub mod timeline_use_cases;
pub mod use_cases;
