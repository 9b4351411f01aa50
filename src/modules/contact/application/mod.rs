pub mod contact_use_cases;
pub mod ports;
pub mod use_cases;
