pub mod interest_use_cases;
pub mod ports;
pub mod use_cases;
