pub mod ports;
pub mod section_use_cases;
pub mod use_cases;
