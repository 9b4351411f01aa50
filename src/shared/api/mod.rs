pub mod json_config;
mod response;

pub use json_config::custom_json_config;
pub use response::{ApiError, ApiResponse};
