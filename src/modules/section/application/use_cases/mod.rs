pub mod fetch_sections;
pub mod get_visibility;
pub mod set_visibility;
