pub mod get_section_visibility;
pub mod get_sections;
pub mod set_section_visibility;

pub use get_section_visibility::get_section_visibility_handler;
pub use get_sections::get_sections_handler;
pub use set_section_visibility::set_section_visibility_handler;
