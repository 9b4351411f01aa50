pub mod create_education;
pub mod create_experience;
pub mod delete_education;
pub mod delete_experience;
pub mod get_education;
pub mod get_experiences;
pub mod update_education;
pub mod update_experience;

pub use create_education::create_education_handler;
pub use create_experience::create_experience_handler;
pub use delete_education::delete_education_handler;
pub use delete_experience::delete_experience_handler;
pub use get_education::get_education_handler;
pub use get_experiences::get_experiences_handler;
pub use update_education::update_education_handler;
pub use update_experience::update_experience_handler;
