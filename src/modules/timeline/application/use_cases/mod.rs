pub mod add_education;
pub mod add_experience;
pub mod delete_education;
pub mod delete_experience;
pub mod fetch_education;
pub mod fetch_experiences;
pub mod update_education;
pub mod update_experience;
