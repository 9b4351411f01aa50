pub mod create_project;
pub mod delete_project;
pub mod get_project;
pub mod get_projects;
pub mod update_project;

pub use create_project::create_project_handler;
pub use delete_project::delete_project_handler;
pub use get_project::get_project_handler;
pub use get_projects::get_projects_handler;
pub use update_project::update_project_handler;
