pub mod add_project;
pub mod delete_project;
pub mod fetch_project;
pub mod fetch_projects;
pub mod update_project;
