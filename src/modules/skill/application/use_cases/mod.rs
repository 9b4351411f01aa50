pub mod add_category;
pub mod add_skill;
pub mod delete_category;
pub mod delete_skill;
pub mod fetch_categories;
pub mod fetch_skills;
pub mod move_category;
pub mod update_category;
pub mod update_skill;
