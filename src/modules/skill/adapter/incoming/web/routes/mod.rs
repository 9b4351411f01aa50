pub mod create_category;
pub mod create_skill;
pub mod delete_category;
pub mod delete_skill;
pub mod get_categories;
pub mod get_skills;
pub mod move_category;
pub mod update_category;
pub mod update_skill;

pub use create_category::create_category_handler;
pub use create_skill::create_skill_handler;
pub use delete_category::delete_category_handler;
pub use delete_skill::delete_skill_handler;
pub use get_categories::get_categories_handler;
pub use get_skills::get_skills_handler;
pub use move_category::move_category_handler;
pub use update_category::update_category_handler;
pub use update_skill::update_skill_handler;
