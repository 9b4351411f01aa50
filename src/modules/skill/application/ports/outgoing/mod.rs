pub mod category_store;
pub mod skill_store;
