pub mod category_entity;
pub mod category_store_postgres;
pub mod offline;
pub mod skill_entity;
pub mod skill_store_postgres;
