pub mod project_store_offline;
pub mod project_store_postgres;
pub mod sea_orm_entity;
