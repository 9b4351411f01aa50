pub mod sea_orm_entity;
pub mod section_store_offline;
pub mod section_store_postgres;
