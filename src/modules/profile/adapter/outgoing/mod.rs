pub mod profile_store_offline;
pub mod profile_store_postgres;
pub mod sea_orm_entity;
