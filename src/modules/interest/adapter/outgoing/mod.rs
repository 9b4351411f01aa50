pub mod interest_store_offline;
pub mod interest_store_postgres;
pub mod sea_orm_entity;
