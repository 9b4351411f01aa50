pub mod message_store_offline;
pub mod message_store_postgres;
pub mod sea_orm_entity;
