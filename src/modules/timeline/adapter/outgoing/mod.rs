pub mod education_entity;
pub mod education_store_postgres;
pub mod experience_entity;
pub mod experience_store_postgres;
pub mod offline;
