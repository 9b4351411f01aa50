pub mod education_store;
pub mod experience_store;
