pub mod profile_store;
