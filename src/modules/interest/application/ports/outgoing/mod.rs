pub mod interest_store;
