pub mod section_store;
