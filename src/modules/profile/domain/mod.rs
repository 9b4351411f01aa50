pub mod defaults;
pub mod entities;
