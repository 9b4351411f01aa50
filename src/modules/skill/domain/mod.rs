pub mod defaults;
pub mod entities;
pub mod ordering;
