pub mod auth;
pub mod contact;
pub mod interest;
pub mod media;
pub mod profile;
pub mod project;
pub mod section;
pub mod skill;
pub mod timeline;
