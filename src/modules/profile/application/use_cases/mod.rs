pub mod fetch_profile;
pub mod update_profile;
