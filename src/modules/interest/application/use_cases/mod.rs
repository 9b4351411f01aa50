pub mod add_interest;
pub mod delete_interest;
pub mod fetch_interests;
pub mod update_interest;
