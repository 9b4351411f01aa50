pub mod create_interest;
pub mod delete_interest;
pub mod get_interests;
pub mod update_interest;

pub use create_interest::create_interest_handler;
pub use delete_interest::delete_interest_handler;
pub use get_interests::get_interests_handler;
pub use update_interest::update_interest_handler;
