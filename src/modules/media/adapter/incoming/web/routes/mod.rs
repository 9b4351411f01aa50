pub mod create_upload;

pub use create_upload::create_upload_handler;
