pub mod submit_message;
