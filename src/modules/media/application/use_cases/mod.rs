pub mod create_upload_url;
