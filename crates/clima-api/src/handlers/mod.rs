pub mod health;
pub mod questions;
pub mod upload;
pub mod upload_status;
