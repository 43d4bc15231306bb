pub mod admin;
pub mod auth;
pub mod client;
pub mod download;
pub mod owner;
pub mod peternak;

pub use client::{ApiClient, ApiError, ApiMessage, Envelope};
pub use download::save_file;
pub use owner::export_file_name;
