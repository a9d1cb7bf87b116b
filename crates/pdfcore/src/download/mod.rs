//! Downloading photo bytes from the provider's file storage

pub mod fetch;

pub use fetch::fetch_image;
