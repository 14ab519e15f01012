//! Backend REST contract: wire types and the HTTP client.

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{Destination, MediaItem, TagPayload, DEFAULT_POSTER};
