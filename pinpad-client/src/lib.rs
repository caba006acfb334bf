//! Pinpad Client - HTTP client for the employee directory service
//!
//! Provides network-based HTTP calls to the directory REST API.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::DirectoryApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpDirectoryClient;

// Re-export shared types for convenience
pub use shared::{Employee, PinChangeRequest, PinUpdateResponse, Role};
