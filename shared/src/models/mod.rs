//! Data models
//!
//! Records as served by the directory service. Field names follow the
//! service's camelCase wire format; all IDs are `i64`.

pub mod employee;
pub mod role;

// Re-exports
pub use employee::*;
pub use role::*;
