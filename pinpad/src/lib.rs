//! Pinpad - staff PIN management desk
//!
//! A manager authenticates with an employee id and changes the access PIN
//! of subordinate staff. The engine validates PIN formats per seniority
//! level, enforces the manager-over-target authorization rule, and keeps a
//! local roster cache consistent with the directory service.

pub mod core;
pub mod utils;

// Re-export workspace crates for downstream callers
pub use pinpad_client;
pub use shared;
