//! Error taxonomy for the pin-change engine
//!
//! Every variant is recovered locally and surfaced to the user; the
//! display strings are the user-facing messages.

use pinpad_client::ClientError;
use thiserror::Error;

use super::store::StoreError;

#[derive(Debug, Error)]
pub enum ChangeError {
    /// The actor's own level is below the manager tier
    #[error("Please login as a Manager")]
    NotAuthorized,

    /// No manager session is active
    #[error("No active manager session")]
    NoSession,

    /// The actor's level is not strictly above the target's
    #[error("Unauthorized access for this user")]
    Unauthorized,

    /// The selected target is missing from the cached roster
    #[error("Selected staff not found")]
    TargetNotFound,

    /// The new PIN does not match the target's format rule
    #[error("PIN must be exactly {expected} digits")]
    InvalidPinFormat { expected: usize },

    /// The manager PIN is not a 5-digit string
    #[error("Manager PIN must be exactly 5 digits")]
    InvalidManagerPinFormat,

    /// The login identifier is not a 1-5 digit number
    #[error("Please enter a valid 5-digit Employee ID")]
    InvalidEmployeeId,

    /// Login lookup failed
    #[error("Invalid employee ID or employee not found")]
    UnknownEmployee,

    /// Roster fetch failed; the previous cache is kept
    #[error("Failed to load employee list")]
    DirectoryUnavailable(#[source] ClientError),

    /// The server rejected the update
    #[error("{0}")]
    UpdateRejected(String),

    /// Session storage failed
    #[error("Session storage error: {0}")]
    Storage(#[from] StoreError),
}
