//! Authorization rules
//!
//! Two independent checks: whether an actor may use the desk at all, and
//! whether they may change a specific target's PIN. The change check runs
//! at submission time against the freshest roster levels, never against
//! levels captured at selection time.

use super::error::ChangeError;
use super::policy::MANAGER_LEVEL;

/// Gate for entering the pin-changer screen
pub fn require_manager(level: i64) -> Result<(), ChangeError> {
    if level >= MANAGER_LEVEL {
        Ok(())
    } else {
        Err(ChangeError::NotAuthorized)
    }
}

/// Gate for changing a specific target's PIN
///
/// A manager may only change PINs strictly below their own level; peers,
/// superiors, and the manager themselves are off limits.
pub fn authorize_change(manager_level: i64, target_level: i64) -> Result<(), ChangeError> {
    if manager_level > target_level {
        Ok(())
    } else {
        Err(ChangeError::Unauthorized)
    }
}
