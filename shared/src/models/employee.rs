//! Employee Model

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Employee record as served by the directory service
///
/// The server is the source of truth; clients hold a read-only,
/// possibly-stale copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Positive, unique employee id
    pub emp_id: i64,
    pub emp_first_name: String,
    pub emp_middle_name: String,
    pub emp_last_name: String,
    pub emp_email: String,
    /// Current access PIN (digits only; length depends on role level)
    pub pin: String,
    pub role: Role,
    /// Creation time (ISO 8601)
    pub create_date: String,
    pub create_by: i64,
    /// Last update time (ISO 8601)
    pub update_date: String,
    pub update_by: i64,
    pub is_active: bool,
}
