//! Client-related types shared between the directory service and clients
//!
//! Request/response types used in API communication.

use serde::{Deserialize, Serialize};

/// PIN update request sent to `PUT /employees/update-pin`
///
/// Built fresh for each submission and discarded after the call resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinChangeRequest {
    /// Target employee id
    pub emp_id: i64,
    /// New PIN for the target
    pub emp_pin: String,
    /// Acting manager's employee id
    pub manager_id: i64,
    /// Acting manager's own PIN, verified server-side
    pub manager_pin: String,
}

/// Response body of the PIN update endpoint
///
/// The server answers either with a JSON object carrying `message` or with
/// a bare text body; both forms normalize into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinUpdateResponse {
    pub message: String,
}

impl PinUpdateResponse {
    /// Normalize a raw response body
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<PinUpdateResponse>(body) {
            Ok(parsed) => parsed,
            Err(_) => Self {
                message: body.trim().to_string(),
            },
        }
    }

    /// Whether the server reported a successful update
    pub fn is_success(&self) -> bool {
        self.message.to_lowercase().contains("success")
    }
}
