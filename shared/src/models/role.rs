//! Role Model

use serde::{Deserialize, Serialize};

/// Role attached to an employee record
///
/// `level` is the seniority tier; 3 and above carries manager privileges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub role_id: i64,
    pub role_name: String,
    /// Seniority tier, non-negative, higher = more senior
    pub level: i64,
    /// Creation time (ISO 8601)
    pub create_date: String,
    pub create_by: i64,
    /// Last update time (ISO 8601)
    pub update_date: String,
    pub update_by: i64,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_uses_camel_case_wire_names() {
        let json = r#"{
            "roleId": 2,
            "roleName": "Cashier",
            "level": 1,
            "createDate": "2024-01-01T00:00:00",
            "createBy": 1,
            "updateDate": "2024-01-01T00:00:00",
            "updateBy": 1,
            "isActive": true
        }"#;

        let role: Role = serde_json::from_str(json).unwrap();
        assert_eq!(role.role_id, 2);
        assert_eq!(role.role_name, "Cashier");
        assert_eq!(role.level, 1);
        assert!(role.is_active);

        let out = serde_json::to_value(&role).unwrap();
        assert_eq!(out["roleName"], "Cashier");
        assert_eq!(out["isActive"], true);
    }
}
