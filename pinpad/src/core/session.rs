//! Manager session context
//!
//! Established once at login and read thereafter. The credential pair is
//! tab-scoped; the manager id and level are window-scoped so the login and
//! pin-changer screens agree on the acting manager while the raw PIN stays
//! narrowly scoped.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared::Employee;

use super::error::ChangeError;
use super::gate;
use super::store::{KeyStore, Scope, StoreError};

const CREDENTIAL_KEY: &str = "employee_data";
const MANAGER_ID_KEY: &str = "manager_id";
const MANAGER_LEVEL_KEY: &str = "manager_level";

/// Credential pair of the authenticated actor (tab-scoped)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredential {
    pub emp_id: i64,
    pub pin: String,
}

/// Identity of the acting manager
///
/// Exists only while the actor's level is manager-tier; destroyed on
/// logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    pub manager_id: i64,
    pub manager_level: i64,
}

/// Session state backed by a scoped key store
pub struct SessionStore {
    store: Arc<dyn KeyStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyStore>) -> Self {
        Self { store }
    }

    /// Establish a session for the given employee
    ///
    /// Succeeds only for manager-tier employees; writes nothing otherwise.
    pub fn establish(&self, employee: &Employee) -> Result<SessionContext, ChangeError> {
        gate::require_manager(employee.role.level)?;

        let credential = StoredCredential {
            emp_id: employee.emp_id,
            pin: employee.pin.clone(),
        };
        let raw = serde_json::to_string(&credential).map_err(StoreError::from)?;
        self.store.set(Scope::Tab, CREDENTIAL_KEY, &raw)?;
        self.store
            .set(Scope::Window, MANAGER_ID_KEY, &employee.emp_id.to_string())?;
        self.store.set(
            Scope::Window,
            MANAGER_LEVEL_KEY,
            &employee.role.level.to_string(),
        )?;

        tracing::info!(
            manager_id = employee.emp_id,
            level = employee.role.level,
            "Manager session established"
        );

        Ok(SessionContext {
            manager_id: employee.emp_id,
            manager_level: employee.role.level,
        })
    }

    /// Read the active session
    pub fn current(&self) -> Result<SessionContext, ChangeError> {
        let id = self
            .store
            .get(Scope::Window, MANAGER_ID_KEY)
            .ok_or(ChangeError::NoSession)?;
        let level = self
            .store
            .get(Scope::Window, MANAGER_LEVEL_KEY)
            .ok_or(ChangeError::NoSession)?;

        let manager_id = id.parse().map_err(|_| ChangeError::NoSession)?;
        let manager_level = level.parse().map_err(|_| ChangeError::NoSession)?;

        Ok(SessionContext {
            manager_id,
            manager_level,
        })
    }

    /// Credential pair of the authenticated actor, if any
    pub fn credential(&self) -> Option<StoredCredential> {
        let raw = self.store.get(Scope::Tab, CREDENTIAL_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Discard the session (logout / quit)
    pub fn clear(&self) -> Result<(), ChangeError> {
        self.store.remove(Scope::Tab, CREDENTIAL_KEY)?;
        self.store.remove(Scope::Window, MANAGER_ID_KEY)?;
        self.store.remove(Scope::Window, MANAGER_LEVEL_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shared::{Employee, Role};

    use super::*;
    use crate::core::store::MemoryStore;

    fn employee(emp_id: i64, level: i64, pin: &str) -> Employee {
        Employee {
            emp_id,
            emp_first_name: "Avery".to_string(),
            emp_middle_name: "Q".to_string(),
            emp_last_name: "Lin".to_string(),
            emp_email: "avery.lin@example.com".to_string(),
            pin: pin.to_string(),
            role: Role {
                role_id: 1,
                role_name: "Manager".to_string(),
                level,
                create_date: "2024-01-01T00:00:00".to_string(),
                create_by: 1,
                update_date: "2024-01-01T00:00:00".to_string(),
                update_by: 1,
                is_active: true,
            },
            create_date: "2024-01-01T00:00:00".to_string(),
            create_by: 1,
            update_date: "2024-01-01T00:00:00".to_string(),
            update_by: 1,
            is_active: true,
        }
    }

    #[test]
    fn establish_stores_both_scopes_for_managers() {
        let sessions = SessionStore::new(Arc::new(MemoryStore::new()));

        let context = sessions.establish(&employee(10007, 4, "55555")).unwrap();
        assert_eq!(context.manager_id, 10007);
        assert_eq!(context.manager_level, 4);

        assert_eq!(sessions.current().unwrap(), context);
        let credential = sessions.credential().unwrap();
        assert_eq!(credential.emp_id, 10007);
        assert_eq!(credential.pin, "55555");
    }

    #[test]
    fn establish_rejects_non_managers_and_writes_nothing() {
        let sessions = SessionStore::new(Arc::new(MemoryStore::new()));

        let err = sessions.establish(&employee(10021, 2, "1234")).unwrap_err();
        assert!(matches!(err, ChangeError::NotAuthorized));
        assert!(matches!(sessions.current(), Err(ChangeError::NoSession)));
        assert!(sessions.credential().is_none());
    }

    #[test]
    fn clear_destroys_the_session() {
        let sessions = SessionStore::new(Arc::new(MemoryStore::new()));
        sessions.establish(&employee(10007, 3, "55555")).unwrap();

        sessions.clear().unwrap();
        assert!(matches!(sessions.current(), Err(ChangeError::NoSession)));
        assert!(sessions.credential().is_none());
    }

    #[test]
    fn session_survives_store_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = Arc::new(crate::core::store::FileStore::open(dir.path()).unwrap());
            let sessions = SessionStore::new(store);
            sessions.establish(&employee(10007, 4, "55555")).unwrap();
        }

        let store = Arc::new(crate::core::store::FileStore::open(dir.path()).unwrap());
        let sessions = SessionStore::new(store);
        let context = sessions.current().unwrap();
        assert_eq!(context.manager_id, 10007);
        assert_eq!(context.manager_level, 4);
    }
}
