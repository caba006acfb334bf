//! Cached employee roster
//!
//! A read-only snapshot of the directory reduced to the fields the desk
//! needs. `refresh` replaces the whole snapshot atomically; a failed fetch
//! leaves the previous snapshot untouched. Partial updates are never
//! applied, so an in-flight selection can't drift against a half-updated
//! list.

use pinpad_client::DirectoryApi;
use shared::Employee;
use tokio::sync::RwLock;

use super::error::ChangeError;

/// One visible employee, as of the last refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub emp_id: i64,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub level: i64,
    pub pin: String,
}

impl RosterEntry {
    /// Display name used in roster listings
    pub fn full_name(&self) -> String {
        format!(
            "{} {} {} ({})",
            self.first_name, self.middle_name, self.last_name, self.emp_id
        )
    }
}

impl From<&Employee> for RosterEntry {
    fn from(emp: &Employee) -> Self {
        Self {
            emp_id: emp.emp_id,
            first_name: emp.emp_first_name.clone(),
            middle_name: emp.emp_middle_name.clone(),
            last_name: emp.emp_last_name.clone(),
            level: emp.role.level,
            pin: emp.pin.clone(),
        }
    }
}

/// In-memory directory snapshot
#[derive(Default)]
pub struct Roster {
    entries: RwLock<Vec<RosterEntry>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with a fresh fetch
    ///
    /// On failure the previous snapshot is kept and the error is returned
    /// for the caller to surface or retry.
    pub async fn refresh(&self, api: &dyn DirectoryApi) -> Result<(), ChangeError> {
        let employees = api
            .employees()
            .await
            .map_err(ChangeError::DirectoryUnavailable)?;

        let entries: Vec<RosterEntry> = employees.iter().map(RosterEntry::from).collect();
        let count = entries.len();
        *self.entries.write().await = entries;

        tracing::debug!(count, "Roster refreshed");
        Ok(())
    }

    /// Current snapshot (empty before the first successful refresh)
    pub async fn list(&self) -> Vec<RosterEntry> {
        self.entries.read().await.clone()
    }

    /// Look up one entry in the current snapshot
    pub async fn find(&self, emp_id: i64) -> Option<RosterEntry> {
        self.entries
            .read()
            .await
            .iter()
            .find(|entry| entry.emp_id == emp_id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_includes_the_id() {
        let entry = RosterEntry {
            emp_id: 10021,
            first_name: "Dana".to_string(),
            middle_name: "J".to_string(),
            last_name: "Reyes".to_string(),
            level: 2,
            pin: "1234".to_string(),
        };
        assert_eq!(entry.full_name(), "Dana J Reyes (10021)");
    }
}
