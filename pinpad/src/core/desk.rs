//! PinDesk - the desk application surface
//!
//! Owns every mutable piece of the pin-change flow (roster cache, session,
//! draft, notices, current screen) and coordinates them per submission.
//! Each submission walks Idle -> Validating -> Submitting -> Settled:
//! local validation and the authorization gate run first and short-circuit
//! before any network call; a settled outcome posts exactly one notice.

use std::sync::{Arc, LazyLock};

use pinpad_client::{ClientError, DirectoryApi};
use regex::Regex;
use shared::PinChangeRequest;
use tokio::sync::RwLock;

use super::draft::PinDraft;
use super::error::ChangeError;
use super::gate;
use super::notice::NoticeBoard;
use super::policy;
use super::roster::{Roster, RosterEntry};
use super::session::{SessionContext, SessionStore};
use super::store::KeyStore;

static EMPLOYEE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{1,5}$").unwrap());

const FALLBACK_UPDATE_ERROR: &str = "Failed to update PIN";
const MANAGER_PIN_INCORRECT: &str = "Unauthorized: Manager PIN incorrect";

/// The two screens of the desk and the only transitions between them:
/// forward on successful manager login, backward on explicit quit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    StaffPinChanger,
}

/// Desk application state
pub struct PinDesk {
    api: Arc<dyn DirectoryApi>,
    roster: Roster,
    session: SessionStore,
    draft: RwLock<PinDraft>,
    notices: NoticeBoard,
    screen: RwLock<Screen>,
}

impl PinDesk {
    /// Create a desk over the given directory client and session store
    ///
    /// A session surviving from an earlier run drops the desk straight on
    /// the pin-changer screen.
    pub fn new(api: Arc<dyn DirectoryApi>, store: Arc<dyn KeyStore>) -> Self {
        let session = SessionStore::new(store);
        let screen = if session.current().is_ok() {
            Screen::StaffPinChanger
        } else {
            Screen::Login
        };

        Self {
            api,
            roster: Roster::new(),
            session,
            draft: RwLock::new(PinDraft::default()),
            notices: NoticeBoard::new(),
            screen: RwLock::new(screen),
        }
    }

    pub async fn screen(&self) -> Screen {
        *self.screen.read().await
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Snapshot of the pending form state
    pub async fn draft(&self) -> PinDraft {
        self.draft.read().await.clone()
    }

    /// Authenticate with a raw employee-id input and enter the pin-changer
    /// screen on success
    pub async fn login(&self, employee_id: &str) -> Result<SessionContext, ChangeError> {
        let emp_id = parse_employee_id(employee_id)?;

        let employee = self.api.employee(emp_id).await.map_err(|err| {
            tracing::warn!(emp_id, error = %err, "Login lookup failed");
            ChangeError::UnknownEmployee
        })?;

        let context = self.session.establish(&employee)?;
        *self.screen.write().await = Screen::StaffPinChanger;

        // Best-effort initial roster load; the screen can retry
        if let Err(err) = self.roster.refresh(self.api.as_ref()).await {
            tracing::warn!(error = %err, "Initial roster load failed");
        }

        Ok(context)
    }

    /// Leave the pin-changer screen and discard the session
    pub async fn quit(&self) -> Result<(), ChangeError> {
        self.session.clear()?;
        self.draft.write().await.reset();
        self.notices.clear().await;
        *self.screen.write().await = Screen::Login;
        Ok(())
    }

    /// Reload the roster from the directory
    pub async fn refresh_roster(&self) -> Result<(), ChangeError> {
        self.roster.refresh(self.api.as_ref()).await
    }

    /// Change the selected target
    ///
    /// Clears the new-PIN draft and re-derives the override toggle from
    /// the fresh target's level.
    pub async fn select_staff(&self, emp_id: i64) -> Result<RosterEntry, ChangeError> {
        let entry = self
            .roster
            .find(emp_id)
            .await
            .ok_or(ChangeError::TargetNotFound)?;
        self.draft.write().await.select(entry.emp_id, entry.level);
        Ok(entry)
    }

    /// Level of the currently selected target, defaulting to the lowest
    /// tier when nothing is selected
    async fn selected_level(&self) -> i64 {
        let selected = self.draft.read().await.selected_staff;
        match selected {
            Some(emp_id) => self
                .roster
                .find(emp_id)
                .await
                .map(|entry| entry.level)
                .unwrap_or(0),
            None => 0,
        }
    }

    /// Store a sanitized new-PIN draft for the selected target's level
    pub async fn set_new_pin(&self, raw: &str) {
        let level = self.selected_level().await;
        self.draft.write().await.new_pin = policy::sanitize(raw, level);
    }

    pub async fn set_manager_pin(&self, raw: &str) {
        self.draft.write().await.manager_pin = raw.trim().to_string();
    }

    /// Set the manager-override toggle; ignored while the control is
    /// disabled
    pub async fn set_manager_override(&self, value: bool) {
        let mut draft = self.draft.write().await;
        if draft.manager_override.enabled {
            draft.manager_override.value = value;
        }
    }

    /// Fill the draft with a random PIN for the selected target's level
    pub async fn generate_random_pin(&self) -> String {
        let level = self.selected_level().await;
        let pin = policy::random_pin(level);
        self.draft.write().await.new_pin = pin.clone();
        pin
    }

    /// Run one pin-change submission
    ///
    /// Local validation failures never reach the network. A successful
    /// change resets the draft and triggers exactly one roster refresh;
    /// every other settled outcome leaves the draft intact for correction.
    pub async fn submit(&self) -> Result<(), ChangeError> {
        match self.try_submit().await {
            Ok(()) => {
                self.notices.set("PIN updated successfully", false).await;
                self.draft.write().await.reset();
                if let Err(err) = self.roster.refresh(self.api.as_ref()).await {
                    tracing::warn!(error = %err, "Roster refresh after PIN change failed");
                }
                Ok(())
            }
            Err(err) => {
                self.notices.set(err.to_string(), true).await;
                Err(err)
            }
        }
    }

    async fn try_submit(&self) -> Result<(), ChangeError> {
        let session = self.session.current()?;
        let draft = self.draft.read().await.clone();

        let target_id = draft.selected_staff.ok_or(ChangeError::TargetNotFound)?;
        let target = self
            .roster
            .find(target_id)
            .await
            .ok_or(ChangeError::TargetNotFound)?;

        let pin_policy = policy::policy_for(target.level);
        if !pin_policy.matches(&draft.new_pin) {
            return Err(ChangeError::InvalidPinFormat {
                expected: pin_policy.max_len,
            });
        }
        if !policy::manager_pin_ok(&draft.manager_pin) {
            return Err(ChangeError::InvalidManagerPinFormat);
        }

        // Re-checked here, not at selection time: the roster may have
        // changed since the target was picked
        gate::authorize_change(session.manager_level, target.level)?;

        let request = PinChangeRequest {
            emp_id: target.emp_id,
            emp_pin: draft.new_pin.clone(),
            manager_id: session.manager_id,
            manager_pin: draft.manager_pin.clone(),
        };

        tracing::info!(
            target = target.emp_id,
            manager = session.manager_id,
            "Submitting PIN change"
        );

        match self.api.update_pin(&request).await {
            Ok(response) if response.is_success() => Ok(()),
            Ok(response) => {
                let message = if response.message.trim().is_empty() {
                    FALLBACK_UPDATE_ERROR.to_string()
                } else {
                    response.message
                };
                Err(ChangeError::UpdateRejected(message))
            }
            Err(ClientError::Forbidden(_)) => {
                Err(ChangeError::UpdateRejected(MANAGER_PIN_INCORRECT.to_string()))
            }
            Err(err) => {
                let message = err
                    .message()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(FALLBACK_UPDATE_ERROR)
                    .to_string();
                Err(ChangeError::UpdateRejected(message))
            }
        }
    }
}

/// Validate a raw login input: a 1-5 digit employee id
fn parse_employee_id(input: &str) -> Result<i64, ChangeError> {
    let trimmed = input.trim();
    if !EMPLOYEE_ID.is_match(trimmed) {
        return Err(ChangeError::InvalidEmployeeId);
    }
    trimmed.parse().map_err(|_| ChangeError::InvalidEmployeeId)
}
