//! In-progress pin-change form state

use super::policy;

/// Manager-override control state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggle {
    pub enabled: bool,
    pub value: bool,
}

/// Pending form state, mutated as the actor interacts and reset to empty
/// after a successful change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinDraft {
    pub selected_staff: Option<i64>,
    pub new_pin: String,
    pub manager_pin: String,
    pub manager_override: Toggle,
}

impl PinDraft {
    /// Reset to the empty state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply a selection change: clear the PIN draft and re-derive the
    /// override toggle from the freshly selected level
    pub fn select(&mut self, emp_id: i64, level: i64) {
        self.selected_staff = Some(emp_id);
        self.new_pin.clear();
        self.manager_override = Toggle {
            enabled: policy::policy_for(level).allow_manager_toggle,
            value: false,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_a_manager_tier_target_enables_an_unchecked_toggle() {
        let mut draft = PinDraft::default();
        draft.new_pin = "1234".to_string();
        draft.manager_override.value = true;

        draft.select(10007, 3);

        assert_eq!(draft.selected_staff, Some(10007));
        assert!(draft.new_pin.is_empty());
        assert!(draft.manager_override.enabled);
        assert!(!draft.manager_override.value);
    }

    #[test]
    fn selecting_a_staff_tier_target_forces_the_toggle_off() {
        let mut draft = PinDraft::default();
        draft.select(10007, 3);
        draft.manager_override.value = true;

        draft.select(10021, 2);

        assert!(!draft.manager_override.enabled);
        assert!(!draft.manager_override.value);
    }

    #[test]
    fn reset_returns_to_the_empty_state() {
        let mut draft = PinDraft::default();
        draft.select(10021, 2);
        draft.new_pin = "1234".to_string();
        draft.manager_pin = "55555".to_string();

        draft.reset();
        assert_eq!(draft, PinDraft::default());
    }
}
