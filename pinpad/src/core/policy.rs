//! PIN format policy
//!
//! Pure rules keyed on the target's seniority level: manager-tier targets
//! (level 3 and above) take exactly 5 digits, everyone else exactly 4.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

/// Seniority level at or above which an employee counts as a manager
pub const MANAGER_LEVEL: i64 = 3;

static PIN_5: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{5}$").unwrap());
static PIN_4: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}$").unwrap());

/// PIN format rule for one seniority level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinPolicy {
    pub min_len: usize,
    pub max_len: usize,
    pub pattern: &'static str,
    /// Whether the manager-override toggle may be enabled for this target
    pub allow_manager_toggle: bool,
}

impl PinPolicy {
    /// Check a candidate PIN against this policy's pattern
    pub fn matches(&self, pin: &str) -> bool {
        self.regex().is_match(pin)
    }

    fn regex(&self) -> &'static Regex {
        if self.max_len == 5 { &PIN_5 } else { &PIN_4 }
    }

    /// User-facing message for a PIN that fails this policy
    pub fn error_message(&self) -> String {
        format!("PIN must be exactly {} digits", self.max_len)
    }
}

/// Format rule for a target of the given level
pub fn policy_for(level: i64) -> PinPolicy {
    if level >= MANAGER_LEVEL {
        PinPolicy {
            min_len: 5,
            max_len: 5,
            pattern: "^[0-9]{5}$",
            allow_manager_toggle: true,
        }
    } else {
        PinPolicy {
            min_len: 4,
            max_len: 4,
            pattern: "^[0-9]{4}$",
            allow_manager_toggle: false,
        }
    }
}

/// Manager PIN rule, independent of the target's level
pub fn manager_pin_ok(pin: &str) -> bool {
    PIN_5.is_match(pin)
}

/// Strip non-digits and truncate to the level's maximum length
///
/// Idempotent: sanitizing an already sanitized value is a no-op.
pub fn sanitize(raw: &str, level: i64) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let max = policy_for(level).max_len;
    digits.chars().take(max).collect()
}

/// Draw a uniformly random PIN for the given level
pub fn random_pin(level: i64) -> String {
    let mut rng = rand::thread_rng();
    let pin: u32 = if level >= MANAGER_LEVEL {
        rng.gen_range(10_000..=99_999)
    } else {
        rng.gen_range(1_000..=9_999)
    };
    pin.to_string()
}
