//! Transient outcome notifications
//!
//! Holds at most one message at a time. Every `set` supersedes the
//! previous message and restarts the 5-second auto-clear; a stale timer
//! never clears a newer message.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

const NOTICE_TTL: Duration = Duration::from_secs(5);

/// A single user-visible outcome message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

#[derive(Default)]
struct BoardState {
    seq: u64,
    current: Option<Notice>,
}

/// Holder of the single transient notice
#[derive(Clone, Default)]
pub struct NoticeBoard {
    state: Arc<Mutex<BoardState>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current notice and arm the auto-clear
    pub async fn set(&self, message: impl Into<String>, is_error: bool) {
        let seq = {
            let mut state = self.state.lock().await;
            state.seq += 1;
            state.current = Some(Notice {
                message: message.into(),
                is_error,
            });
            state.seq
        };

        let shared = Arc::clone(&self.state);
        tokio::spawn(async move {
            tokio::time::sleep(NOTICE_TTL).await;
            let mut state = shared.lock().await;
            // A newer set has taken over; leave its message alone
            if state.seq == seq {
                state.current = None;
            }
        });
    }

    /// Clear early and cancel any pending auto-clear
    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        state.seq += 1;
        state.current = None;
    }

    /// The live notice, if any
    pub async fn current(&self) -> Option<Notice> {
        self.state.lock().await.current.clone()
    }
}
