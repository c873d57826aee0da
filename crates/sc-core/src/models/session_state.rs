use crate::models::stored_user::StoredUser;
use crate::models::tenant::Tenant;

use serde::Serialize;

/// Load phase of one session state instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    /// Initial check-and-load pass has not completed
    Pending,
    /// Initial pass completed; terminal
    Settled,
}

/// In-memory session triple owned by exactly one accessor instance.
///
/// Created fresh per instance, populated once, never persisted as a whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    pub user: Option<StoredUser>,
    pub tenant: Option<Tenant>,
    pub phase: LoadPhase,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            user: None,
            tenant: None,
            phase: LoadPhase::Pending,
        }
    }

    /// True only before the initial check-and-load pass completes.
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Pending
    }

    /// Marks the initial pass complete. The phase machine has a single
    /// `Pending -> Settled` transition; settling twice changes nothing.
    pub fn settle(&mut self) {
        self.phase = LoadPhase::Settled;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
