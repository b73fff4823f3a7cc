/*
[INPUT]:  Operation lifecycle stages and session outcomes
[OUTPUT]: Global request status, error slot, session flags
[POS]:    State layer - process-wide status record
[UPDATE]: When adding new global flags
*/

use serde::Serialize;

/// Lifecycle stage of the most recently started operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Global status record.
///
/// Last write wins: overlapping operations race on `status` and `error`,
/// nothing here tracks which operation wrote last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppStatus {
    pub status: RequestStatus,
    pub error: Option<String>,
    pub is_initialized: bool,
}

impl AppStatus {
    /// Replaces the status. Returns whether the value differed.
    pub fn set_status(&mut self, status: RequestStatus) -> bool {
        let changed = self.status != status;
        self.status = status;
        changed
    }

    pub fn set_error(&mut self, error: Option<String>) -> bool {
        let changed = self.error != error;
        self.error = error;
        changed
    }

    /// Failed status plus message, as one transition.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        let error_changed = self.set_error(Some(message.into()));
        self.set_status(RequestStatus::Failed) | error_changed
    }

    /// Flips `is_initialized` to true. Returns false if it already was.
    pub fn mark_initialized(&mut self) -> bool {
        let changed = !self.is_initialized;
        self.is_initialized = true;
        changed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub is_logged_in: bool,
}

impl Session {
    pub fn set_logged_in(&mut self, value: bool) -> bool {
        let changed = self.is_logged_in != value;
        self.is_logged_in = value;
        changed
    }
}
