//! Maintenance action outcome tag.

use serde::{Deserialize, Serialize};

/// How an executed maintenance action concluded.
///
/// A descriptive tag, not a workflow state machine: it carries no
/// transition rules and may be overwritten freely on update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionOutcomeStatus {
    Success,
    PartialSuccess,
    Failure,
}

impl ActionOutcomeStatus {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::PartialSuccess => "PARTIAL_SUCCESS",
            Self::Failure => "FAILURE",
        }
    }
}
