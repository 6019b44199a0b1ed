//! Pledge status machine and pledge type enum.
//!
//! Same shape as the maintenance machine but with its own states: terminal
//! statuses (CANCELED, COMPLETED, REJECTED) are immutable, everything else
//! may move anywhere. The terminal check runs before the no-op check, so a
//! terminal pledge rejects even a `None` request.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Workflow status of a volunteer pledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PledgeStatus {
    Offered,
    Pending,
    Rejected,
    Completed,
    Canceled,
}

impl PledgeStatus {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offered => "OFFERED",
            Self::Pending => "PENDING",
            Self::Rejected => "REJECTED",
            Self::Completed => "COMPLETED",
            Self::Canceled => "CANCELED",
        }
    }

    /// Parse from a string, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "OFFERED" => Some(Self::Offered),
            "PENDING" => Some(Self::Pending),
            "REJECTED" => Some(Self::Rejected),
            "COMPLETED" => Some(Self::Completed),
            "CANCELED" => Some(Self::Canceled),
            _ => None,
        }
    }
}

/// What kind of help a pledge offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PledgeType {
    Material,
    Labor,
}

impl PledgeType {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Material => "MATERIAL",
            Self::Labor => "LABOR",
        }
    }
}

/// Compute the next status for a pledge.
///
/// Terminal pledges reject any status change, same-state requests included.
/// A `None` request on a non-terminal pledge is a silent no-op; otherwise
/// the requested status is applied with no adjacency restriction.
pub fn change_status(
    current: PledgeStatus,
    requested: Option<PledgeStatus>,
) -> Result<PledgeStatus, CoreError> {
    match current {
        PledgeStatus::Canceled => {
            return Err(CoreError::InvalidTransition(
                "Cannot change status of a canceled pledge".into(),
            ))
        }
        PledgeStatus::Completed => {
            return Err(CoreError::InvalidTransition(
                "Cannot change status of a completed pledge".into(),
            ))
        }
        PledgeStatus::Rejected => {
            return Err(CoreError::InvalidTransition(
                "Cannot change status of a rejected pledge".into(),
            ))
        }
        _ => {}
    }
    Ok(requested.unwrap_or(current))
}
