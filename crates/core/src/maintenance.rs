//! Maintenance status machine and category enum.
//!
//! The status machine is allow-by-default: any transition is permitted
//! unless the current status is terminal (COMPLETED, CANCELED) or the
//! request would revert IN_PROGRESS back to OPEN. This is deliberately
//! not an adjacency matrix; OPEN may jump straight to COMPLETED.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Workflow status of a maintenance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceStatus {
    Open,
    InProgress,
    Completed,
    Canceled,
}

/// Statuses considered active for listing filters.
pub const ACTIVE_STATUSES: &[MaintenanceStatus] =
    &[MaintenanceStatus::Open, MaintenanceStatus::InProgress];

/// Statuses considered inactive for listing filters.
pub const INACTIVE_STATUSES: &[MaintenanceStatus] =
    &[MaintenanceStatus::Completed, MaintenanceStatus::Canceled];

impl MaintenanceStatus {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Canceled => "CANCELED",
        }
    }

    /// Parse from a string, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "OPEN" => Some(Self::Open),
            "IN_PROGRESS" => Some(Self::InProgress),
            "COMPLETED" => Some(Self::Completed),
            "CANCELED" => Some(Self::Canceled),
            _ => None,
        }
    }

    /// Whether this status permits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }
}

/// Classification tag for a maintenance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceCategory {
    Building,
    Electrical,
    Plumbing,
    Hvac,
    Furniture,
    Gardening,
    Security,
    Others,
}

impl MaintenanceCategory {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Building => "BUILDING",
            Self::Electrical => "ELECTRICAL",
            Self::Plumbing => "PLUMBING",
            Self::Hvac => "HVAC",
            Self::Furniture => "FURNITURE",
            Self::Gardening => "GARDENING",
            Self::Security => "SECURITY",
            Self::Others => "OTHERS",
        }
    }
}

/// Compute the next status for a maintenance request.
///
/// A `None` request is a silent no-op and always succeeds. Terminal states
/// reject every request; IN_PROGRESS additionally rejects reverting to OPEN.
/// Everything else, including same-state requests, is allowed.
pub fn change_status(
    current: MaintenanceStatus,
    requested: Option<MaintenanceStatus>,
) -> Result<MaintenanceStatus, CoreError> {
    let Some(requested) = requested else {
        return Ok(current);
    };
    if current == MaintenanceStatus::Completed {
        return Err(CoreError::InvalidTransition(
            "Cannot change status of a completed maintenance".into(),
        ));
    }
    if current == MaintenanceStatus::Canceled {
        return Err(CoreError::InvalidTransition(
            "Cannot change status of a cancelled maintenance".into(),
        ));
    }
    if current == MaintenanceStatus::InProgress && requested == MaintenanceStatus::Open {
        return Err(CoreError::InvalidTransition(
            "Cannot revert status from IN_PROGRESS to OPEN".into(),
        ));
    }
    Ok(requested)
}
