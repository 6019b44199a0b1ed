//! Maintenance model and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use reparo_core::maintenance::{MaintenanceCategory, MaintenanceStatus};
use reparo_core::types::{DbId, Timestamp};

/// A row from the `maintenance` table.
///
/// The internal row id never leaves the service; responses expose the
/// opaque `public_id` as `id`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Maintenance {
    #[serde(skip_serializing)]
    pub id: DbId,
    #[serde(rename = "id")]
    pub public_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub scheduled_date: Timestamp,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new maintenance request.
#[derive(Debug, Deserialize)]
pub struct CreateMaintenance {
    pub title: String,
    pub description: String,
    pub category: MaintenanceCategory,
    pub scheduled_date: Timestamp,
}

/// DTO for partially updating a maintenance request.
///
/// Status requests are routed through the state machine, not the field
/// patch rules.
#[derive(Debug, Deserialize)]
pub struct UpdateMaintenance {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<MaintenanceCategory>,
    pub status: Option<MaintenanceStatus>,
}
