//! Maintenance action and material models with their request DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use reparo_core::action::ActionOutcomeStatus;
use reparo_core::types::{DbId, Timestamp};

/// A row from the `maintenance_action` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MaintenanceAction {
    #[serde(skip_serializing)]
    pub id: DbId,
    #[serde(rename = "id")]
    pub public_id: Uuid,
    #[serde(skip_serializing)]
    pub maintenance_id: DbId,
    pub executed_by: String,
    pub start_date: Timestamp,
    pub completion_date: Timestamp,
    pub action_description: String,
    pub outcome_status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A material line item consumed by one action.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ActionMaterial {
    #[serde(skip_serializing)]
    pub id: DbId,
    #[serde(rename = "id")]
    pub public_id: Uuid,
    #[serde(skip_serializing)]
    pub action_id: DbId,
    pub item_name: String,
    pub quantity: Decimal,
    pub unit_of_measure: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for one material line in a create/update action payload.
#[derive(Debug, Deserialize)]
pub struct CreateActionMaterial {
    pub item_name: String,
    pub quantity: Decimal,
    pub unit_of_measure: String,
}

/// DTO for creating a new maintenance action.
#[derive(Debug, Deserialize)]
pub struct CreateMaintenanceAction {
    pub executed_by: String,
    pub start_date: Timestamp,
    pub completion_date: Timestamp,
    pub action_description: String,
    #[serde(default)]
    pub materials_used: Vec<CreateActionMaterial>,
    pub outcome_status: ActionOutcomeStatus,
}

/// DTO for updating a maintenance action.
///
/// Scalar fields follow the patch rules; the material list is replaced
/// wholesale (prior materials are discarded, not merged).
#[derive(Debug, Deserialize)]
pub struct UpdateMaintenanceAction {
    pub executed_by: Option<String>,
    pub start_date: Option<Timestamp>,
    pub completion_date: Option<Timestamp>,
    pub action_description: Option<String>,
    #[serde(default)]
    pub materials_used: Vec<CreateActionMaterial>,
    pub outcome_status: Option<ActionOutcomeStatus>,
}
