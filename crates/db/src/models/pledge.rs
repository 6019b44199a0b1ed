//! Pledge model and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use reparo_core::pledge::{PledgeStatus, PledgeType};
use reparo_core::types::{DbId, Timestamp};

/// A row from the `pledge` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Pledge {
    #[serde(skip_serializing)]
    pub id: DbId,
    #[serde(rename = "id")]
    pub public_id: Uuid,
    #[serde(skip_serializing)]
    pub maintenance_id: DbId,
    pub volunteer_name: String,
    pub volunteer_contact: String,
    pub description: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub pledge_type: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new pledge against an existing maintenance.
///
/// `maintenance_id` is the maintenance's public id. New pledges always
/// start OFFERED.
#[derive(Debug, Deserialize)]
pub struct CreatePledge {
    pub maintenance_id: Uuid,
    pub volunteer_name: String,
    pub volunteer_contact: String,
    pub description: String,
    #[serde(rename = "type")]
    pub pledge_type: PledgeType,
}

/// DTO for partially updating a pledge.
#[derive(Debug, Deserialize)]
pub struct UpdatePledge {
    pub volunteer_name: Option<String>,
    pub volunteer_contact: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub pledge_type: Option<PledgeType>,
    pub status: Option<PledgeStatus>,
}
