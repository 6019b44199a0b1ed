//! Repository for the `pledge` table.

use sqlx::PgPool;
use uuid::Uuid;

use reparo_core::types::DbId;

use crate::models::pledge::{CreatePledge, Pledge};

/// Column list for pledge queries.
const COLUMNS: &str = "id, public_id, maintenance_id, volunteer_name, volunteer_contact, \
    description, type, status, created_at, updated_at";

/// Provides CRUD operations for volunteer pledges.
pub struct PledgeRepo;

impl PledgeRepo {
    /// Insert a new pledge against the given maintenance row.
    ///
    /// New pledges always start OFFERED; the caller has already verified
    /// the owning maintenance is not terminal.
    pub async fn create(
        pool: &PgPool,
        maintenance_id: DbId,
        input: &CreatePledge,
    ) -> Result<Pledge, sqlx::Error> {
        let query = format!(
            "INSERT INTO pledge
                (public_id, maintenance_id, volunteer_name, volunteer_contact, description, type, status)
             VALUES ($1, $2, $3, $4, $5, $6, 'OFFERED')
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pledge>(&query)
            .bind(Uuid::new_v4())
            .bind(maintenance_id)
            .bind(&input.volunteer_name)
            .bind(&input.volunteer_contact)
            .bind(&input.description)
            .bind(input.pledge_type.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a pledge by its public id.
    pub async fn find_by_public_id(
        pool: &PgPool,
        public_id: Uuid,
    ) -> Result<Option<Pledge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pledge WHERE public_id = $1");
        sqlx::query_as::<_, Pledge>(&query)
            .bind(public_id)
            .fetch_optional(pool)
            .await
    }

    /// List pledges for a maintenance (by the maintenance's public id),
    /// newest first, with the total count for page metadata.
    pub async fn list_by_maintenance(
        pool: &PgPool,
        maintenance_public_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Pledge>, i64), sqlx::Error> {
        let query = "SELECT p.id, p.public_id, p.maintenance_id, p.volunteer_name, \
                p.volunteer_contact, p.description, p.type, p.status, p.created_at, p.updated_at
             FROM pledge p
             JOIN maintenance m ON m.id = p.maintenance_id
             WHERE m.public_id = $1
             ORDER BY p.created_at DESC, p.id DESC
             LIMIT $2 OFFSET $3";
        let rows = sqlx::query_as::<_, Pledge>(query)
            .bind(maintenance_public_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM pledge p
             JOIN maintenance m ON m.id = p.maintenance_id
             WHERE m.public_id = $1",
        )
        .bind(maintenance_public_id)
        .fetch_one(pool)
        .await?;

        Ok((rows, total))
    }

    /// Persist the mutable fields of an already-loaded pledge row.
    pub async fn update(pool: &PgPool, pledge: &Pledge) -> Result<Pledge, sqlx::Error> {
        let query = format!(
            "UPDATE pledge SET
                volunteer_name = $2,
                volunteer_contact = $3,
                description = $4,
                type = $5,
                status = $6,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pledge>(&query)
            .bind(pledge.id)
            .bind(&pledge.volunteer_name)
            .bind(&pledge.volunteer_contact)
            .bind(&pledge.description)
            .bind(&pledge.pledge_type)
            .bind(&pledge.status)
            .fetch_one(pool)
            .await
    }
}
