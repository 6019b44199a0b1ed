//! Repository for the `maintenance_action` and `action_material` tables.
//!
//! Materials are exclusively owned by their action: creation inserts them
//! alongside the action, and an update replaces the whole list inside the
//! same transaction.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use reparo_core::types::DbId;

use crate::models::maintenance_action::{
    ActionMaterial, CreateActionMaterial, CreateMaintenanceAction, MaintenanceAction,
};

/// Column list for maintenance_action queries.
const ACTION_COLUMNS: &str = "id, public_id, maintenance_id, executed_by, start_date, \
    completion_date, action_description, outcome_status, created_at, updated_at";

/// Column list for action_material queries.
const MATERIAL_COLUMNS: &str =
    "id, public_id, action_id, item_name, quantity, unit_of_measure, created_at, updated_at";

/// Provides CRUD operations for maintenance actions and their materials.
pub struct MaintenanceActionRepo;

impl MaintenanceActionRepo {
    /// Insert a new action with its materials in one transaction.
    pub async fn create(
        pool: &PgPool,
        maintenance_id: DbId,
        input: &CreateMaintenanceAction,
    ) -> Result<(MaintenanceAction, Vec<ActionMaterial>), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO maintenance_action
                (public_id, maintenance_id, executed_by, start_date, completion_date,
                 action_description, outcome_status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {ACTION_COLUMNS}"
        );
        let action = sqlx::query_as::<_, MaintenanceAction>(&insert_query)
            .bind(Uuid::new_v4())
            .bind(maintenance_id)
            .bind(&input.executed_by)
            .bind(input.start_date)
            .bind(input.completion_date)
            .bind(&input.action_description)
            .bind(input.outcome_status.as_str())
            .fetch_one(&mut *tx)
            .await?;

        let materials = Self::insert_materials(&mut tx, action.id, &input.materials_used).await?;

        tx.commit().await?;
        Ok((action, materials))
    }

    /// Find an action by public id, scoped to its owning maintenance.
    pub async fn find_by_maintenance_and_public_id(
        pool: &PgPool,
        maintenance_id: DbId,
        action_public_id: Uuid,
    ) -> Result<Option<MaintenanceAction>, sqlx::Error> {
        let query = format!(
            "SELECT {ACTION_COLUMNS} FROM maintenance_action
             WHERE maintenance_id = $1 AND public_id = $2"
        );
        sqlx::query_as::<_, MaintenanceAction>(&query)
            .bind(maintenance_id)
            .bind(action_public_id)
            .fetch_optional(pool)
            .await
    }

    /// List all actions logged against a maintenance, oldest first.
    pub async fn list_by_maintenance(
        pool: &PgPool,
        maintenance_id: DbId,
    ) -> Result<Vec<MaintenanceAction>, sqlx::Error> {
        let query = format!(
            "SELECT {ACTION_COLUMNS} FROM maintenance_action
             WHERE maintenance_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, MaintenanceAction>(&query)
            .bind(maintenance_id)
            .fetch_all(pool)
            .await
    }

    /// List the materials consumed by one action.
    pub async fn list_materials(
        pool: &PgPool,
        action_id: DbId,
    ) -> Result<Vec<ActionMaterial>, sqlx::Error> {
        let query = format!(
            "SELECT {MATERIAL_COLUMNS} FROM action_material
             WHERE action_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, ActionMaterial>(&query)
            .bind(action_id)
            .fetch_all(pool)
            .await
    }

    /// List the materials for a whole set of actions in one query.
    ///
    /// Rows come back ordered by action then insertion order; the caller
    /// groups them per action.
    pub async fn list_materials_for_actions(
        pool: &PgPool,
        action_ids: &[DbId],
    ) -> Result<Vec<ActionMaterial>, sqlx::Error> {
        let query = format!(
            "SELECT {MATERIAL_COLUMNS} FROM action_material
             WHERE action_id = ANY($1)
             ORDER BY action_id ASC, id ASC"
        );
        sqlx::query_as::<_, ActionMaterial>(&query)
            .bind(action_ids)
            .fetch_all(pool)
            .await
    }

    /// Persist an already-patched action and replace its material list.
    ///
    /// Runs in one transaction: the scalar update, the delete of every
    /// prior material row, and the insert of the new list commit together.
    pub async fn update(
        pool: &PgPool,
        action: &MaintenanceAction,
        materials: &[CreateActionMaterial],
    ) -> Result<(MaintenanceAction, Vec<ActionMaterial>), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE maintenance_action SET
                executed_by = $2,
                start_date = $3,
                completion_date = $4,
                action_description = $5,
                outcome_status = $6,
                updated_at = now()
             WHERE id = $1
             RETURNING {ACTION_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, MaintenanceAction>(&update_query)
            .bind(action.id)
            .bind(&action.executed_by)
            .bind(action.start_date)
            .bind(action.completion_date)
            .bind(&action.action_description)
            .bind(&action.outcome_status)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM action_material WHERE action_id = $1")
            .bind(action.id)
            .execute(&mut *tx)
            .await?;
        let new_materials = Self::insert_materials(&mut tx, action.id, materials).await?;

        tx.commit().await?;
        Ok((updated, new_materials))
    }

    async fn insert_materials(
        tx: &mut Transaction<'_, Postgres>,
        action_id: DbId,
        materials: &[CreateActionMaterial],
    ) -> Result<Vec<ActionMaterial>, sqlx::Error> {
        let insert_query = format!(
            "INSERT INTO action_material (public_id, action_id, item_name, quantity, unit_of_measure)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {MATERIAL_COLUMNS}"
        );
        let mut rows = Vec::with_capacity(materials.len());
        for material in materials {
            let row = sqlx::query_as::<_, ActionMaterial>(&insert_query)
                .bind(Uuid::new_v4())
                .bind(action_id)
                .bind(&material.item_name)
                .bind(material.quantity)
                .bind(&material.unit_of_measure)
                .fetch_one(&mut **tx)
                .await?;
            rows.push(row);
        }
        Ok(rows)
    }
}
