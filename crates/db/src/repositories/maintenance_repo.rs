//! Repository for the `maintenance` table.

use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::filter::{self, MaintenanceFilter};
use crate::models::maintenance::{CreateMaintenance, Maintenance};

/// Column list for maintenance queries.
const COLUMNS: &str =
    "id, public_id, title, description, category, scheduled_date, status, created_at, updated_at";

/// Provides CRUD operations for maintenance requests.
pub struct MaintenanceRepo;

impl MaintenanceRepo {
    /// Insert a new maintenance request, returning the created row.
    ///
    /// The public id is assigned here and the status starts OPEN.
    pub async fn create(pool: &PgPool, input: &CreateMaintenance) -> Result<Maintenance, sqlx::Error> {
        let query = format!(
            "INSERT INTO maintenance (public_id, title, description, category, scheduled_date, status)
             VALUES ($1, $2, $3, $4, $5, 'OPEN')
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Maintenance>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category.as_str())
            .bind(input.scheduled_date)
            .fetch_one(pool)
            .await
    }

    /// Find a maintenance request by its public id.
    pub async fn find_by_public_id(
        pool: &PgPool,
        public_id: Uuid,
    ) -> Result<Option<Maintenance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM maintenance WHERE public_id = $1");
        sqlx::query_as::<_, Maintenance>(&query)
            .bind(public_id)
            .fetch_optional(pool)
            .await
    }

    /// List maintenance requests matching `filter`, newest first, plus the
    /// total count of matching rows for page metadata.
    pub async fn list(
        pool: &PgPool,
        filter: &MaintenanceFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Maintenance>, i64), sqlx::Error> {
        let mut query = QueryBuilder::new(format!("SELECT {COLUMNS} FROM maintenance"));
        filter::push_conditions(&mut query, filter);
        query
            .push(" ORDER BY created_at DESC, id DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);
        let rows = query.build_query_as::<Maintenance>().fetch_all(pool).await?;

        let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM maintenance");
        filter::push_conditions(&mut count_query, filter);
        let total: i64 = count_query.build_query_scalar().fetch_one(pool).await?;

        Ok((rows, total))
    }

    /// Persist the mutable fields of an already-loaded maintenance row.
    ///
    /// The caller applies the patch rules and state machine first; this
    /// writes whatever the model now holds and bumps `updated_at`.
    pub async fn update(pool: &PgPool, maintenance: &Maintenance) -> Result<Maintenance, sqlx::Error> {
        let query = format!(
            "UPDATE maintenance SET
                title = $2,
                description = $3,
                category = $4,
                status = $5,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Maintenance>(&query)
            .bind(maintenance.id)
            .bind(&maintenance.title)
            .bind(&maintenance.description)
            .bind(&maintenance.category)
            .bind(&maintenance.status)
            .fetch_one(pool)
            .await
    }
}
