//! Dynamic WHERE-clause assembly for maintenance listing.
//!
//! Each filter input contributes at most one condition; conditions are
//! combined with AND. The same builder feeds both the page query and the
//! total-count query so they can never drift apart.

use sqlx::{Postgres, QueryBuilder};

use reparo_core::filter::StatusFilter;
use reparo_core::types::Timestamp;

/// Resolved filter inputs for a maintenance listing.
#[derive(Debug, Default)]
pub struct MaintenanceFilter {
    pub status: Option<StatusFilter>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub scheduled_from: Option<Timestamp>,
    pub scheduled_to: Option<Timestamp>,
    pub created_after: Option<Timestamp>,
}

/// Append the filter's conditions to `builder`.
///
/// Starts the WHERE clause unconditionally so callers can append further
/// clauses (ORDER BY, LIMIT) without tracking whether any filter applied.
pub fn push_conditions(builder: &mut QueryBuilder<'_, Postgres>, filter: &MaintenanceFilter) {
    builder.push(" WHERE TRUE");

    if let Some(StatusFilter::OneOf(statuses)) = &filter.status {
        builder.push(" AND status IN (");
        let mut statuses_sql = builder.separated(", ");
        for status in statuses {
            statuses_sql.push_bind(status.as_str());
        }
        builder.push(")");
    }

    if let Some(category) = &filter.category {
        builder
            .push(" AND LOWER(category) = LOWER(")
            .push_bind(category.clone())
            .push(")");
    }

    if let Some(term) = &filter.search {
        let pattern = format!("%{term}%");
        builder
            .push(" AND (title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR category ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    if let Some(from) = filter.scheduled_from {
        builder.push(" AND scheduled_date >= ").push_bind(from);
    }
    if let Some(to) = filter.scheduled_to {
        builder.push(" AND scheduled_date <= ").push_bind(to);
    }
    if let Some(after) = filter.created_after {
        builder.push(" AND created_at > ").push_bind(after);
    }
}
