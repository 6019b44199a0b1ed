//! Handlers for maintenance requests.
//!
//! Create, list (with composable filters), retrieve, and partial update.
//! Status changes are routed through the state machine; everything else
//! goes through the patch field rules.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use reparo_core::error::CoreError;
use reparo_core::filter::{self as filter_input};
use reparo_core::maintenance::{self, MaintenanceStatus};
use reparo_core::pagination::{clamp_limit, clamp_offset};
use reparo_core::patch;
use reparo_core::types::Timestamp;
use reparo_core::validation::{
    validate_length, validate_max_length, validate_not_blank, validate_size, FieldErrors,
};
use reparo_db::filter::MaintenanceFilter;
use reparo_db::models::maintenance::{CreateMaintenance, Maintenance, UpdateMaintenance};
use reparo_db::repositories::MaintenanceRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, Page};
use crate::state::AppState;

/// Query parameters for the maintenance listing.
///
/// Every filter is optional and independent; see `reparo_core::filter`
/// for the parsing rules.
#[derive(Debug, Deserialize)]
pub struct MaintenanceListParams {
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub scheduled_from: Option<Timestamp>,
    pub scheduled_to: Option<Timestamp>,
    pub created_after: Option<Timestamp>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /maintenances
///
/// Create a new maintenance request; status starts OPEN.
pub async fn create_maintenance(
    State(state): State<AppState>,
    Json(input): Json<CreateMaintenance>,
) -> AppResult<impl IntoResponse> {
    let mut errors = FieldErrors::new();
    errors.check("title", validate_length(&input.title, 5, 100));
    errors.check(
        "description",
        validate_not_blank(&input.description)
            .and_then(|()| validate_max_length(&input.description, 3000)),
    );
    errors.into_result()?;

    let created = MaintenanceRepo::create(&state.pool, &input).await?;

    tracing::info!(
        maintenance_id = %created.public_id,
        category = %created.category,
        "Maintenance created"
    );

    let location = format!("/api/v1/maintenances/{}", created.public_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(DataResponse { data: created }),
    ))
}

/// GET /maintenances?status=&category=&search=&scheduled_from=&scheduled_to=&created_after=&limit=&offset=
///
/// List maintenance requests. All supplied filters apply conjunctively;
/// unrecognised status values are ignored rather than rejected.
pub async fn list_maintenances(
    State(state): State<AppState>,
    Query(params): Query<MaintenanceListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = MaintenanceFilter {
        status: Some(filter_input::parse_status_filter(params.status.as_deref())),
        category: filter_input::normalize_category(params.category.as_deref())
            .map(str::to_string),
        search: filter_input::normalize_search(params.search.as_deref()).map(str::to_string),
        scheduled_from: params.scheduled_from,
        scheduled_to: params.scheduled_to,
        created_after: params.created_after,
    };
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);

    let (rows, total) = MaintenanceRepo::list(&state.pool, &filter, limit, offset).await?;

    Ok(Json(Page {
        data: rows,
        total,
        limit,
        offset,
    }))
}

/// GET /maintenances/{public_id}
pub async fn get_maintenance(
    State(state): State<AppState>,
    Path(public_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let maintenance = find_maintenance(&state, public_id).await?;
    Ok(Json(DataResponse { data: maintenance }))
}

/// PATCH /maintenances/{public_id}
///
/// Partial update of title/description/category plus an optional status
/// transition. An absent status is a silent no-op; a disallowed one is 409.
pub async fn update_maintenance(
    State(state): State<AppState>,
    Path(public_id): Path<Uuid>,
    Json(input): Json<UpdateMaintenance>,
) -> AppResult<impl IntoResponse> {
    let mut errors = FieldErrors::new();
    if let Some(ref title) = input.title {
        errors.check("title", validate_size(title, 5, 100));
    }
    if let Some(ref description) = input.description {
        errors.check("description", validate_max_length(description, 3000));
    }
    errors.into_result()?;

    let mut existing = find_maintenance(&state, public_id).await?;

    patch::patch_name(&mut existing.title, input.title);
    patch::patch_text(&mut existing.description, input.description);
    if let Some(category) = input.category {
        existing.category = category.as_str().to_string();
    }

    let current = parse_status(&existing.status)?;
    let next = maintenance::change_status(current, input.status)?;
    existing.status = next.as_str().to_string();

    let updated = MaintenanceRepo::update(&state.pool, &existing).await?;

    tracing::info!(
        maintenance_id = %updated.public_id,
        status = %updated.status,
        "Maintenance updated"
    );

    Ok(Json(DataResponse { data: updated }))
}

/// Load a maintenance by public id or fail with 404.
pub(crate) async fn find_maintenance(
    state: &AppState,
    public_id: Uuid,
) -> Result<Maintenance, AppError> {
    MaintenanceRepo::find_by_public_id(&state.pool, public_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound {
            entity: "Maintenance",
        }))
}

/// Parse a stored status string, treating unknown values as data corruption.
pub(crate) fn parse_status(stored: &str) -> Result<MaintenanceStatus, AppError> {
    MaintenanceStatus::parse(stored).ok_or_else(|| {
        AppError::Internal(format!("Unknown maintenance status in store: {stored}"))
    })
}
