//! Handlers for volunteer pledges.
//!
//! A pledge can only be created against a maintenance that is not in a
//! terminal state; the check runs at creation time only and is not
//! re-evaluated on later pledge updates.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use reparo_core::error::CoreError;
use reparo_core::pagination::{clamp_limit, clamp_offset};
use reparo_core::patch;
use reparo_core::pledge::{self, PledgeStatus};
use reparo_core::validation::{validate_length, validate_max_length, validate_not_blank, FieldErrors};
use reparo_db::models::pledge::{CreatePledge, UpdatePledge};
use reparo_db::repositories::PledgeRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::maintenance::{find_maintenance, parse_status};
use crate::response::{DataResponse, Page};
use crate::state::AppState;

/// Query parameters for the pledge listing.
#[derive(Debug, Deserialize)]
pub struct PledgeListParams {
    pub maintenance_id: Uuid,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /pledges
///
/// Create a new pledge against an existing, non-terminal maintenance.
/// New pledges always start OFFERED.
pub async fn create_pledge(
    State(state): State<AppState>,
    Json(input): Json<CreatePledge>,
) -> AppResult<impl IntoResponse> {
    let mut errors = FieldErrors::new();
    errors.check("volunteer_name", validate_length(&input.volunteer_name, 5, 100));
    errors.check(
        "volunteer_contact",
        validate_length(&input.volunteer_contact, 5, 30),
    );
    errors.check(
        "description",
        validate_not_blank(&input.description)
            .and_then(|()| validate_max_length(&input.description, 3000)),
    );
    errors.into_result()?;

    let maintenance = find_maintenance(&state, input.maintenance_id).await?;
    if parse_status(&maintenance.status)?.is_terminal() {
        return Err(AppError::Core(CoreError::Conflict(
            "Cannot pledge against a completed or cancelled maintenance".into(),
        )));
    }

    let created = PledgeRepo::create(&state.pool, maintenance.id, &input).await?;

    tracing::info!(
        pledge_id = %created.public_id,
        maintenance_id = %maintenance.public_id,
        "Pledge created"
    );

    let location = format!("/api/v1/pledges/{}", created.public_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(DataResponse { data: created }),
    ))
}

/// GET /pledges?maintenance_id=&limit=&offset=
///
/// List pledges made against one maintenance, newest first.
pub async fn list_pledges(
    State(state): State<AppState>,
    Query(params): Query<PledgeListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);

    let (rows, total) =
        PledgeRepo::list_by_maintenance(&state.pool, params.maintenance_id, limit, offset).await?;

    Ok(Json(Page {
        data: rows,
        total,
        limit,
        offset,
    }))
}

/// PATCH /pledges/{public_id}
///
/// Partial update of pledge details plus an optional status transition.
/// Terminal pledges reject any status request.
pub async fn update_pledge(
    State(state): State<AppState>,
    Path(public_id): Path<Uuid>,
    Json(input): Json<UpdatePledge>,
) -> AppResult<impl IntoResponse> {
    let mut existing = PledgeRepo::find_by_public_id(&state.pool, public_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Pledge" }))?;

    patch::patch_name(&mut existing.volunteer_name, input.volunteer_name);
    patch::patch_name(&mut existing.volunteer_contact, input.volunteer_contact);
    // Pledge descriptions treat blank as "no change", unlike maintenance
    // descriptions.
    patch::patch_name(&mut existing.description, input.description);
    if let Some(pledge_type) = input.pledge_type {
        existing.pledge_type = pledge_type.as_str().to_string();
    }

    let current = PledgeStatus::parse(&existing.status).ok_or_else(|| {
        AppError::Internal(format!("Unknown pledge status in store: {}", existing.status))
    })?;
    let next = pledge::change_status(current, input.status)?;
    existing.status = next.as_str().to_string();

    let updated = PledgeRepo::update(&state.pool, &existing).await?;

    tracing::info!(pledge_id = %updated.public_id, status = %updated.status, "Pledge updated");

    Ok(Json(DataResponse { data: updated }))
}
