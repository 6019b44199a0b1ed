//! Handlers for logged maintenance actions and their materials.
//!
//! Actions are nested under their owning maintenance. A COMPLETED
//! maintenance blocks both creating and updating actions (CANCELED does
//! not -- the guard is narrower than the pledge guard on purpose).

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use reparo_core::error::CoreError;
use reparo_core::maintenance::MaintenanceStatus;
use reparo_core::patch;
use reparo_core::types::DbId;
use reparo_core::validation::{
    validate_length, validate_not_blank, validate_positive, validate_size, FieldErrors,
};
use reparo_db::models::maintenance::Maintenance;
use reparo_db::models::maintenance_action::{
    ActionMaterial, CreateActionMaterial, CreateMaintenanceAction, MaintenanceAction,
    UpdateMaintenanceAction,
};
use reparo_db::repositories::MaintenanceActionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::maintenance::{find_maintenance, parse_status};
use crate::response::DataResponse;
use crate::state::AppState;

/// Response projection for one action: the action row, the owning
/// maintenance's public id, and the materials consumed.
#[derive(Debug, Serialize)]
pub struct MaintenanceActionResponse {
    #[serde(flatten)]
    pub action: MaintenanceAction,
    pub maintenance_id: Uuid,
    pub materials_used: Vec<ActionMaterial>,
}

/// POST /maintenances/{maintenance_public_id}/actions
///
/// Log a new action against a maintenance that is not COMPLETED.
pub async fn create_action(
    State(state): State<AppState>,
    Path(maintenance_public_id): Path<Uuid>,
    Json(input): Json<CreateMaintenanceAction>,
) -> AppResult<impl IntoResponse> {
    let mut errors = FieldErrors::new();
    errors.check("executed_by", validate_length(&input.executed_by, 3, 100));
    errors.check(
        "action_description",
        validate_length(&input.action_description, 10, 2000),
    );
    check_materials(&mut errors, &input.materials_used);
    errors.into_result()?;

    let maintenance = find_maintenance(&state, maintenance_public_id).await?;
    ensure_not_completed(&maintenance, "Cannot add action to a completed maintenance")?;

    let (action, materials) =
        MaintenanceActionRepo::create(&state.pool, maintenance.id, &input).await?;

    tracing::info!(
        action_id = %action.public_id,
        maintenance_id = %maintenance.public_id,
        outcome = %action.outcome_status,
        "Maintenance action created"
    );

    let location = format!(
        "/api/v1/maintenances/{}/actions/{}",
        maintenance.public_id, action.public_id
    );
    let body = MaintenanceActionResponse {
        action,
        maintenance_id: maintenance.public_id,
        materials_used: materials,
    };
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(DataResponse { data: body }),
    ))
}

/// GET /maintenances/{maintenance_public_id}/actions
///
/// List every action logged against one maintenance, oldest first.
/// Materials for the whole page are fetched in one query and grouped
/// per action.
pub async fn list_actions(
    State(state): State<AppState>,
    Path(maintenance_public_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let maintenance = find_maintenance(&state, maintenance_public_id).await?;

    let actions = MaintenanceActionRepo::list_by_maintenance(&state.pool, maintenance.id).await?;
    let action_ids: Vec<DbId> = actions.iter().map(|action| action.id).collect();

    let mut materials_by_action: HashMap<DbId, Vec<ActionMaterial>> = HashMap::new();
    for material in
        MaintenanceActionRepo::list_materials_for_actions(&state.pool, &action_ids).await?
    {
        materials_by_action
            .entry(material.action_id)
            .or_default()
            .push(material);
    }

    let responses = actions
        .into_iter()
        .map(|action| {
            let materials_used = materials_by_action.remove(&action.id).unwrap_or_default();
            MaintenanceActionResponse {
                action,
                maintenance_id: maintenance.public_id,
                materials_used,
            }
        })
        .collect::<Vec<_>>();

    Ok(Json(DataResponse { data: responses }))
}

/// GET /maintenances/{maintenance_public_id}/actions/{action_public_id}
pub async fn get_action(
    State(state): State<AppState>,
    Path((maintenance_public_id, action_public_id)): Path<(Uuid, Uuid)>,
) -> AppResult<impl IntoResponse> {
    let maintenance = find_maintenance(&state, maintenance_public_id).await?;
    let action = find_action(&state, &maintenance, action_public_id).await?;
    let materials = MaintenanceActionRepo::list_materials(&state.pool, action.id).await?;

    Ok(Json(DataResponse {
        data: MaintenanceActionResponse {
            action,
            maintenance_id: maintenance.public_id,
            materials_used: materials,
        },
    }))
}

/// PUT /maintenances/{maintenance_public_id}/actions/{action_public_id}
///
/// Patch the action's scalar fields and replace its material list
/// wholesale. The completion-date guard compares against the start date
/// the action had before this update.
pub async fn update_action(
    State(state): State<AppState>,
    Path((maintenance_public_id, action_public_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<UpdateMaintenanceAction>,
) -> AppResult<impl IntoResponse> {
    let mut errors = FieldErrors::new();
    if let Some(ref executed_by) = input.executed_by {
        errors.check("executed_by", validate_size(executed_by, 3, 100));
    }
    if let Some(ref description) = input.action_description {
        errors.check("action_description", validate_size(description, 10, 2000));
    }
    check_materials(&mut errors, &input.materials_used);
    errors.into_result()?;

    let maintenance = find_maintenance(&state, maintenance_public_id).await?;
    ensure_not_completed(&maintenance, "Cannot update action of a completed maintenance")?;

    let mut action = find_action(&state, &maintenance, action_public_id).await?;

    // Completion date is guarded against the pre-update start date, even
    // when this same payload moves the start date.
    let start_before_update = action.start_date;
    patch::patch_text(&mut action.executed_by, input.executed_by);
    patch::patch_value(&mut action.start_date, input.start_date);
    patch::patch_completion_date(
        &mut action.completion_date,
        input.completion_date,
        start_before_update,
    );
    patch::patch_text(&mut action.action_description, input.action_description);
    if let Some(outcome) = input.outcome_status {
        action.outcome_status = outcome.as_str().to_string();
    }

    let (updated, materials) =
        MaintenanceActionRepo::update(&state.pool, &action, &input.materials_used).await?;

    tracing::info!(
        action_id = %updated.public_id,
        maintenance_id = %maintenance.public_id,
        "Maintenance action updated"
    );

    Ok(Json(DataResponse {
        data: MaintenanceActionResponse {
            action: updated,
            maintenance_id: maintenance.public_id,
            materials_used: materials,
        },
    }))
}

/// Reject the operation when the owning maintenance is COMPLETED.
fn ensure_not_completed(maintenance: &Maintenance, message: &str) -> Result<(), AppError> {
    if parse_status(&maintenance.status)? == MaintenanceStatus::Completed {
        return Err(AppError::Core(CoreError::Conflict(message.into())));
    }
    Ok(())
}

/// Load an action scoped to its owning maintenance or fail with 404.
async fn find_action(
    state: &AppState,
    maintenance: &Maintenance,
    action_public_id: Uuid,
) -> Result<MaintenanceAction, AppError> {
    MaintenanceActionRepo::find_by_maintenance_and_public_id(
        &state.pool,
        maintenance.id,
        action_public_id,
    )
    .await?
    .ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "MaintenanceAction",
        })
    })
}

/// Validate every material line, reporting each offending field.
fn check_materials(errors: &mut FieldErrors, materials: &[CreateActionMaterial]) {
    for (index, material) in materials.iter().enumerate() {
        errors.check(
            &format!("materials_used[{index}].item_name"),
            validate_not_blank(&material.item_name),
        );
        errors.check(
            &format!("materials_used[{index}].quantity"),
            validate_positive(material.quantity),
        );
        errors.check(
            &format!("materials_used[{index}].unit_of_measure"),
            validate_not_blank(&material.unit_of_measure),
        );
    }
}
