//! Route definitions for maintenance requests and their logged actions.
//!
//! Mounted at `/maintenances` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{maintenance, maintenance_action};
use crate::state::AppState;

/// Maintenance routes.
///
/// ```text
/// GET    /                                      -> list_maintenances (?status, category, search, ...)
/// POST   /                                      -> create_maintenance
/// GET    /{public_id}                           -> get_maintenance
/// PATCH  /{public_id}                           -> update_maintenance
/// GET    /{maintenance_public_id}/actions       -> list_actions
/// POST   /{maintenance_public_id}/actions       -> create_action
/// GET    /{maintenance_public_id}/actions/{action_public_id}  -> get_action
/// PUT    /{maintenance_public_id}/actions/{action_public_id}  -> update_action
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(maintenance::list_maintenances).post(maintenance::create_maintenance),
        )
        .route(
            "/{public_id}",
            get(maintenance::get_maintenance).patch(maintenance::update_maintenance),
        )
        .route(
            "/{maintenance_public_id}/actions",
            get(maintenance_action::list_actions).post(maintenance_action::create_action),
        )
        .route(
            "/{maintenance_public_id}/actions/{action_public_id}",
            get(maintenance_action::get_action).put(maintenance_action::update_action),
        )
}
