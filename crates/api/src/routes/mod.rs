pub mod health;
pub mod maintenance;
pub mod pledge;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /maintenances                                          list, create
/// /maintenances/{publicId}                               get, patch
/// /maintenances/{maintenancePublicId}/actions            list, create
/// /maintenances/{maintenancePublicId}/actions/{actionPublicId}   get, put
/// /pledges                                               list, create
/// /pledges/{publicId}                                    patch
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/maintenances", maintenance::router())
        .nest("/pledges", pledge::router())
}
