//! Route definitions for volunteer pledges.
//!
//! Mounted at `/pledges` by `api_routes()`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::pledge;
use crate::state::AppState;

/// Pledge routes.
///
/// ```text
/// GET    /               -> list_pledges (?maintenance_id, limit, offset)
/// POST   /               -> create_pledge
/// PATCH  /{public_id}    -> update_pledge
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pledge::list_pledges).post(pledge::create_pledge))
        .route("/{public_id}", patch(pledge::update_pledge))
}
