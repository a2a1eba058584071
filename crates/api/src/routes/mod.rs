pub mod admin;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /ping/                     liveness check
/// /projects/                 read-only listing
/// /projects/{slug}/          read-only detail
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(project::router())
}
