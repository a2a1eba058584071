//! Route definitions for the read-only `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes merged under `/api`. Paths keep their trailing slash.
///
/// ```text
/// GET    /projects/            -> list
/// GET    /projects/{slug}/     -> get_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects/", get(project::list))
        .route("/projects/{slug}/", get(project::get_by_slug))
}
