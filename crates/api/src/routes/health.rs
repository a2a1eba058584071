use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Mount the ping route (under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/ping/", get(health::ping))
}
