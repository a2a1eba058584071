//! Route definitions for the project admin surface.
//!
//! The route set is read from [`ADMIN_ROUTES`] so the metadata endpoint and
//! the mounted router cannot drift apart.

use axum::routing::{on, MethodFilter, MethodRouter};
use axum::Router;
use folio_core::admin::{AdminOperation, RouteMethod, ADMIN_ROUTES};

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin/projects`.
///
/// ```text
/// GET    /          -> changelist
/// POST   /          -> add
/// GET    /meta      -> metadata
/// GET    /{id}      -> change_form
/// PUT    /{id}      -> change
/// PATCH  /{id}      -> change
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    ADMIN_ROUTES.iter().fold(Router::new(), |router, route| {
        router.route(route.path, handler(route.method, route.operation))
    })
}

fn handler(method: RouteMethod, operation: AdminOperation) -> MethodRouter<AppState> {
    let filter = method_filter(method);
    match operation {
        AdminOperation::Changelist => on(filter, admin::changelist),
        AdminOperation::Add => on(filter, admin::add),
        AdminOperation::Metadata => on(filter, admin::metadata),
        AdminOperation::ChangeForm => on(filter, admin::change_form),
        AdminOperation::Change => on(filter, admin::change),
        AdminOperation::Delete => on(filter, admin::delete),
    }
}

fn method_filter(method: RouteMethod) -> MethodFilter {
    match method {
        RouteMethod::Get => MethodFilter::GET,
        RouteMethod::Post => MethodFilter::POST,
        RouteMethod::Put => MethodFilter::PUT,
        RouteMethod::Patch => MethodFilter::PATCH,
        RouteMethod::Delete => MethodFilter::DELETE,
    }
}
