//! Read-only project endpoints for public clients.

use axum::extract::State;
use axum::Json;
use folio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery};
use crate::query::ProjectListParams;
use crate::serializer::ProjectRepresentation;
use crate::state::AppState;

/// GET /api/projects/
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ProjectListParams>,
) -> AppResult<Json<Vec<ProjectRepresentation>>> {
    let filter = params.into_filter()?;
    let projects = ProjectRepo::list(&state.pool, &filter).await?;
    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// GET /api/projects/{slug}/
pub async fn get_by_slug(
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> AppResult<Json<ProjectRepresentation>> {
    let project = ProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project with slug '{slug}' not found")))?;
    Ok(Json(project.into()))
}
