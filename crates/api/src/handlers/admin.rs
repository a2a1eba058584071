//! Handlers for the project admin surface at `/admin/projects`.
//!
//! Behaviour is driven by [`PROJECT_ADMIN`]: the change list projects rows
//! to `list_display`, search and filters follow `search_fields` and
//! `list_filter`, and a blank slug is prepopulated from its source fields.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::admin::{AdminConfig, AdminRoute, ADMIN_PROJECTS_PATH, ADMIN_ROUTES, PROJECT_ADMIN};
use folio_core::project::{generate_slug, ProjectField};
use folio_core::types::DbId;
use folio_db::models::project::{CreateProject, UpdateProject};
use folio_db::repositories::ProjectRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::ChangelistParams;
use crate::response::{Changelist, DataResponse};
use crate::serializer::{select_columns, ProjectRepresentation};
use crate::state::AppState;

/// Admin metadata payload.
#[derive(Debug, Serialize)]
pub struct AdminMetadata {
    pub path: &'static str,
    pub config: AdminConfig,
    pub routes: &'static [AdminRoute],
}

/// GET /admin/projects
pub async fn changelist(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ChangelistParams>,
) -> AppResult<Json<DataResponse<Changelist>>> {
    let filter = params.into_filter(&PROJECT_ADMIN)?;
    let total = ProjectRepo::count(&state.pool, &filter).await?;
    let projects = ProjectRepo::list(&state.pool, &filter).await?;

    let rows = projects
        .iter()
        .map(|p| select_columns(p, PROJECT_ADMIN.list_display))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Json(DataResponse {
        data: Changelist {
            columns: PROJECT_ADMIN.list_display.iter().map(|f| f.name()).collect(),
            total,
            rows,
        },
    }))
}

/// POST /admin/projects
pub async fn add(
    State(state): State<AppState>,
    AppJson(mut input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectRepresentation>>)> {
    prepopulate(&mut input);

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, slug = %project.slug, "Project added");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: project.into(),
        }),
    ))
}

/// GET /admin/projects/meta
pub async fn metadata() -> Json<DataResponse<AdminMetadata>> {
    Json(DataResponse {
        data: AdminMetadata {
            path: ADMIN_PROJECTS_PATH,
            config: PROJECT_ADMIN,
            routes: ADMIN_ROUTES,
        },
    })
}

/// GET /admin/projects/{id}
pub async fn change_form(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<ProjectRepresentation>>> {
    let project = ProjectRepo::get(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: project.into(),
    }))
}

/// PUT|PATCH /admin/projects/{id}
pub async fn change(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<DataResponse<ProjectRepresentation>>> {
    let project = ProjectRepo::update(&state.pool, id, &input).await?;
    tracing::info!(project_id = id, "Project changed");
    Ok(Json(DataResponse {
        data: project.into(),
    }))
}

/// DELETE /admin/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    ProjectRepo::delete(&state.pool, id).await?;
    tracing::info!(project_id = id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Fill a blank slug from its configured source fields.
fn prepopulate(input: &mut CreateProject) {
    if !input.slug.trim().is_empty() {
        return;
    }
    let Some(sources) = PROJECT_ADMIN.prepopulated_from(ProjectField::Slug) else {
        return;
    };
    let source = sources
        .iter()
        .filter_map(|f| text_value(input, *f))
        .collect::<Vec<_>>()
        .join(" ");
    input.slug = generate_slug(&source);
}

fn text_value(input: &CreateProject, field: ProjectField) -> Option<&str> {
    match field {
        ProjectField::Title => Some(&input.title),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_slug_is_derived_from_title() {
        let mut input = CreateProject {
            title: "Rode Coffee".into(),
            slug: "  ".into(),
            ..Default::default()
        };
        prepopulate(&mut input);
        assert_eq!(input.slug, "rode-coffee");
    }

    #[test]
    fn explicit_slug_is_kept() {
        let mut input = CreateProject {
            title: "Rode Coffee".into(),
            slug: "custom".into(),
            ..Default::default()
        };
        prepopulate(&mut input);
        assert_eq!(input.slug, "custom");
    }
}
