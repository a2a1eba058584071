//! Read projection of a stored project.
//!
//! A flat field-for-field copy in the order of
//! [`folio_core::project::SERIALIZED_FIELDS`]; nothing is derived.

use folio_core::project::ProjectField;
use folio_core::types::{DbId, Timestamp};
use folio_db::models::project::Project;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// Transmissible representation of a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRepresentation {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub url: String,
    pub image: Option<String>,
    pub tags: String,
    pub featured: bool,
    pub created_at: Timestamp,
}

impl From<&Project> for ProjectRepresentation {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            title: project.title.clone(),
            slug: project.slug.clone(),
            description: project.description.clone(),
            url: project.url.clone(),
            image: project.image.clone(),
            tags: project.tags.clone(),
            featured: project.featured,
            created_at: project.created_at,
        }
    }
}

impl From<Project> for ProjectRepresentation {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            title: project.title,
            slug: project.slug,
            description: project.description,
            url: project.url,
            image: project.image,
            tags: project.tags,
            featured: project.featured,
            created_at: project.created_at,
        }
    }
}

/// Project the representation down to `id` plus `columns`.
pub fn select_columns(
    project: &Project,
    columns: &[ProjectField],
) -> AppResult<Map<String, Value>> {
    let Value::Object(mut full) = serde_json::to_value(ProjectRepresentation::from(project))
        .map_err(|e| AppError::InternalError(format!("Failed to serialize project: {e}")))?
    else {
        return Err(AppError::InternalError(
            "Project did not serialize to an object".into(),
        ));
    };

    let mut row = Map::new();
    for field in std::iter::once(ProjectField::Id).chain(columns.iter().copied()) {
        if let Some(value) = full.remove(field.name()) {
            row.insert(field.name().to_string(), value);
        }
    }
    Ok(row)
}
