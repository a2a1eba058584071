//! Repository for the `projects` table.

use folio_core::admin::{search_terms, PROJECT_ADMIN};
use folio_core::pagination::{clamp_limit, clamp_offset, MAX_PAGE_LIMIT};
use folio_core::project::ENTITY;
use folio_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::{unique_violation_as_field, DbError};
use crate::models::project::{CreateProject, Project, ProjectFilter, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, description, url, image, tags, featured, created_at";

const SLUG_TAKEN: &str = "Project with this slug already exists.";

/// Provides CRUD and upsert operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `id` and `created_at` are assigned by the database.
    pub async fn create(pool: &SqlitePool, input: &CreateProject) -> Result<Project, DbError> {
        let input = input.clone().normalized();
        input.validate()?;

        let query = format!(
            "INSERT INTO projects (title, slug, description, url, image, tags, featured)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.url)
            .bind(&input.image)
            .bind(&input.tags)
            .bind(input.featured)
            .fetch_one(pool)
            .await
            .map_err(|e| unique_violation_as_field(e, "slug", SLUG_TAKEN))
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a project by ID, failing with `NotFound` when it is absent.
    pub async fn get(pool: &SqlitePool, id: DbId) -> Result<Project, DbError> {
        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| DbError::not_found(ENTITY, id))
    }

    /// Find a project by its unique slug.
    pub async fn find_by_slug(
        pool: &SqlitePool,
        slug: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = ?");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List projects matching `filter`, ordered and paginated.
    ///
    /// Without a `limit` every matching row after `offset` is returned.
    pub async fn list(pool: &SqlitePool, filter: &ProjectFilter) -> Result<Vec<Project>, sqlx::Error> {
        let where_sql = WhereClause::from_filter(filter);
        // SQLite reads a negative LIMIT as no limit.
        let limit = filter
            .limit
            .map_or(-1, |limit| clamp_limit(Some(limit), MAX_PAGE_LIMIT, MAX_PAGE_LIMIT));
        let offset = clamp_offset(filter.offset);

        let query = format!(
            "SELECT {COLUMNS} FROM projects {} ORDER BY {} LIMIT ? OFFSET ?",
            where_sql.sql,
            filter.ordering.sql()
        );
        let mut q = sqlx::query_as::<_, Project>(&query);
        if let Some(featured) = filter.featured {
            q = q.bind(featured);
        }
        for pattern in &where_sql.patterns {
            q = q.bind(pattern.as_str());
        }
        q.bind(limit).bind(offset).fetch_all(pool).await
    }

    /// Count projects matching `filter`, ignoring pagination.
    pub async fn count(pool: &SqlitePool, filter: &ProjectFilter) -> Result<i64, sqlx::Error> {
        let where_sql = WhereClause::from_filter(filter);
        let query = format!("SELECT COUNT(*) FROM projects {}", where_sql.sql);
        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(featured) = filter.featured {
            q = q.bind(featured);
        }
        for pattern in &where_sql.patterns {
            q = q.bind(pattern.as_str());
        }
        q.fetch_one(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Fails with `NotFound` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Project, DbError> {
        let input = input.clone().normalized();
        input.validate()?;

        let query = format!(
            "UPDATE projects SET
                title = COALESCE(?, title),
                slug = COALESCE(?, slug),
                description = COALESCE(?, description),
                url = COALESCE(?, url),
                image = CASE WHEN ? THEN NULL ELSE COALESCE(?, image) END,
                tags = COALESCE(?, tags),
                featured = COALESCE(?, featured)
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.url)
            .bind(input.clear_image)
            .bind(&input.image)
            .bind(&input.tags)
            .bind(input.featured)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| unique_violation_as_field(e, "slug", SLUG_TAKEN))?
            .ok_or_else(|| DbError::not_found(ENTITY, id))
    }

    /// Permanently delete a project by ID.
    ///
    /// Fails with `NotFound` when no row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found(ENTITY, id));
        }
        Ok(())
    }

    /// Create the project with `input.slug`, or overwrite every other field
    /// of the existing one. `id` and `created_at` of an existing row are
    /// kept.
    ///
    /// Returns the stored row and whether it was newly created. Each call
    /// runs in its own transaction.
    pub async fn upsert_by_slug(
        pool: &SqlitePool,
        input: &CreateProject,
    ) -> Result<(Project, bool), DbError> {
        let input = input.clone().normalized();
        input.validate()?;

        let mut tx = pool.begin().await?;

        let existing: Option<DbId> = sqlx::query_scalar("SELECT id FROM projects WHERE slug = ?")
            .bind(&input.slug)
            .fetch_optional(&mut *tx)
            .await?;

        let (project, created) = match existing {
            Some(id) => {
                let query = format!(
                    "UPDATE projects SET
                        title = ?, description = ?, url = ?, image = ?, tags = ?, featured = ?
                     WHERE id = ?
                     RETURNING {COLUMNS}"
                );
                let project = sqlx::query_as::<_, Project>(&query)
                    .bind(&input.title)
                    .bind(&input.description)
                    .bind(&input.url)
                    .bind(&input.image)
                    .bind(&input.tags)
                    .bind(input.featured)
                    .bind(id)
                    .fetch_one(&mut *tx)
                    .await?;
                (project, false)
            }
            None => {
                let query = format!(
                    "INSERT INTO projects (title, slug, description, url, image, tags, featured)
                     VALUES (?, ?, ?, ?, ?, ?, ?)
                     RETURNING {COLUMNS}"
                );
                let project = sqlx::query_as::<_, Project>(&query)
                    .bind(&input.title)
                    .bind(&input.slug)
                    .bind(&input.description)
                    .bind(&input.url)
                    .bind(&input.image)
                    .bind(&input.tags)
                    .bind(input.featured)
                    .fetch_one(&mut *tx)
                    .await?;
                (project, true)
            }
        };

        tx.commit().await?;

        tracing::debug!(
            project_id = project.id,
            slug = %project.slug,
            created,
            "Project upserted"
        );
        Ok((project, created))
    }
}

/// `WHERE` clause for a [`ProjectFilter`] plus the LIKE patterns to bind
/// after the optional `featured` value.
struct WhereClause {
    sql: String,
    patterns: Vec<String>,
}

impl WhereClause {
    fn from_filter(filter: &ProjectFilter) -> Self {
        let mut conditions = Vec::new();
        let mut patterns = Vec::new();

        if filter.featured.is_some() {
            conditions.push("featured = ?".to_string());
        }

        let terms = filter.search.as_deref().map(search_terms).unwrap_or_default();
        for term in terms {
            let pattern = format!("%{}%", escape_like(&term));
            let any_field = PROJECT_ADMIN
                .search_fields
                .iter()
                .map(|field| {
                    patterns.push(pattern.clone());
                    format!("{} LIKE ? ESCAPE '\\'", field.name())
                })
                .collect::<Vec<_>>()
                .join(" OR ");
            conditions.push(format!("({any_field})"));
        }

        let sql = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        Self { sql, patterns }
    }
}

/// Escape LIKE wildcards so a search term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
