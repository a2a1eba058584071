//! Query parameter types for project listing endpoints.
//!
//! Both surfaces resolve to the same [`ProjectFilter`]; they differ only in
//! parameter names and in whether search is offered.

use folio_core::admin::AdminConfig;
use folio_core::error::CoreError;
use folio_core::pagination::{clamp_limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use folio_core::project::{ProjectField, ProjectOrdering};
use folio_db::models::project::ProjectFilter;
use serde::Deserialize;

/// Admin change list parameters (`?q=&featured=&o=&limit=&offset=`).
#[derive(Debug, Default, Deserialize)]
pub struct ChangelistParams {
    /// Free-text search over the admin search fields.
    pub q: Option<String>,
    pub featured: Option<bool>,
    /// Ordering key, e.g. `-created_at` or `title`.
    pub o: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ChangelistParams {
    /// Resolve against `config`: filters must be listed in `list_filter`,
    /// ordering falls back to the admin default and pages hold
    /// [`DEFAULT_PAGE_LIMIT`] rows unless `limit` says otherwise.
    pub fn into_filter(self, config: &AdminConfig) -> Result<ProjectFilter, CoreError> {
        let ordering = match self.o.as_deref() {
            Some(o) => ProjectOrdering::parse(o)?,
            None => config.ordering,
        };
        Ok(ProjectFilter {
            featured: admin_filter(config, ProjectField::Featured, self.featured)?,
            search: self.q.filter(|q| !q.trim().is_empty()),
            ordering,
            limit: Some(clamp_limit(self.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT)),
            offset: self.offset,
        })
    }
}

fn admin_filter<T>(
    config: &AdminConfig,
    field: ProjectField,
    value: Option<T>,
) -> Result<Option<T>, CoreError> {
    match value {
        Some(_) if !config.is_filterable(field) => Err(CoreError::field(
            field.name(),
            "Filtering on this field is not allowed.",
        )),
        value => Ok(value),
    }
}

/// Read API list parameters (`?featured=&search=&ordering=&limit=&offset=`).
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub featured: Option<bool>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ProjectListParams {
    pub fn into_filter(self) -> Result<ProjectFilter, CoreError> {
        let ordering = self
            .ordering
            .as_deref()
            .map(ProjectOrdering::parse)
            .transpose()?
            .unwrap_or_default();
        Ok(ProjectFilter {
            featured: self.featured,
            search: self.search.filter(|s| !s.trim().is_empty()),
            ordering,
            limit: self.limit,
            offset: self.offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use folio_core::admin::PROJECT_ADMIN;

    use super::*;

    #[test]
    fn changelist_defaults_to_admin_ordering_and_page_size() {
        let filter = ChangelistParams::default()
            .into_filter(&PROJECT_ADMIN)
            .unwrap();
        assert_eq!(filter.ordering, PROJECT_ADMIN.ordering);
        assert_eq!(filter.limit, Some(DEFAULT_PAGE_LIMIT));
        assert!(filter.search.is_none());
    }

    #[test]
    fn changelist_applies_listed_filters() {
        let filter = ChangelistParams {
            featured: Some(false),
            ..Default::default()
        }
        .into_filter(&PROJECT_ADMIN)
        .unwrap();
        assert_eq!(filter.featured, Some(false));
    }

    #[test]
    fn changelist_rejects_filters_missing_from_list_filter() {
        let config = AdminConfig {
            list_filter: &[],
            ..PROJECT_ADMIN
        };
        let err = ChangelistParams {
            featured: Some(true),
            ..Default::default()
        }
        .into_filter(&config)
        .unwrap_err();
        assert_matches!(err, CoreError::Validation(ref errors) if errors[0].field == "featured");

        let filter = ChangelistParams::default().into_filter(&config).unwrap();
        assert_eq!(filter.featured, None);
    }

    #[test]
    fn blank_search_is_ignored() {
        let filter = ChangelistParams {
            q: Some("   ".into()),
            ..Default::default()
        }
        .into_filter(&PROJECT_ADMIN)
        .unwrap();
        assert!(filter.search.is_none());
    }

    #[test]
    fn unknown_ordering_is_a_field_error() {
        let err = ProjectListParams {
            ordering: Some("slug".into()),
            ..Default::default()
        }
        .into_filter()
        .unwrap_err();
        assert_matches!(err, CoreError::Validation(ref errors) if errors[0].field == "ordering");
    }

    #[test]
    fn read_ordering_parses_title_keys() {
        let filter = ProjectListParams {
            ordering: Some("-title".into()),
            featured: Some(true),
            ..Default::default()
        }
        .into_filter()
        .unwrap();
        assert_eq!(filter.ordering, ProjectOrdering::TitleDesc);
        assert_eq!(filter.featured, Some(true));
    }
}
