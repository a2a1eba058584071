//! Project entity model and DTOs.

use folio_core::error::CoreError;
use folio_core::project::{
    normalize_image_reference, validate_image, validate_slug, validate_tags, validate_title,
    validate_url, FieldChecks, ProjectOrdering,
};
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Project {
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

/// DTO for creating a project, also the full field set used by upserts.
///
/// Every field deserializes with a default so a missing `title` is reported
/// by [`CreateProject::validate`] as a field error. `slug` may be left empty
/// by admin callers; the admin handler fills it from the title before the
/// store sees it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub featured: bool,
}

impl CreateProject {
    /// Trim single-line fields and place the image under the upload dir.
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.slug = self.slug.trim().to_string();
        self.url = self.url.trim().to_string();
        self.tags = self.tags.trim().to_string();
        self.image = self
            .image
            .as_deref()
            .filter(|i| !i.trim().is_empty())
            .map(normalize_image_reference);
        self
    }

    /// Check every field, reporting all failures together.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut checks = FieldChecks::new();
        checks
            .check(validate_title(&self.title))
            .check(validate_slug(&self.slug))
            .check(validate_url(&self.url))
            .check(validate_image(self.image.as_deref()))
            .check(validate_tags(&self.tags));
        checks.finish()
    }
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    /// Remove the stored image reference. Takes precedence over `image`.
    #[serde(default)]
    pub clear_image: bool,
    pub tags: Option<String>,
    pub featured: Option<bool>,
}

impl UpdateProject {
    pub fn normalized(mut self) -> Self {
        let trim = |v: Option<String>| v.map(|s| s.trim().to_string());
        self.title = trim(self.title);
        self.slug = trim(self.slug);
        self.url = trim(self.url);
        self.tags = trim(self.tags);
        self.image = self
            .image
            .as_deref()
            .filter(|i| !i.trim().is_empty())
            .map(normalize_image_reference);
        self
    }

    /// Check only the fields that are present.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut checks = FieldChecks::new();
        if let Some(title) = &self.title {
            checks.check(validate_title(title));
        }
        if let Some(slug) = &self.slug {
            checks.check(validate_slug(slug));
        }
        if let Some(url) = &self.url {
            checks.check(validate_url(url));
        }
        if !self.clear_image {
            checks.check(validate_image(self.image.as_deref()));
        }
        if let Some(tags) = &self.tags {
            checks.check(validate_tags(tags));
        }
        checks.finish()
    }
}

/// Listing criteria shared by the admin change list and the read API.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub featured: Option<bool>,
    /// Free text matched against the admin search fields.
    pub search: Option<String>,
    pub ordering: ProjectOrdering,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, slug: &str) -> CreateProject {
        CreateProject {
            title: title.to_string(),
            slug: slug.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn normalized_trims_and_prefixes_image() {
        let create = CreateProject {
            title: "  Rode Coffee ".into(),
            slug: " rode-coffee".into(),
            image: Some("cover.jpg".into()),
            ..Default::default()
        }
        .normalized();
        assert_eq!(create.title, "Rode Coffee");
        assert_eq!(create.slug, "rode-coffee");
        assert_eq!(create.image.as_deref(), Some("projects/cover.jpg"));
    }

    #[test]
    fn blank_image_becomes_none() {
        let create = CreateProject {
            image: Some("  ".into()),
            ..input("A", "a")
        }
        .normalized();
        assert_eq!(create.image, None);
    }

    #[test]
    fn create_validation_reports_every_bad_field() {
        let err = CreateProject {
            url: "not a url".into(),
            ..input("", "bad slug")
        }
        .validate()
        .unwrap_err();
        let fields: Vec<_> = err.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "slug", "url"]);
    }

    #[test]
    fn update_validation_skips_absent_fields() {
        assert!(UpdateProject::default().validate().is_ok());
        let err = UpdateProject {
            title: Some(" ".into()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field_errors()[0].field, "title");
    }

    #[test]
    fn create_deserializes_with_defaults() {
        let create: CreateProject =
            serde_json::from_str(r#"{"title": "Scorefy"}"#).unwrap();
        assert_eq!(create.slug, "");
        assert_eq!(create.image, None);
        assert!(!create.featured);
    }

    #[test]
    fn missing_title_fails_validation_not_deserialization() {
        let create: CreateProject = serde_json::from_str(r#"{"slug": "x"}"#).unwrap();
        let err = create.validate().unwrap_err();
        assert_eq!(err.field_errors()[0].field, "title");
        assert_eq!(err.field_errors()[0].message, "This field is required.");
    }
}
