//! Administrative interface metadata.
//!
//! The admin surface is driven entirely by [`AdminConfig`] and
//! [`ADMIN_ROUTES`]: which columns the change list shows, which fields can
//! be filtered or searched, which field is pre-filled from another, and
//! which (method, path) pairs map to which store operation.

use serde::Serialize;

use crate::project::{ProjectField, ProjectOrdering};

/// A field whose value is derived from other fields when left blank.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Prepopulated {
    pub field: ProjectField,
    pub from: &'static [ProjectField],
}

/// Declarative admin settings for one entity.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AdminConfig {
    pub entity: &'static str,
    /// Columns shown in the change list, in order.
    pub list_display: &'static [ProjectField],
    /// Fields accepted as exact-match change list filters.
    pub list_filter: &'static [ProjectField],
    /// Fields matched by the free-text `q` search.
    pub search_fields: &'static [ProjectField],
    pub prepopulated_fields: &'static [Prepopulated],
    /// Change list ordering when the caller does not pass one.
    pub ordering: ProjectOrdering,
}

impl AdminConfig {
    /// Source fields for a prepopulated field, if it has any.
    pub fn prepopulated_from(&self, field: ProjectField) -> Option<&'static [ProjectField]> {
        self.prepopulated_fields
            .iter()
            .find(|p| p.field == field)
            .map(|p| p.from)
    }

    pub fn is_filterable(&self, field: ProjectField) -> bool {
        self.list_filter.contains(&field)
    }
}

pub const PROJECT_ADMIN: AdminConfig = AdminConfig {
    entity: crate::project::ENTITY,
    list_display: &[
        ProjectField::Title,
        ProjectField::Featured,
        ProjectField::CreatedAt,
    ],
    list_filter: &[ProjectField::Featured],
    search_fields: &[ProjectField::Title, ProjectField::Tags],
    prepopulated_fields: &[Prepopulated {
        field: ProjectField::Slug,
        from: &[ProjectField::Title],
    }],
    ordering: ProjectOrdering::Newest,
};

// ---------------------------------------------------------------------------
// Route table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RouteMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Store operation reached through an admin route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminOperation {
    /// Filtered, searched listing projected to `list_display`.
    Changelist,
    /// Create, with prepopulated fields filled in.
    Add,
    /// The [`AdminConfig`] itself.
    Metadata,
    /// Full record by id.
    ChangeForm,
    /// Partial update by id.
    Change,
    /// Hard delete by id.
    Delete,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AdminRoute {
    pub method: RouteMethod,
    /// Path relative to [`ADMIN_PROJECTS_PATH`].
    pub path: &'static str,
    pub operation: AdminOperation,
}

/// Mount point of the project admin routes.
pub const ADMIN_PROJECTS_PATH: &str = "/admin/projects";

pub const ADMIN_ROUTES: &[AdminRoute] = &[
    AdminRoute {
        method: RouteMethod::Get,
        path: "/",
        operation: AdminOperation::Changelist,
    },
    AdminRoute {
        method: RouteMethod::Post,
        path: "/",
        operation: AdminOperation::Add,
    },
    AdminRoute {
        method: RouteMethod::Get,
        path: "/meta",
        operation: AdminOperation::Metadata,
    },
    AdminRoute {
        method: RouteMethod::Get,
        path: "/{id}",
        operation: AdminOperation::ChangeForm,
    },
    AdminRoute {
        method: RouteMethod::Put,
        path: "/{id}",
        operation: AdminOperation::Change,
    },
    AdminRoute {
        method: RouteMethod::Patch,
        path: "/{id}",
        operation: AdminOperation::Change,
    },
    AdminRoute {
        method: RouteMethod::Delete,
        path: "/{id}",
        operation: AdminOperation::Delete,
    },
];

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Split a change list query into search terms.
///
/// Terms are separated by whitespace; a double-quoted run is kept as one
/// term. Every returned term must match at least one search field.
pub fn search_terms(query: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for c in query.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                if !quoted && !current.is_empty() {
                    terms.push(std::mem::take(&mut current));
                }
            }
            c if c.is_whitespace() && !quoted => {
                if !current.is_empty() {
                    terms.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.trim().is_empty() {
        terms.push(current);
    }
    terms
}
