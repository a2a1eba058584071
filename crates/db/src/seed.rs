//! Demo fixtures for a fresh portfolio database.
//!
//! Fixtures are applied through [`ProjectRepo::upsert_by_slug`], so running
//! the seed twice leaves one row per slug. The batch is not transactional:
//! a failure stops the run and keeps the rows already written.

use crate::error::DbError;
use crate::models::project::CreateProject;
use crate::repositories::ProjectRepo;
use crate::DbPool;

/// Printed once every fixture has been applied.
pub const CONFIRMATION: &str = "OK: fixtures";

/// What happened to one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOutcome {
    pub slug: String,
    pub created: bool,
}

/// The literal demo project list.
pub fn demo_projects() -> Vec<CreateProject> {
    vec![
        CreateProject {
            title: "Rode Coffee".into(),
            slug: "rode-coffee".into(),
            description: "Marque café premium.".into(),
            url: "https://example.com".into(),
            image: None,
            tags: "coffee,brand".into(),
            featured: true,
        },
        CreateProject {
            title: "Scorefy".into(),
            slug: "scorefy".into(),
            description: "SaaS réputation financière.".into(),
            url: "https://example.com".into(),
            image: None,
            tags: "saas,finance".into(),
            featured: false,
        },
    ]
}

/// Upsert each fixture in order, stopping at the first failure.
pub async fn apply(pool: &DbPool, fixtures: &[CreateProject]) -> Result<Vec<SeedOutcome>, DbError> {
    let mut outcomes = Vec::with_capacity(fixtures.len());
    for fixture in fixtures {
        let (project, created) = ProjectRepo::upsert_by_slug(pool, fixture).await?;
        tracing::info!(slug = %project.slug, created, "Fixture applied");
        outcomes.push(SeedOutcome {
            slug: project.slug,
            created,
        });
    }
    Ok(outcomes)
}

/// Human-readable summary ending with [`CONFIRMATION`].
pub fn summary(outcomes: &[SeedOutcome]) -> String {
    let mut lines: Vec<String> = outcomes
        .iter()
        .map(|o| {
            let action = if o.created { "created" } else { "updated" };
            format!("{action} {}", o.slug)
        })
        .collect();
    lines.push(CONFIRMATION.to_string());
    lines.join("\n")
}
