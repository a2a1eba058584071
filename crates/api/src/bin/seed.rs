//! Load the demo fixtures into the configured database.
//!
//! Existing projects are matched by slug and overwritten, so running this
//! repeatedly leaves exactly one row per fixture.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_db=info,folio_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let pool = folio_db::create_pool(&folio_api::config::database_url())
        .await
        .context("Failed to connect to database")?;
    folio_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let outcomes = folio_db::seed::apply(&pool, &folio_db::seed::demo_projects())
        .await
        .context("Failed to load fixtures")?;

    println!("{}", folio_db::seed::summary(&outcomes));
    pool.close().await;
    Ok(())
}
