//! Integration tests for the demo fixtures.

use folio_db::models::project::{CreateProject, ProjectFilter};
use folio_db::repositories::ProjectRepo;
use folio_db::seed;

#[tokio::test]
async fn seeded_store_has_one_featured_project() {
    let pool = folio_db::create_memory_pool().await.unwrap();

    let outcomes = seed::apply(&pool, &seed::demo_projects()).await.unwrap();
    assert!(outcomes.iter().all(|o| o.created));

    let featured = ProjectRepo::list(
        &pool,
        &ProjectFilter {
            featured: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].slug, "rode-coffee");
}

#[tokio::test]
async fn reseeding_updates_instead_of_duplicating() {
    let pool = folio_db::create_memory_pool().await.unwrap();
    let fixtures = seed::demo_projects();

    seed::apply(&pool, &fixtures).await.unwrap();
    let before = ProjectRepo::find_by_slug(&pool, "scorefy")
        .await
        .unwrap()
        .unwrap();

    let outcomes = seed::apply(&pool, &fixtures).await.unwrap();
    let after = ProjectRepo::find_by_slug(&pool, "scorefy")
        .await
        .unwrap()
        .unwrap();

    assert!(outcomes.iter().all(|o| !o.created));
    assert_eq!(before, after);
    assert_eq!(
        ProjectRepo::count(&pool, &ProjectFilter::default())
            .await
            .unwrap(),
        2
    );
    assert!(seed::summary(&outcomes).ends_with(seed::CONFIRMATION));
}

#[tokio::test]
async fn failing_fixture_halts_but_keeps_earlier_rows() {
    let pool = folio_db::create_memory_pool().await.unwrap();
    let mut fixtures = seed::demo_projects();
    fixtures.insert(
        1,
        CreateProject {
            title: String::new(),
            slug: "broken".into(),
            ..Default::default()
        },
    );

    assert!(seed::apply(&pool, &fixtures).await.is_err());

    assert!(ProjectRepo::find_by_slug(&pool, "rode-coffee")
        .await
        .unwrap()
        .is_some());
    assert!(ProjectRepo::find_by_slug(&pool, "scorefy")
        .await
        .unwrap()
        .is_none());
}
