//! Integration tests for the read-only `/api/projects/` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use folio_core::project::SERIALIZED_FIELDS;
use folio_db::repositories::ProjectRepo;
use folio_db::seed;

#[tokio::test]
async fn list_returns_bare_array_newest_first() {
    let pool = common::test_pool().await;
    ProjectRepo::create(&pool, &common::project("First", "first"))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &common::project("Second", "second"))
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let response = get(app, "/api/projects/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["slug"], "second");
    assert_eq!(items[1]["slug"], "first");
    assert_eq!(
        items[0].as_object().unwrap().len(),
        SERIALIZED_FIELDS.len()
    );
}

#[tokio::test]
async fn unpaginated_list_returns_every_project() {
    let pool = common::test_pool().await;
    for i in 0..120 {
        let slug = format!("p{i}");
        ProjectRepo::create(&pool, &common::project(&slug, &slug))
            .await
            .unwrap();
    }
    let app = common::build_test_app(pool);

    let json = body_json(get(app.clone(), "/api/projects/").await).await;
    assert_eq!(json.as_array().unwrap().len(), 120);

    let json = body_json(get(app, "/api/projects/?limit=10&offset=5").await).await;
    assert_eq!(json.as_array().unwrap().len(), 10);
    assert_eq!(json[0]["slug"], "p114");
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let app = common::build_test_app(common::test_pool().await);

    let json = body_json(get(app, "/api/projects/").await).await;
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn seeded_featured_filter_returns_rode_coffee_only() {
    let pool = common::test_pool().await;
    seed::apply(&pool, &seed::demo_projects()).await.unwrap();
    let app = common::build_test_app(pool);

    let json = body_json(get(app.clone(), "/api/projects/?featured=true").await).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["slug"], "rode-coffee");
    assert_eq!(items[0]["description"], "Marque café premium.");
    assert_eq!(items[0]["tags"], "coffee,brand");

    let json = body_json(get(app, "/api/projects/?featured=false").await).await;
    assert_eq!(json[0]["slug"], "scorefy");
}

#[tokio::test]
async fn list_supports_search_and_ordering() {
    let pool = common::test_pool().await;
    seed::apply(&pool, &seed::demo_projects()).await.unwrap();
    let app = common::build_test_app(pool);

    let json = body_json(get(app.clone(), "/api/projects/?search=finance").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["slug"], "scorefy");

    let json = body_json(get(app.clone(), "/api/projects/?ordering=-title").await).await;
    assert_eq!(json[0]["slug"], "scorefy");
    assert_eq!(json[1]["slug"], "rode-coffee");

    let response = get(app, "/api/projects/?ordering=bogus").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn detail_by_slug_or_404() {
    let pool = common::test_pool().await;
    seed::apply(&pool, &seed::demo_projects()).await.unwrap();
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/projects/scorefy/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Scorefy");
    assert_eq!(json["url"], "https://example.com");
    assert_eq!(json["image"], serde_json::Value::Null);

    let response = get(app, "/api/projects/missing/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
