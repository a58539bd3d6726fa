//! HTTP-level integration tests for themes and directions.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{body_json, get, put_json};
use rosseti_db::repositories::ThemeRepo;

async fn seed_direction(pool: &PgPool, name: &str) -> i64 {
    let row: (i64,) = sqlx::query_as("INSERT INTO directions (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

async fn seed_theme(pool: &PgPool, direction_id: i64, title: &str) -> i64 {
    let row: (i64,) =
        sqlx::query_as("INSERT INTO themes (direction_id, title) VALUES ($1, $2) RETURNING id")
            .bind(direction_id)
            .bind(title)
            .fetch_one(pool)
            .await
            .unwrap();
    row.0
}

/// Directions list is empty on a fresh database and reflects inserts.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_directions(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/directions").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    seed_direction(&pool, "metering").await;
    seed_direction(&pool, "safety").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/directions").await;
    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["metering", "safety"]);
}

/// The detailed listing groups themes under their directions.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_directions_detailed(pool: PgPool) {
    let metering = seed_direction(&pool, "metering").await;
    let safety = seed_direction(&pool, "safety").await;
    seed_theme(&pool, metering, "meter A").await;
    seed_theme(&pool, metering, "meter B").await;
    seed_theme(&pool, safety, "helmets").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/directions/detailed").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let detailed = json["data"].as_array().unwrap();
    assert_eq!(detailed.len(), 2);
    assert_eq!(detailed[0]["direction"]["name"], "metering");
    assert_eq!(detailed[0]["themes"].as_array().unwrap().len(), 2);
    assert_eq!(detailed[1]["direction"]["name"], "safety");
    assert_eq!(detailed[1]["themes"].as_array().unwrap().len(), 1);
}

/// Likes accumulate per theme.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_like_theme(pool: PgPool) {
    let direction = seed_direction(&pool, "likes").await;
    let theme_id = seed_theme(&pool, direction, "popular").await;

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = put_json(
            app,
            &format!("/api/v1/themes/{theme_id}/like"),
            serde_json::json!({}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let theme = ThemeRepo::find_by_id(&pool, theme_id)
        .await
        .unwrap()
        .expect("theme must exist");
    assert_eq!(theme.likes, 2);
}

/// Liking an unknown theme answers 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_like_unknown_theme(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/v1/themes/999/like", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The last-active listing is empty right after startup.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_last_active_starts_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/themes/last-active").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}
