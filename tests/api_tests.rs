use axum_test::TestServer;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use reccom_api::api::{create_router, AppState};

async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    for table in ["ur_rec", "als_rec"] {
        sqlx::query(&format!(
            "CREATE TABLE {table} (name TEXT, links TEXT, scores TEXT)"
        ))
        .execute(&pool)
        .await
        .unwrap();
    }
    pool
}

async fn insert(pool: &SqlitePool, table: &str, name: &str, links: &str, scores: &str) {
    sqlx::query(&format!(
        "INSERT INTO {table} (name, links, scores) VALUES (?, ?, ?)"
    ))
    .bind(name)
    .bind(links)
    .bind(scores)
    .execute(pool)
    .await
    .unwrap();
}

fn create_test_server(pool: SqlitePool) -> TestServer {
    let app = create_router(AppState::new(pool));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(test_pool().await);
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_static_pages() {
    let server = create_test_server(test_pool().await);
    server.get("/").await.assert_status_ok();
    server.get("/about").await.assert_status_ok();
}

#[tokio::test]
async fn test_compute_ur_returns_stored_recommendations() {
    let pool = test_pool().await;
    insert(
        &pool,
        "ur_rec",
        "alice",
        r#"{"links":["repo/a","repo/b"]}"#,
        r#"{"scores":[0.9,0.4]}"#,
    )
    .await;

    let server = create_test_server(pool);
    let response = server
        .get("/compute_ur")
        .add_query_param("userInput", "alice")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({"links": ["repo/a", "repo/b"], "scores": [0.9, 0.4]}));
}

#[tokio::test]
async fn test_empty_links_payload_yields_sentinel() {
    let pool = test_pool().await;
    insert(&pool, "ur_rec", "alice", "{}", "{}").await;

    let server = create_test_server(pool);
    let response = server
        .get("/compute_ur")
        .add_query_param("userInput", "alice")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({"links": ["no_result"], "scores": ["no_score"]}));
}

#[tokio::test]
async fn test_unknown_user_yields_empty_object() {
    let server = create_test_server(test_pool().await);
    let response = server
        .get("/compute_ur")
        .add_query_param("userInput", "nobody")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    // Distinct from the sentinel no-result object.
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_missing_user_input_yields_empty_object() {
    let pool = test_pool().await;
    insert(&pool, "ur_rec", "alice", r#"{"links":["x"]}"#, r#"{"scores":[1.0]}"#).await;

    let server = create_test_server(pool);
    let response = server.get("/compute_ur").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_strategies_do_not_cross_contaminate() {
    let pool = test_pool().await;
    insert(&pool, "ur_rec", "alice", r#"{"links":["ur/a"]}"#, r#"{"scores":[1.0]}"#).await;
    insert(&pool, "als_rec", "alice", r#"{"links":["als/a"]}"#, r#"{"scores":[2.0]}"#).await;

    let server = create_test_server(pool);

    let ur: Value = server
        .get("/compute_ur")
        .add_query_param("userInput", "alice")
        .await
        .json();
    let als: Value = server
        .get("/compute_als")
        .add_query_param("userInput", "alice")
        .await
        .json();

    assert_eq!(ur, json!({"links": ["ur/a"], "scores": [1.0]}));
    assert_eq!(als, json!({"links": ["als/a"], "scores": [2.0]}));
}

#[tokio::test]
async fn test_compute_als_reads_its_own_table() {
    let pool = test_pool().await;
    insert(&pool, "als_rec", "bob", "{}", "{}").await;

    let server = create_test_server(pool);

    let als: Value = server
        .get("/compute_als")
        .add_query_param("userInput", "bob")
        .await
        .json();
    let ur: Value = server
        .get("/compute_ur")
        .add_query_param("userInput", "bob")
        .await
        .json();

    assert_eq!(als, json!({"links": ["no_result"], "scores": ["no_score"]}));
    assert_eq!(ur, json!({}));
}

#[tokio::test]
async fn test_malformed_stored_payload_is_a_server_error() {
    let pool = test_pool().await;
    insert(&pool, "ur_rec", "alice", "not json", "{}").await;

    let server = create_test_server(pool);
    let response = server
        .get("/compute_ur")
        .add_query_param("userInput", "alice")
        .await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body.get("error").is_some());
}
