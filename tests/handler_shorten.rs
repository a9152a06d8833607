mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use url_alias::application::services::AliasPolicy;
use url_alias::routes::app_router;

async fn server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool).await;
    TestServer::new(app_router(state)).unwrap()
}

#[sqlx::test]
async fn test_shorten_generated_alias(pool: PgPool) {
    let server = server(pool.clone()).await;

    let response = server
        .post("/url")
        .add_header("Authorization", common::TEST_AUTH_HEADER)
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let alias = json["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 6);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(common::count_mappings(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_configured_alias_length(pool: PgPool) {
    let policy = AliasPolicy {
        length: 12,
        generated_attempts: 1,
    };
    let state = common::create_test_state_with_policy(pool, policy).await;
    let server = TestServer::new(app_router(state)).unwrap();

    let response = server
        .post("/url")
        .add_header("Authorization", common::TEST_AUTH_HEADER)
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["alias"].as_str().unwrap().len(), 12);
}

#[sqlx::test]
async fn test_shorten_custom_alias(pool: PgPool) {
    let server = server(pool).await;

    let response = server
        .post("/url")
        .add_header("Authorization", common::TEST_AUTH_HEADER)
        .json(&json!({ "url": "https://example.com", "alias": "mysite" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "alias": "mysite" }));
}

#[sqlx::test]
async fn test_shorten_empty_alias_is_generated(pool: PgPool) {
    let server = server(pool).await;

    let response = server
        .post("/url")
        .add_header("Authorization", common::TEST_AUTH_HEADER)
        .json(&json!({ "url": "https://example.com", "alias": "" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["alias"].as_str().unwrap().len(), 6);
}

#[sqlx::test]
async fn test_shorten_same_url_twice_gives_two_aliases(pool: PgPool) {
    let server = server(pool.clone()).await;

    let first = server
        .post("/url")
        .add_header("Authorization", common::TEST_AUTH_HEADER)
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/url")
        .add_header("Authorization", common::TEST_AUTH_HEADER)
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["alias"], second["alias"]);
    assert_eq!(common::count_mappings(&pool).await, 2);
}

#[sqlx::test]
async fn test_shorten_duplicate_alias(pool: PgPool) {
    let server = server(pool.clone()).await;

    server
        .post("/url")
        .add_header("Authorization", common::TEST_AUTH_HEADER)
        .json(&json!({ "url": "https://example.com", "alias": "mysite" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/url")
        .add_header("Authorization", common::TEST_AUTH_HEADER)
        .json(&json!({ "url": "https://other.com", "alias": "mysite" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["details"]["alias"], "mysite");

    let url: String = sqlx::query_scalar("SELECT url FROM url WHERE alias = 'mysite'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(url, "https://example.com");
}

#[sqlx::test]
async fn test_shorten_invalid_url(pool: PgPool) {
    let server = server(pool.clone()).await;

    let response = server
        .post("/url")
        .add_header("Authorization", common::TEST_AUTH_HEADER)
        .json(&json!({ "url": "not-a-url", "alias": "mysite" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["fields"]["url"].is_array());
    assert_eq!(common::count_mappings(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_url_with_control_characters(pool: PgPool) {
    let server = server(pool.clone()).await;

    for url in ["https://example.com/\n", "https://exa\tmple.com/a\u{1}"] {
        let response = server
            .post("/url")
            .add_header("Authorization", common::TEST_AUTH_HEADER)
            .json(&json!({ "url": url, "alias": "mysite" }))
            .await;

        response.assert_status_bad_request();
        let json = response.json::<serde_json::Value>();
        assert!(json["error"]["details"]["fields"]["url"].is_array());
    }

    assert_eq!(common::count_mappings(&pool).await, 0);
    server.get("/mysite").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_shorten_missing_url(pool: PgPool) {
    let server = server(pool).await;

    let response = server
        .post("/url")
        .add_header("Authorization", common::TEST_AUTH_HEADER)
        .json(&json!({ "alias": "mysite" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_shorten_malformed_body(pool: PgPool) {
    let server = server(pool).await;

    let response = server
        .post("/url")
        .add_header("Authorization", common::TEST_AUTH_HEADER)
        .text("{not json")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_shorten_requires_auth(pool: PgPool) {
    let server = server(pool.clone()).await;

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_unauthorized();
    let challenge = response.header("www-authenticate");
    assert!(challenge.to_str().unwrap().starts_with("Basic"));
    assert_eq!(common::count_mappings(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_wrong_password(pool: PgPool) {
    let server = server(pool).await;

    // admin:wrong
    let response = server
        .post("/url")
        .add_header("Authorization", "Basic YWRtaW46d3Jvbmc=")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_unauthorized();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "unauthorized");
}

#[sqlx::test]
async fn test_get_on_shorten_route_not_allowed(pool: PgPool) {
    let server = server(pool).await;

    let response = server.get("/url").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
