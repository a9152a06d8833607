#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use url_alias::api::middleware::auth::BasicCredentials;
use url_alias::application::services::AliasPolicy;
use url_alias::infrastructure::persistence::PgMappingStore;
use url_alias::state::AppState;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";
/// `Basic base64("admin:secret")`
pub const TEST_AUTH_HEADER: &str = "Basic YWRtaW46c2VjcmV0";

pub async fn setup_store(pool: PgPool) -> Arc<PgMappingStore> {
    let store = Arc::new(PgMappingStore::new(
        Arc::new(pool),
        Duration::from_secs(5),
    ));
    store.init_schema().await.unwrap();
    store
}

pub async fn create_test_mapping(pool: &PgPool, alias: &str, url: &str) {
    sqlx::query("INSERT INTO url (alias, url) VALUES ($1, $2)")
        .bind(alias)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_state(pool: PgPool) -> AppState {
    create_test_state_with_policy(pool, AliasPolicy::default()).await
}

pub async fn create_test_state_with_policy(pool: PgPool, policy: AliasPolicy) -> AppState {
    let store = setup_store(pool).await;
    AppState::new(
        store,
        policy,
        BasicCredentials::new(TEST_USER, TEST_PASSWORD),
    )
}
