//! PostgreSQL implementation of the mapping store.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{MappingStore, StoreError};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS url (
        id BIGSERIAL PRIMARY KEY,
        alias TEXT NOT NULL UNIQUE,
        url TEXT NOT NULL
    )
"#;

const CREATE_ALIAS_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_alias ON url(alias)";

/// PostgreSQL store for alias → URL mappings.
///
/// Queries are checked at runtime so the crate builds without a live
/// database. Every operation runs under `timeout`; an expired operation is
/// dropped and reported as [`StoreError::Timeout`].
pub struct PgMappingStore {
    pool: Arc<PgPool>,
    timeout: Duration,
}

impl PgMappingStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        self.pool.as_ref()
    }

    /// Creates the `url` table and the alias index if they are missing.
    ///
    /// Idempotent: safe to call on every startup against an initialized
    /// database.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        const OP: &str = "store.postgres.init_schema";

        self.run(OP, async {
            let mut tx = self.pool.begin().await?;
            sqlx::query(CREATE_TABLE).execute(&mut *tx).await?;
            sqlx::query(CREATE_ALIAS_INDEX).execute(&mut *tx).await?;
            tx.commit().await
        })
        .await
    }

    /// Checks connectivity with a trivial round trip.
    pub async fn ping(&self) -> Result<(), StoreError> {
        const OP: &str = "store.postgres.ping";

        self.run(OP, async {
            sqlx::query("SELECT 1")
                .execute(self.pool.as_ref())
                .await
                .map(|_| ())
        })
        .await
    }

    async fn run<T, F>(&self, op: &'static str, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result.map_err(|e| StoreError::backend(op, e)),
            Err(_) => Err(StoreError::Timeout {
                op,
                timeout: self.timeout,
            }),
        }
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

#[async_trait]
impl MappingStore for PgMappingStore {
    async fn put(&self, alias: &str, url: &str) -> Result<UrlMapping, StoreError> {
        const OP: &str = "store.postgres.put";

        let insert = sqlx::query_scalar::<_, i64>(
            "INSERT INTO url (alias, url) VALUES ($1, $2) RETURNING id",
        )
        .bind(alias)
        .bind(url)
        .fetch_one(self.pool.as_ref());

        match tokio::time::timeout(self.timeout, insert).await {
            Ok(Ok(id)) => Ok(UrlMapping::new(id, alias, url)),
            Ok(Err(e)) if is_unique_violation(&e) => Err(StoreError::AliasConflict {
                alias: alias.to_string(),
            }),
            Ok(Err(e)) => Err(StoreError::backend(OP, e)),
            Err(_) => Err(StoreError::Timeout {
                op: OP,
                timeout: self.timeout,
            }),
        }
    }

    async fn get(&self, alias: &str) -> Result<Option<String>, StoreError> {
        const OP: &str = "store.postgres.get";

        self.run(
            OP,
            sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = $1")
                .bind(alias)
                .fetch_optional(self.pool.as_ref()),
        )
        .await
    }
}
