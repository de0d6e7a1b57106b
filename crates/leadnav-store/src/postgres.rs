//! PostgreSQL cookie store.
//!
//! Requires the `postgres` feature. The uniqueness invariant lives in
//! the schema (`user_id` is the primary key) and the upsert is a single
//! `INSERT … ON CONFLICT` statement, so concurrent saves for the same
//! user cannot produce two rows — the last write wins.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use leadnav_models::{SaveOutcome, StoredCookie, UserId};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StoreError;
use crate::traits::CookieStore;

/// A [`CookieStore`] backed by a PostgreSQL connection pool.
pub struct PostgresCookieStore {
    pool: PgPool,
}

impl PostgresCookieStore {
    /// Connect a pool to the given database.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the connection cannot be
    /// established.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        tracing::info!(max_connections, "PostgreSQL pool created");
        Ok(Self { pool })
    }

    /// Create the `linkedin_cookies` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CookieStore for PostgresCookieStore {
    async fn save(&self, user_id: &UserId, cookie: &str) -> Result<SaveOutcome, StoreError> {
        // NOW() is the transaction timestamp, so a freshly inserted row
        // carries identical created_at / updated_at — that equality is
        // how the RETURNING clause distinguishes create from replace.
        let row = sqlx::query(
            r#"
            INSERT INTO linkedin_cookies (user_id, cookie, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            ON CONFLICT (user_id) DO UPDATE SET
                cookie = EXCLUDED.cookie,
                updated_at = NOW()
            RETURNING created_at, updated_at
            "#,
        )
        .bind(user_id.as_str())
        .bind(cookie)
        .fetch_one(&self.pool)
        .await?;

        let created_at: DateTime<Utc> = row.get("created_at");
        let updated_at: DateTime<Utc> = row.get("updated_at");

        if created_at == updated_at {
            tracing::debug!(user = %user_id, "cookie record created");
            Ok(SaveOutcome::Created { created_at })
        } else {
            tracing::debug!(user = %user_id, "cookie record replaced");
            Ok(SaveOutcome::Replaced { updated_at })
        }
    }

    async fn get(&self, user_id: &UserId) -> Result<Option<StoredCookie>, StoreError> {
        let row = sqlx::query(
            "SELECT cookie, updated_at FROM linkedin_cookies WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| StoredCookie {
            cookie: row.get("cookie"),
            updated_at: row.get("updated_at"),
        }))
    }

    async fn delete(&self, user_id: &UserId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM linkedin_cookies WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn backend_name(&self) -> &'static str {
        "postgresql"
    }
}

/// Bootstrap SQL for the cookie table.
pub const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS linkedin_cookies (
    user_id    TEXT PRIMARY KEY,
    cookie     TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;
