use std::collections::HashMap;
use std::sync::Arc;

use sqlx::{PgPool, Row};
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::models::{HistoryEntry, HistoryVersion, UserRecord};

/// Persistence seam for user records and their embedded history
///
/// All operations are scoped by email, the unique user handle the HTTP
/// surface exposes. History writes are compare-and-swap on the record's
/// revision counter: a stale revision fails with `Conflict` instead of
/// silently overwriting a concurrent update.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a new user; fails with `Conflict` if the email is taken
    async fn insert_user(&self, user: &UserRecord) -> AppResult<()>;

    /// Looks up a user by email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>>;

    /// Loads the user's history together with its revision counter
    async fn load_history(&self, email: &str) -> AppResult<Option<HistoryVersion>>;

    /// Replaces the user's history if the stored revision still matches
    ///
    /// Fails with `NotFound` for an unknown email and `Conflict` when the
    /// revision moved since `load_history`.
    async fn store_history(
        &self,
        email: &str,
        expected_rev: i64,
        entries: &[HistoryEntry],
    ) -> AppResult<()>;
}

const DUPLICATE_USER: &str = "User already exists";
const STALE_HISTORY: &str = "History was modified concurrently";

/// Postgres-backed store
///
/// One row per user; the history lives in a JSONB column so every history
/// mutation is a single-row update and no partial-entry state is observable.
#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn encode_history(entries: &[HistoryEntry]) -> AppResult<serde_json::Value> {
        serde_json::to_value(entries)
            .map_err(|e| AppError::Internal(format!("History serialization error: {}", e)))
    }

    fn decode_history(value: serde_json::Value) -> AppResult<Vec<HistoryEntry>> {
        serde_json::from_value(value)
            .map_err(|e| AppError::Internal(format!("History deserialization error: {}", e)))
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    async fn insert_user(&self, user: &UserRecord) -> AppResult<()> {
        let history = Self::encode_history(&user.history)?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, history, history_rev, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(history)
        .bind(user.history_rev)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(DUPLICATE_USER.to_string()));
        }

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, history, history_rev, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let history = Self::decode_history(row.try_get("history")?)?;

        Ok(Some(UserRecord {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            history,
            history_rev: row.try_get("history_rev")?,
            created_at: row.try_get("created_at")?,
        }))
    }

    async fn load_history(&self, email: &str) -> AppResult<Option<HistoryVersion>> {
        let row = sqlx::query("SELECT history, history_rev FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(HistoryVersion {
            rev: row.try_get("history_rev")?,
            entries: Self::decode_history(row.try_get("history")?)?,
        }))
    }

    async fn store_history(
        &self,
        email: &str,
        expected_rev: i64,
        entries: &[HistoryEntry],
    ) -> AppResult<()> {
        let history = Self::encode_history(entries)?;

        let result = sqlx::query(
            r#"
            UPDATE users
            SET history = $1, history_rev = history_rev + 1, updated_at = now()
            WHERE email = $2 AND history_rev = $3
            "#,
        )
        .bind(history)
        .bind(email)
        .bind(expected_rev)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            // Distinguish a vanished user from a concurrent writer
            let exists: bool =
                sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
                    .bind(email)
                    .fetch_one(&self.pool)
                    .await?;

            return Err(if exists {
                AppError::Conflict(STALE_HISTORY.to_string())
            } else {
                AppError::NotFound("User not found".to_string())
            });
        }

        Ok(())
    }
}

/// In-memory store for tests and local development
///
/// Keeps the same revision compare-and-swap contract as the Postgres store
/// so ledger behavior can be exercised without a database.
#[derive(Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, UserRecord>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for MemoryUserStore {
    async fn insert_user(&self, user: &UserRecord) -> AppResult<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(AppError::Conflict(DUPLICATE_USER.to_string()));
        }
        users.insert(user.email.clone(), user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn load_history(&self, email: &str) -> AppResult<Option<HistoryVersion>> {
        let users = self.users.read().await;
        Ok(users.get(email).map(|user| HistoryVersion {
            rev: user.history_rev,
            entries: user.history.clone(),
        }))
    }

    async fn store_history(
        &self,
        email: &str,
        expected_rev: i64,
        entries: &[HistoryEntry],
    ) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(email)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if user.history_rev != expected_rev {
            return Err(AppError::Conflict(STALE_HISTORY.to_string()));
        }

        user.history = entries.to_vec();
        user.history_rev += 1;
        Ok(())
    }
}
