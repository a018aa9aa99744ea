//! SQLite implementation of the persistence layer.
//!
//! Row-level operations only: no joins, no multi-entity transactions, no
//! batches. Concurrent write serialization is delegated to SQLite itself.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::Basket;
use crate::error::ServiceError;

/// One basket row as fetched from SQLite.
type BasketRow = (i64, DateTime<Utc>, DateTime<Utc>, String, String, i64);

/// SQLite-backed persistence gateway using `sqlx::SqlitePool`.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the `baskets` and `users` tables if they do not exist.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on database failure.
    pub async fn ensure_schema(&self) -> Result<(), ServiceError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS baskets (\
                 id INTEGER PRIMARY KEY AUTOINCREMENT, \
                 created_at TEXT NOT NULL, \
                 updated_at TEXT NOT NULL, \
                 data TEXT NOT NULL, \
                 state TEXT NOT NULL, \
                 user_id INTEGER NOT NULL DEFAULT 0\
             )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| ServiceError::PersistenceError(e.to_string()))?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (\
                 id INTEGER PRIMARY KEY AUTOINCREMENT, \
                 username TEXT NOT NULL UNIQUE, \
                 password_hash TEXT NOT NULL\
             )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| ServiceError::PersistenceError(e.to_string()))?;

        Ok(())
    }

    /// Fetches all basket rows ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on database failure.
    pub async fn list_baskets(&self) -> Result<Vec<Basket>, ServiceError> {
        let rows = sqlx::query_as::<_, BasketRow>(
            "SELECT id, created_at, updated_at, data, state, user_id \
             FROM baskets ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ServiceError::PersistenceError(e.to_string()))?;

        Ok(rows.into_iter().map(row_to_basket).collect())
    }

    /// Fetches a single basket by primary key.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on database failure.
    pub async fn find_basket(&self, id: i64) -> Result<Option<Basket>, ServiceError> {
        let row = sqlx::query_as::<_, BasketRow>(
            "SELECT id, created_at, updated_at, data, state, user_id \
             FROM baskets WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ServiceError::PersistenceError(e.to_string()))?;

        Ok(row.map(row_to_basket))
    }

    /// Inserts a new basket row and returns it with the assigned ID.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on database failure.
    pub async fn insert_basket(
        &self,
        data: &str,
        state: &str,
        user_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Basket, ServiceError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO baskets (created_at, updated_at, data, state, user_id) \
             VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
        )
        .bind(now)
        .bind(now)
        .bind(data)
        .bind(state)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ServiceError::PersistenceError(e.to_string()))?;

        Ok(Basket {
            id,
            created_at: now,
            updated_at: now,
            data: data.to_string(),
            state: state.to_string(),
            user_id,
        })
    }

    /// Writes a whole basket row back by primary key.
    ///
    /// Returns `false` when no row with the basket's ID exists.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on database failure.
    pub async fn update_basket(&self, basket: &Basket) -> Result<bool, ServiceError> {
        let result = sqlx::query(
            "UPDATE baskets SET updated_at = ?1, data = ?2, state = ?3, user_id = ?4 \
             WHERE id = ?5",
        )
        .bind(basket.updated_at)
        .bind(&basket.data)
        .bind(&basket.state)
        .bind(basket.user_id)
        .bind(basket.id)
        .execute(&self.pool)
        .await
        .map_err(|e| ServiceError::PersistenceError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a basket row by primary key.
    ///
    /// Returns `false` when no row with the given ID exists.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError::PersistenceError`] on database failure.
    pub async fn delete_basket(&self, id: i64) -> Result<bool, ServiceError> {
        let result = sqlx::query("DELETE FROM baskets WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| ServiceError::PersistenceError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_basket(row: BasketRow) -> Basket {
    let (id, created_at, updated_at, data, state, user_id) = row;
    Basket {
        id,
        created_at,
        updated_at,
        data,
        state,
        user_id,
    }
}
