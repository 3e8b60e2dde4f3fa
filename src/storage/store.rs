use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::domain::Review;

use super::MIGRATION_001_INITIAL;

/// Key under which the review collection snapshot lives.
pub const REVIEWS_KEY: &str = "reviews";

/// Durable key-value store holding whole-collection snapshots.
/// The contract is "entire collection under one key": each save overwrites
/// the previous snapshot, there is no append log.
pub struct SnapshotStore {
    pool: SqlitePool,
}

impl SnapshotStore {
    /// Create a store over an existing SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database at the given URL.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(MIGRATION_001_INITIAL)
            .execute(&self.pool)
            .await
            .context("Failed to run migration 001")?;
        Ok(())
    }

    /// Initialize a new database (connect + migrate).
    pub async fn init(database_url: &str) -> Result<Self> {
        let store = Self::connect(database_url).await?;
        store.migrate().await?;
        Ok(store)
    }

    /// Load the persisted review collection.
    /// Returns `None` when no snapshot has ever been written, which is
    /// distinct from a persisted empty collection.
    pub async fn load_reviews(&self) -> Result<Option<Vec<Review>>> {
        let row = sqlx::query("SELECT value FROM snapshots WHERE key = ?")
            .bind(REVIEWS_KEY)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to read reviews snapshot")?;

        match row {
            Some(row) => {
                let json: String = row.get("value");
                let reviews: Vec<Review> =
                    serde_json::from_str(&json).context("Invalid reviews snapshot")?;
                debug!(count = reviews.len(), "loaded reviews snapshot");
                Ok(Some(reviews))
            }
            None => Ok(None),
        }
    }

    /// Overwrite the snapshot with the full collection.
    pub async fn save_reviews(&self, reviews: &[Review]) -> Result<()> {
        let json = serde_json::to_string(reviews).context("Failed to serialize reviews")?;

        sqlx::query(
            r#"
            INSERT INTO snapshots (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(REVIEWS_KEY)
        .bind(&json)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .context("Failed to write reviews snapshot")?;

        debug!(count = reviews.len(), "wrote reviews snapshot");
        Ok(())
    }
}
