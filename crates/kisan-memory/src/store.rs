//! SQLite-backed preference store.

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use kisan_core::{config::MemoryConfig, error::KisanError, shellexpand, traits::PreferenceStore};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

/// Persistent preference store backed by SQLite.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (or create) the store, running migrations on first use.
    pub async fn new(config: &MemoryConfig) -> Result<Self, KisanError> {
        let db_path = shellexpand(&config.db_path);

        // Ensure parent directory exists.
        if let Some(parent) = std::path::Path::new(&db_path).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| KisanError::Store(format!("invalid db path: {e}")))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(2)
            .connect_with(opts)
            .await
            .map_err(|e| KisanError::Store(format!("failed to connect to sqlite: {e}")))?;

        Self::run_migrations(&pool).await?;

        info!("Preference store initialized at {db_path}");

        Ok(Self { pool })
    }

    /// Run SQL migrations, tracking which have already been applied.
    async fn run_migrations(pool: &SqlitePool) -> Result<(), KisanError> {
        sqlx::raw_sql(
            "CREATE TABLE IF NOT EXISTS _migrations (
                name TEXT PRIMARY KEY,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            );",
        )
        .execute(pool)
        .await
        .map_err(|e| KisanError::Store(format!("failed to create migrations table: {e}")))?;

        let migrations: &[(&str, &str)] = &[(
            "001_preferences",
            include_str!("../migrations/001_preferences.sql"),
        )];

        for (name, sql) in migrations {
            let applied: Option<(String,)> =
                sqlx::query_as("SELECT name FROM _migrations WHERE name = ?")
                    .bind(name)
                    .fetch_optional(pool)
                    .await
                    .map_err(|e| {
                        KisanError::Store(format!("failed to check migration {name}: {e}"))
                    })?;

            if applied.is_some() {
                continue;
            }

            sqlx::raw_sql(sql)
                .execute(pool)
                .await
                .map_err(|e| KisanError::Store(format!("migration {name} failed: {e}")))?;

            sqlx::query("INSERT INTO _migrations (name) VALUES (?)")
                .bind(name)
                .execute(pool)
                .await
                .map_err(|e| {
                    KisanError::Store(format!("failed to record migration {name}: {e}"))
                })?;
            debug!("applied migration {name}");
        }
        Ok(())
    }

    /// Get a single preference by key.
    pub async fn get_preference(&self, key: &str) -> Result<Option<String>, KisanError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM preferences WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| KisanError::Store(format!("query failed: {e}")))?;

        Ok(row.map(|(v,)| v))
    }

    /// Store a preference (upsert by key).
    pub async fn store_preference(&self, key: &str, value: &str) -> Result<(), KisanError> {
        sqlx::query(
            "INSERT INTO preferences (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| KisanError::Store(format!("upsert preference failed: {e}")))?;

        Ok(())
    }

    /// Delete a preference. Returns `true` if a row was deleted.
    pub async fn delete_preference(&self, key: &str) -> Result<bool, KisanError> {
        let result = sqlx::query("DELETE FROM preferences WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| KisanError::Store(format!("delete failed: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// All stored preferences, ordered by key.
    pub async fn get_preferences(&self) -> Result<Vec<(String, String)>, KisanError> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT key, value FROM preferences ORDER BY key")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| KisanError::Store(format!("query failed: {e}")))?;

        Ok(rows)
    }
}

#[async_trait]
impl PreferenceStore for Store {
    async fn get(&self, key: &str) -> Result<Option<String>, KisanError> {
        self.get_preference(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KisanError> {
        self.store_preference(key, value).await
    }
}
