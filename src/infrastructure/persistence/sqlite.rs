//! SQLite connection pool setup and schema management.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Schema for the `urls` table. Safe to run on every startup.
const CREATE_URLS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS urls (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    original_url TEXT NOT NULL,
    short_code TEXT NOT NULL UNIQUE,
    created_at DATETIME NOT NULL
)
"#;

/// Opens a connection pool to the database file at `path`, creating the file
/// if it does not exist.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or no connection can be
/// established within `acquire_timeout`.
pub async fn connect(
    path: &Path,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_with(options)
        .await
}

/// Opens a private in-memory database.
///
/// The pool holds exactly one connection that is never recycled, since an
/// in-memory database lives only as long as its connection.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Creates the `urls` table and its unique constraint if absent.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_URLS_TABLE).execute(pool).await?;
    Ok(())
}

/// Runs a trivial query to verify the database answers.
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let pool = connect_in_memory().await.unwrap();

        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'urls'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();

        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_ping_in_memory() {
        let pool = connect_in_memory().await.unwrap();
        assert!(ping(&pool).await.is_ok());
    }

    #[tokio::test]
    async fn test_ping_fails_after_close() {
        let pool = connect_in_memory().await.unwrap();
        pool.close().await;
        assert!(ping(&pool).await.is_err());
    }
}
