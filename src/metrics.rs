//! Counter rows persisted in the `metrics` table, next to the domain data.
//!
//! Every operation here takes an already-open connection and returns an
//! explicit `Result`. Whether a failed counter update aborts the request is
//! the caller's decision; the handlers log and move on, so telemetry never
//! blocks the primary operation.

use chrono::Local;
use sqlx::SqliteConnection;
use thiserror::Error;

pub const DB_CONNECTION_COUNT: &str = "db_connection_count";
pub const POST_COUNT: &str = "post_count";

/// Errors from counter reads and writes.
#[derive(Debug, Error)]
pub enum MetricError {
    /// The named metric row does not exist. Metric rows are seeded at
    /// startup and never created on the request path, so this is not
    /// recovered from here.
    #[error("metric \"{0}\" does not exist in the metrics table")]
    Missing(String),

    /// Database operation failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Read the current value of a named counter.
pub async fn read_counter(conn: &mut SqliteConnection, name: &str) -> Result<i64, MetricError> {
    let value: Option<i64> = sqlx::query_scalar("SELECT value FROM metrics WHERE name = ?")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;

    value.ok_or_else(|| MetricError::Missing(name.to_string()))
}

/// Increment the connection counter and return the new value.
///
/// Plain read-modify-write: the current value is read, incremented, and
/// written back together with the update timestamp. Two callers racing on
/// the same stale read lose one increment; the last write wins. The counter
/// is a usage gauge, not an exact ledger.
pub async fn increment_connection_counter(
    conn: &mut SqliteConnection,
) -> Result<i64, MetricError> {
    let current = read_counter(conn, DB_CONNECTION_COUNT).await?;
    let new_count = current + 1;

    sqlx::query("UPDATE metrics SET value = ?, last_updated = ? WHERE name = ?")
        .bind(new_count)
        .bind(Local::now())
        .bind(DB_CONNECTION_COUNT)
        .execute(&mut *conn)
        .await?;

    Ok(new_count)
}

/// Count the rows currently in the posts table.
pub async fn count_posts(conn: &mut SqliteConnection) -> Result<i64, MetricError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(&mut *conn)
        .await?;

    Ok(count)
}

/// Write a freshly computed post count into the post_count metric row.
///
/// The target row is pinned in the statement text itself; unlike the
/// connection counter update the name is not a bound parameter.
pub async fn store_post_count(
    conn: &mut SqliteConnection,
    count: i64,
) -> Result<(), MetricError> {
    sqlx::query("UPDATE metrics SET value = ?, last_updated = ? WHERE name = 'post_count'")
        .bind(count)
        .bind(Local::now())
        .execute(&mut *conn)
        .await?;

    Ok(())
}
