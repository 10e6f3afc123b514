use anyhow::{Context, Result};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection, SqliteConnection};

use crate::config::Config;
use crate::models::Post;

/// Storage accessor for the blog database.
///
/// Holds the connection options only; every logical operation opens its own
/// physical connection and closes it before returning. There is no pooling
/// and no connection reuse across requests.
#[derive(Clone)]
pub struct Storage {
    options: SqliteConnectOptions,
}

impl Storage {
    /// Create a storage accessor from configuration.
    ///
    /// The database file is created on first open if it does not exist yet.
    pub fn from_config(config: &Config) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(&config.database_path)
            .create_if_missing(true);

        Self { options }
    }

    /// Open a new connection to the database.
    ///
    /// One physical connection per call. Rows are addressable by column
    /// name, so callers can decode straight into their row types.
    pub async fn open(&self) -> Result<SqliteConnection> {
        self.options
            .connect()
            .await
            .context("Failed to open database connection")
    }

    /// Ensure the schema exists and the metric rows are seeded.
    ///
    /// Runs once at startup. Creating the tables and seeding are both
    /// idempotent; existing rows are never touched. Request handlers never
    /// call this: a metric row that goes missing at runtime stays missing.
    pub async fn ensure_schema(&self) -> Result<()> {
        tracing::info!("Starting schema provisioning checks...");

        let mut conn = self.open().await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS posts (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                content TEXT
            )",
        )
        .execute(&mut conn)
        .await
        .context("Failed to create posts table")?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS metrics (
                name TEXT PRIMARY KEY,
                value INTEGER,
                last_updated TIMESTAMP
            )",
        )
        .execute(&mut conn)
        .await
        .context("Failed to create metrics table")?;

        for name in [crate::metrics::DB_CONNECTION_COUNT, crate::metrics::POST_COUNT] {
            sqlx::query("INSERT OR IGNORE INTO metrics (name, value, last_updated) VALUES (?, 0, ?)")
                .bind(name)
                .bind(chrono::Local::now())
                .execute(&mut conn)
                .await
                .with_context(|| format!("Failed to seed metric row \"{name}\""))?;
        }

        let _ = conn.close().await;

        tracing::info!("Schema provisioning complete");
        Ok(())
    }

    /// Fetch a single post by id.
    ///
    /// # Returns
    /// * `Ok(Some(post))` - Post found and returned
    /// * `Ok(None)` - No row with that id; absent ids are not an error
    /// * `Err(_)` - Query failed
    pub async fn get_post(&self, id: i64) -> Result<Option<Post>> {
        let mut conn = self.open().await?;

        let post = sqlx::query_as::<_, Post>("SELECT id, title, content FROM posts WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut conn)
            .await
            .context("Failed to query post")?;

        let _ = conn.close().await;
        Ok(post)
    }

    /// List every post.
    ///
    /// No ORDER BY: rows come back in the store's natural scan order, which
    /// is insertion order for this table but not a contractual guarantee.
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let mut conn = self.open().await?;

        let posts = sqlx::query_as::<_, Post>("SELECT id, title, content FROM posts")
            .fetch_all(&mut conn)
            .await
            .context("Failed to list posts")?;

        let _ = conn.close().await;
        Ok(posts)
    }

    /// Insert a new post on a caller-supplied connection.
    ///
    /// The id is assigned by the store. The caller owns the connection and
    /// is responsible for closing it.
    pub async fn insert_post(
        &self,
        conn: &mut SqliteConnection,
        title: &str,
        content: &str,
    ) -> Result<()> {
        sqlx::query("INSERT INTO posts (title, content) VALUES (?, ?)")
            .bind(title)
            .bind(content)
            .execute(conn)
            .await
            .context("Failed to insert post")?;

        Ok(())
    }
}
