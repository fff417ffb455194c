//! SQLite-backed post repository.
//!
//! Implements every repository port on one type over a single `posts` table.

use crate::config::DatabaseConfig;
use crate::domain::model::Post;
use crate::domain::ports::{PostDeleter, PostGetter, PostSaver, PostUpdater, PostsLister};
use crate::utils::error::RepositoryError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::str::FromStr;

const CREATE_POSTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    likes INTEGER NOT NULL DEFAULT 0,
    dislikes INTEGER NOT NULL DEFAULT 0
)"#;

#[derive(Debug, Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepositoryError> {
        Self::connect_url(&config.url, config.max_connections).await
    }

    /// Opens a pool on `database_url`, creating the database file and the
    /// `posts` table when missing.
    ///
    /// `sqlite::memory:` gives every pooled connection its own database, so
    /// use `max_connections = 1` with it.
    pub async fn connect_url(database_url: &str, max_connections: u32) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(map_sqlx_error)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;

        tracing::info!("Connected to posts database at {}", database_url);
        Self::from_pool(pool).await
    }

    /// Wraps an existing pool, creating the `posts` table if needed.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, RepositoryError> {
        sqlx::query(CREATE_POSTS_TABLE)
            .execute(&pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Io(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => RepositoryError::Connection(err.to_string()),
        other => RepositoryError::Query(other.to_string()),
    }
}

fn post_from_row(row: &SqliteRow) -> Result<Post, sqlx::Error> {
    Ok(Post {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        likes: row.try_get("likes")?,
        dislikes: row.try_get("dislikes")?,
    })
}

impl PostsLister for SqliteRepository {
    async fn list_posts(&self) -> Result<Vec<Post>, RepositoryError> {
        let rows = sqlx::query("SELECT id, title, content, likes, dislikes FROM posts ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter()
            .map(post_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlx_error)
    }
}

impl PostGetter for SqliteRepository {
    async fn get_post(&self, id: i64) -> Result<Post, RepositoryError> {
        let row = sqlx::query("SELECT id, title, content, likes, dislikes FROM posts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        match row {
            Some(row) => post_from_row(&row).map_err(map_sqlx_error),
            None => Err(RepositoryError::NotFound),
        }
    }
}

impl PostSaver for SqliteRepository {
    async fn save_post(&self, post: &Post) -> Result<i64, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO posts (title, content, likes, dislikes) VALUES (?, ?, ?, ?)",
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.likes)
        .bind(post.dislikes)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.last_insert_rowid())
    }
}

impl PostDeleter for SqliteRepository {
    async fn delete_post(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl PostUpdater for SqliteRepository {
    async fn update_post(&self, id: i64, post: &Post) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE posts SET title = ?, content = ?, likes = ?, dislikes = ? WHERE id = ?",
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.likes)
        .bind(post.dislikes)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
