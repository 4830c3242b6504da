//! PostgreSQL store over a shared `PgPool`.

use super::Store;
use crate::error::StoreError;
use crate::model::{Author, AuthorInput, Book, BookInput};
use crate::settings::Settings;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const AUTHOR_COLUMNS: &str = "id, name, bio, created_at, updated_at";
const BOOK_COLUMNS: &str = "id, title, author_id, description, published_year, created_at, updated_at";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Open the pool described by `settings`, creating the database first when allowed.
pub async fn connect(settings: &Settings) -> Result<PgPool, StoreError> {
    if settings.create_database {
        ensure_database_exists(&settings.database_url).await?;
    }
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    Ok(pool)
}

/// Connect to the server's `postgres` database and create the target database if missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let (admin, db_name) = admin_target(database_url)?;
    let Some(db_name) = db_name.filter(|n| !n.is_empty() && n != "postgres") else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the same server with the `postgres` maintenance database, plus the target database name.
fn admin_target(database_url: &str) -> Result<(PgConnectOptions, Option<String>), StoreError> {
    let opts = PgConnectOptions::from_str(database_url)?;
    let db_name = opts.get_database().map(str::to_string);
    Ok((opts.database("postgres"), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_authors(&self) -> Result<Vec<Author>, StoreError> {
        let sql = format!("SELECT {} FROM author ORDER BY id", AUTHOR_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Author>(&sql).fetch_all(&self.pool).await?)
    }

    async fn find_author(&self, id: i32) -> Result<Option<Author>, StoreError> {
        let sql = format!("SELECT {} FROM author WHERE id = $1", AUTHOR_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Author>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create_author(&self, input: &AuthorInput) -> Result<Author, StoreError> {
        let sql = format!(
            "INSERT INTO author (name, bio) VALUES ($1, $2) RETURNING {}",
            AUTHOR_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Author>(&sql)
            .bind(&input.name)
            .bind(&input.bio)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update_author(&self, id: i32, input: &AuthorInput) -> Result<Author, StoreError> {
        let sql = format!(
            "UPDATE author SET name = $1, bio = $2, updated_at = NOW() WHERE id = $3 RETURNING {}",
            AUTHOR_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Author>(&sql)
            .bind(&input.name)
            .bind(&input.bio)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn delete_author(&self, id: i32) -> Result<(), StoreError> {
        tracing::debug!(id, "delete author");
        let done = sqlx::query("DELETE FROM author WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if done.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_books(&self) -> Result<Vec<Book>, StoreError> {
        let sql = format!("SELECT {} FROM book ORDER BY id", BOOK_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Book>(&sql).fetch_all(&self.pool).await?)
    }

    async fn find_book(&self, id: i32) -> Result<Option<Book>, StoreError> {
        let sql = format!("SELECT {} FROM book WHERE id = $1", BOOK_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create_book(&self, input: &BookInput) -> Result<Book, StoreError> {
        let sql = format!(
            "INSERT INTO book (title, author_id, description, published_year) VALUES ($1, $2, $3, $4) RETURNING {}",
            BOOK_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Book>(&sql)
            .bind(&input.title)
            .bind(input.author_id)
            .bind(&input.description)
            .bind(input.published_year)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update_book(&self, id: i32, input: &BookInput) -> Result<Book, StoreError> {
        let sql = format!(
            "UPDATE book SET title = $1, author_id = $2, description = $3, published_year = $4, updated_at = NOW() \
             WHERE id = $5 RETURNING {}",
            BOOK_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Book>(&sql)
            .bind(&input.title)
            .bind(input.author_id)
            .bind(&input.description)
            .bind(input.published_year)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn delete_book(&self, id: i32) -> Result<(), StoreError> {
        tracing::debug!(id, "delete book");
        let done = sqlx::query("DELETE FROM book WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if done.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
