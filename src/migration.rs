//! Catalogue DDL: `author` and `book` tables plus the foreign-key index.
//! Every statement is idempotent (IF NOT EXISTS) so it runs on every startup.

use crate::error::StoreError;
use sqlx::PgPool;

const STATEMENTS: &[(&str, &str)] = &[
    (
        "author",
        r#"
        CREATE TABLE IF NOT EXISTS author (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            bio TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "book",
        r#"
        CREATE TABLE IF NOT EXISTS book (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            author_id INTEGER NOT NULL REFERENCES author (id) ON DELETE CASCADE,
            description TEXT,
            published_year INTEGER,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    ),
    (
        "book_author_id_idx",
        "CREATE INDEX IF NOT EXISTS book_author_id_idx ON book (author_id)",
    ),
];

/// Create the catalogue tables if they are missing. Order follows foreign-key dependencies.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), StoreError> {
    for (name, sql) in STATEMENTS {
        tracing::debug!(object = %name, "applying DDL");
        sqlx::query(sql).execute(pool).await?;
    }
    tracing::info!(count = STATEMENTS.len(), "migrations applied");
    Ok(())
}
