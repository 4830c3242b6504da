//! Catalogue records as stored and as served over JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub description: Option<String>,
    pub published_year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated author payload. Writes replace every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInput {
    pub name: String,
    pub bio: Option<String>,
}

/// Validated book payload. `author_id` is not checked against existing authors here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInput {
    pub title: String,
    pub author_id: i32,
    pub description: Option<String>,
    pub published_year: Option<i32>,
}
