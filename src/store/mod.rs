//! Persistence seam for authors and books.
//!
//! Handlers only see `dyn Store`. [`PgStore`] is the production backend; [`MemoryStore`]
//! keeps the same observable behavior (foreign key on `author_id`, cascade on author delete)
//! without a database.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{connect, ensure_database_exists, PgStore};

use crate::error::StoreError;
use crate::model::{Author, AuthorInput, Book, BookInput};
use async_trait::async_trait;

#[async_trait]
pub trait Store: Send + Sync {
    /// Trivial round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn list_authors(&self) -> Result<Vec<Author>, StoreError>;
    async fn find_author(&self, id: i32) -> Result<Option<Author>, StoreError>;
    async fn create_author(&self, input: &AuthorInput) -> Result<Author, StoreError>;
    /// Replaces every field. `StoreError::NotFound` when no row has `id`.
    async fn update_author(&self, id: i32, input: &AuthorInput) -> Result<Author, StoreError>;
    /// `StoreError::NotFound` when no row has `id`. Dependent books are removed with the author.
    async fn delete_author(&self, id: i32) -> Result<(), StoreError>;

    async fn list_books(&self) -> Result<Vec<Book>, StoreError>;
    async fn find_book(&self, id: i32) -> Result<Option<Book>, StoreError>;
    /// `StoreError::Constraint` when `author_id` references no author.
    async fn create_book(&self, input: &BookInput) -> Result<Book, StoreError>;
    async fn update_book(&self, id: i32, input: &BookInput) -> Result<Book, StoreError>;
    async fn delete_book(&self, id: i32) -> Result<(), StoreError>;

    /// Release underlying connections. Called once on shutdown.
    async fn close(&self) {}
}
