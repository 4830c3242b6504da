//! In-process store with the same observable semantics as the PostgreSQL one.

use super::Store;
use crate::error::StoreError;
use crate::model::{Author, AuthorInput, Book, BookInput};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    authors: BTreeMap<i32, Author>,
    books: BTreeMap<i32, Book>,
    last_author_id: i32,
    last_book_id: i32,
}

impl Tables {
    fn check_author_ref(&self, author_id: i32) -> Result<(), StoreError> {
        if self.authors.contains_key(&author_id) {
            Ok(())
        } else {
            Err(StoreError::Constraint(format!(
                "book.author_id {} references no author",
                author_id
            )))
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn list_authors(&self) -> Result<Vec<Author>, StoreError> {
        Ok(self.tables.read().await.authors.values().cloned().collect())
    }

    async fn find_author(&self, id: i32) -> Result<Option<Author>, StoreError> {
        Ok(self.tables.read().await.authors.get(&id).cloned())
    }

    async fn create_author(&self, input: &AuthorInput) -> Result<Author, StoreError> {
        let mut t = self.tables.write().await;
        t.last_author_id += 1;
        let now = Utc::now();
        let author = Author {
            id: t.last_author_id,
            name: input.name.clone(),
            bio: input.bio.clone(),
            created_at: now,
            updated_at: now,
        };
        t.authors.insert(author.id, author.clone());
        Ok(author)
    }

    async fn update_author(&self, id: i32, input: &AuthorInput) -> Result<Author, StoreError> {
        let mut t = self.tables.write().await;
        let author = t.authors.get_mut(&id).ok_or(StoreError::NotFound)?;
        author.name = input.name.clone();
        author.bio = input.bio.clone();
        author.updated_at = Utc::now();
        Ok(author.clone())
    }

    async fn delete_author(&self, id: i32) -> Result<(), StoreError> {
        let mut t = self.tables.write().await;
        t.authors.remove(&id).ok_or(StoreError::NotFound)?;
        t.books.retain(|_, b| b.author_id != id);
        Ok(())
    }

    async fn list_books(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.tables.read().await.books.values().cloned().collect())
    }

    async fn find_book(&self, id: i32) -> Result<Option<Book>, StoreError> {
        Ok(self.tables.read().await.books.get(&id).cloned())
    }

    async fn create_book(&self, input: &BookInput) -> Result<Book, StoreError> {
        let mut t = self.tables.write().await;
        t.check_author_ref(input.author_id)?;
        t.last_book_id += 1;
        let now = Utc::now();
        let book = Book {
            id: t.last_book_id,
            title: input.title.clone(),
            author_id: input.author_id,
            description: input.description.clone(),
            published_year: input.published_year,
            created_at: now,
            updated_at: now,
        };
        t.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update_book(&self, id: i32, input: &BookInput) -> Result<Book, StoreError> {
        let mut t = self.tables.write().await;
        if !t.books.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        t.check_author_ref(input.author_id)?;
        let book = t.books.get_mut(&id).ok_or(StoreError::NotFound)?;
        book.title = input.title.clone();
        book.author_id = input.author_id;
        book.description = input.description.clone();
        book.published_year = input.published_year;
        book.updated_at = Utc::now();
        Ok(book.clone())
    }

    async fn delete_book(&self, id: i32) -> Result<(), StoreError> {
        self.tables
            .write()
            .await
            .books
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
