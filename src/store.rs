//! Persistence for the `books` table.
//!
//! Every operation is a single statement against the row keyed by `isbn`.
//! There is no cache: each call hits the pool.

use sqlx::SqlitePool;

use crate::types::{Book, BookFields};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("No book with isbn of {0}")]
    NotFound(String),

    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Handle to the book table. Cheap to clone; clones share the pool.
#[derive(Clone, Debug)]
pub struct BookStore {
    pool: SqlitePool,
}

const COLUMNS: &str = "isbn, amazon_url, author, language, pages, publisher, title, year";

impl BookStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All books, ordered by title (byte-wise, `T` before `W`).
    pub async fn list_all(&self) -> StoreResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!("SELECT {COLUMNS} FROM books ORDER BY title"))
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    pub async fn get(&self, isbn: &str) -> StoreResult<Book> {
        sqlx::query_as::<_, Book>(&format!("SELECT {COLUMNS} FROM books WHERE isbn = ?1"))
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(isbn.to_string()))
    }

    /// Inserts a new row. A duplicate `isbn` surfaces as a database error from
    /// the primary key constraint.
    pub async fn create(&self, book: &Book) -> StoreResult<Book> {
        let created = sqlx::query_as::<_, Book>(&format!(
            r#"INSERT INTO books ({COLUMNS})
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
               RETURNING {COLUMNS}"#
        ))
        .bind(&book.isbn)
        .bind(&book.amazon_url)
        .bind(&book.author)
        .bind(&book.language)
        .bind(book.pages)
        .bind(&book.publisher)
        .bind(&book.title)
        .bind(book.year)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    /// Replaces every non-key column of the row matching `isbn`.
    pub async fn update(&self, isbn: &str, fields: &BookFields) -> StoreResult<Book> {
        sqlx::query_as::<_, Book>(&format!(
            r#"UPDATE books
               SET amazon_url = ?1, author = ?2, language = ?3, pages = ?4,
                   publisher = ?5, title = ?6, year = ?7
               WHERE isbn = ?8
               RETURNING {COLUMNS}"#
        ))
        .bind(&fields.amazon_url)
        .bind(&fields.author)
        .bind(&fields.language)
        .bind(fields.pages)
        .bind(&fields.publisher)
        .bind(&fields.title)
        .bind(fields.year)
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(isbn.to_string()))
    }

    pub async fn remove(&self, isbn: &str) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE isbn = ?1")
            .bind(isbn)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(isbn.to_string()));
        }
        Ok(())
    }
}
