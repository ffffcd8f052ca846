//! Books repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, NewBook},
};

const BOOK_COLUMNS: &str =
    "id, title, description, author_id, genre_id, published, series, series_number, edition";

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create a new book with a store-generated id.
    /// Foreign-key failures on author_id/genre_id surface as conflicts.
    pub async fn create(&self, data: &NewBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(&format!(
            "INSERT INTO books (title, description, author_id, genre_id, published, series, series_number, edition) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {}",
            BOOK_COLUMNS
        ))
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.author_id)
        .bind(&data.genre_id)
        .bind(data.published)
        .bind(&data.series)
        .bind(data.series_number)
        .bind(&data.edition)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an existing book addressed by id
    pub async fn update(&self, id: &str, data: &NewBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(&format!(
            "UPDATE books SET title = $1, description = $2, author_id = $3, genre_id = $4, \
             published = $5, series = $6, series_number = $7, edition = $8 \
             WHERE id = $9 RETURNING {}",
            BOOK_COLUMNS
        ))
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.author_id)
        .bind(&data.genre_id)
        .bind(data.published)
        .bind(&data.series)
        .bind(data.series_number)
        .bind(&data.edition)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Insert-or-update keyed by an optional id
    pub async fn upsert(&self, id: Option<&str>, data: &NewBook) -> AppResult<Book> {
        match id {
            None => self.create(data).await,
            Some(id) => {
                let row = sqlx::query_as::<_, Book>(&format!(
                    "INSERT INTO books (id, title, description, author_id, genre_id, published, series, series_number, edition) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
                     ON CONFLICT (id) DO UPDATE SET title = $2, description = $3, author_id = $4, \
                     genre_id = $5, published = $6, series = $7, series_number = $8, edition = $9 \
                     RETURNING {}",
                    BOOK_COLUMNS
                ))
                .bind(id)
                .bind(&data.title)
                .bind(&data.description)
                .bind(&data.author_id)
                .bind(&data.genre_id)
                .bind(data.published)
                .bind(&data.series)
                .bind(data.series_number)
                .bind(&data.edition)
                .fetch_one(&self.pool)
                .await?;
                Ok(row)
            }
        }
    }

    /// Get book by id
    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE id = $1",
            BOOK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Delete book by id, returning the deleted record
    pub async fn delete(&self, id: &str) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(&format!(
            "DELETE FROM books WHERE id = $1 RETURNING {}",
            BOOK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }
}
