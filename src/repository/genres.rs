//! Genres repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::genre::{Genre, NewGenre},
};

#[derive(Clone)]
pub struct GenresRepository {
    pool: Pool<Postgres>,
}

impl GenresRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create a new genre with a store-generated id
    pub async fn create(&self, data: &NewGenre) -> AppResult<Genre> {
        let row = sqlx::query_as::<_, Genre>(
            "INSERT INTO genres (genre) VALUES ($1) RETURNING id, genre",
        )
        .bind(&data.genre)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an existing genre addressed by id
    pub async fn update(&self, id: &str, data: &NewGenre) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>(
            "UPDATE genres SET genre = $1 WHERE id = $2 RETURNING id, genre",
        )
        .bind(&data.genre)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))
    }

    /// Insert-or-update keyed by an optional id
    pub async fn upsert(&self, id: Option<&str>, data: &NewGenre) -> AppResult<Genre> {
        match id {
            None => self.create(data).await,
            Some(id) => {
                let row = sqlx::query_as::<_, Genre>(
                    "INSERT INTO genres (id, genre) VALUES ($1, $2) \
                     ON CONFLICT (id) DO UPDATE SET genre = $2 \
                     RETURNING id, genre",
                )
                .bind(id)
                .bind(&data.genre)
                .fetch_one(&self.pool)
                .await?;
                Ok(row)
            }
        }
    }

    /// Get genre by id
    pub async fn get_by_id(&self, id: &str) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>("SELECT id, genre FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))
    }

    /// Delete genre by id, returning the deleted record
    pub async fn delete(&self, id: &str) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>("DELETE FROM genres WHERE id = $1 RETURNING id, genre")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", id)))
    }
}
