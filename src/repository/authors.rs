//! Authors repository

use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, AuthorDetail, NewAuthor},
        book::BookWithGenre,
        genre::Genre,
    },
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all authors (plain view)
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>(
            "SELECT id, first_name, last_name, bio FROM authors ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a new author with a store-generated id
    pub async fn create(&self, data: &NewAuthor) -> AppResult<Author> {
        let row = sqlx::query_as::<_, Author>(
            "INSERT INTO authors (first_name, last_name, bio) VALUES ($1, $2, $3) \
             RETURNING id, first_name, last_name, bio",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.bio)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an existing author addressed by id
    pub async fn update(&self, id: &str, data: &NewAuthor) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            "UPDATE authors SET first_name = $1, last_name = $2, bio = $3 WHERE id = $4 \
             RETURNING id, first_name, last_name, bio",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.bio)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    /// Insert-or-update keyed by an optional id. Without an id this is a
    /// plain insert with a store-generated key.
    pub async fn upsert(&self, id: Option<&str>, data: &NewAuthor) -> AppResult<Author> {
        match id {
            None => self.create(data).await,
            Some(id) => {
                let row = sqlx::query_as::<_, Author>(
                    "INSERT INTO authors (id, first_name, last_name, bio) VALUES ($1, $2, $3, $4) \
                     ON CONFLICT (id) DO UPDATE SET first_name = $2, last_name = $3, bio = $4 \
                     RETURNING id, first_name, last_name, bio",
                )
                .bind(id)
                .bind(&data.first_name)
                .bind(&data.last_name)
                .bind(&data.bio)
                .fetch_one(&self.pool)
                .await?;
                Ok(row)
            }
        }
    }

    /// Get author by id (plain view)
    pub async fn get_by_id(&self, id: &str) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            "SELECT id, first_name, last_name, bio FROM authors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    /// Get author by id with books eager-loaded, each with its genre.
    /// Books come back in insertion order.
    pub async fn get_detailed(&self, id: &str) -> AppResult<AuthorDetail> {
        let author = self.get_by_id(id).await?;

        let rows = sqlx::query(
            "SELECT b.id, b.title, b.description, b.author_id, b.genre_id, b.published, \
                    b.series, b.series_number, b.edition, g.genre AS genre_name \
             FROM books b \
             LEFT JOIN genres g ON g.id = b.genre_id \
             WHERE b.author_id = $1 \
             ORDER BY b.created_at, b.id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let books = rows
            .into_iter()
            .map(|row| {
                let genre_id: Option<String> = row.get("genre_id");
                let genre = match (&genre_id, row.get::<Option<String>, _>("genre_name")) {
                    (Some(gid), Some(name)) => Some(Genre {
                        id: gid.clone(),
                        genre: name,
                    }),
                    _ => None,
                };
                BookWithGenre {
                    id: row.get("id"),
                    title: row.get("title"),
                    description: row.get("description"),
                    author_id: row.get("author_id"),
                    genre_id,
                    genre,
                    published: row.get("published"),
                    series: row.get("series"),
                    series_number: row.get("series_number"),
                    edition: row.get("edition"),
                }
            })
            .collect();

        Ok(AuthorDetail {
            id: author.id,
            first_name: author.first_name,
            last_name: author.last_name,
            bio: author.bio,
            books,
        })
    }

    /// Delete author by id, returning the deleted record.
    /// Fails with a foreign-key conflict if the author still owns books.
    pub async fn delete(&self, id: &str) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            "DELETE FROM authors WHERE id = $1 RETURNING id, first_name, last_name, bio",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }
}
