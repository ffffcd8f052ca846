//! Library catalog service
//!
//! Orchestrates validation, persistence and the suggestion client into the
//! exposed catalog operations. Validation failures are detected before any
//! persistence call; persistence errors propagate unchanged, without retry.

use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorDetail, AuthorDto, Book, BookDto, Genre, GenreDto},
    repository::Repository,
    services::suggestions::{ChatMessage, SuggestionService},
    validation,
};

#[derive(Clone)]
pub struct LibraryService {
    repository: Repository,
    suggestions: SuggestionService,
}

/// Build the ordered prompt for a suggestion request: one header message
/// naming the author and the expected JSON shape, then one message per
/// catalogued book title, in storage order.
pub(crate) fn build_suggestion_prompt(author: &AuthorDetail) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(1 + author.books.len());
    messages.push(ChatMessage::user(format!(
        "If I have any books from author {} they are listed following. \
         Can you suggest some other titles? \
         Please use JSON format for the response. This is the JSON format: \
         title: string; \
         description?: string; \
         authorId: {}; \
         published: Date; \
         series?: string; \
         seriesNumber?: number; \
         edition?: string;",
        author.full_name(),
        author.id
    )));

    for book in &author.books {
        messages.push(ChatMessage::user(book.title.clone()));
    }

    messages
}

impl LibraryService {
    pub fn new(repository: Repository, suggestions: SuggestionService) -> Self {
        Self {
            repository,
            suggestions,
        }
    }

    /// List all authors (plain view)
    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        tracing::debug!("Getting all authors");
        self.repository.authors.list().await
    }

    /// Validate and save an author; an id in the payload makes this an
    /// upsert, otherwise a fresh insert.
    pub async fn save_author(&self, dto: &AuthorDto) -> AppResult<Author> {
        let data = validation::validate_author(dto).map_err(AppError::Validation)?;
        tracing::debug!(
            "Saving author {} {}",
            data.first_name.as_deref().unwrap_or(""),
            data.last_name.as_deref().unwrap_or("")
        );
        self.repository.authors.upsert(dto.id.as_deref(), &data).await
    }

    /// Validate and update an author addressed by id
    pub async fn update_author(&self, id: &str, dto: &AuthorDto) -> AppResult<Author> {
        let data = validation::validate_author(dto).map_err(AppError::Validation)?;
        tracing::debug!("Updating author {}", id);
        self.repository.authors.update(id, &data).await
    }

    /// Get an author's detailed view: books with genres attached
    pub async fn get_author(&self, id: &str) -> AppResult<AuthorDetail> {
        tracing::debug!("Getting author {}", id);
        self.repository.authors.get_detailed(id).await
    }

    /// Delete an author; restricted while the author still owns books
    pub async fn delete_author(&self, id: &str) -> AppResult<Author> {
        tracing::debug!("Deleting author {}", id);
        self.repository.authors.delete(id).await
    }

    /// Validate and save a genre (upsert when an id is supplied)
    pub async fn save_genre(&self, dto: &GenreDto) -> AppResult<Genre> {
        let data = validation::validate_genre(dto).map_err(AppError::Validation)?;
        tracing::debug!("Saving genre {}", data.genre);
        self.repository.genres.upsert(dto.id.as_deref(), &data).await
    }

    /// Validate and update a genre addressed by id
    pub async fn update_genre(&self, id: &str, dto: &GenreDto) -> AppResult<Genre> {
        let data = validation::validate_genre(dto).map_err(AppError::Validation)?;
        tracing::debug!("Updating genre {}", id);
        self.repository.genres.update(id, &data).await
    }

    /// Get a genre (plain view)
    pub async fn get_genre(&self, id: &str) -> AppResult<Genre> {
        tracing::debug!("Getting genre {}", id);
        self.repository.genres.get_by_id(id).await
    }

    /// Delete a genre by id
    pub async fn delete_genre(&self, id: &str) -> AppResult<Genre> {
        tracing::debug!("Deleting genre {}", id);
        self.repository.genres.delete(id).await
    }

    /// Validate and save a book (upsert when an id is supplied)
    pub async fn save_book(&self, dto: &BookDto) -> AppResult<Book> {
        let data = validation::validate_book(dto).map_err(AppError::Validation)?;
        tracing::debug!("Saving book {}", data.title);
        self.repository.books.upsert(dto.id.as_deref(), &data).await
    }

    /// Validate and update a book addressed by id
    pub async fn update_book(&self, id: &str, dto: &BookDto) -> AppResult<Book> {
        let data = validation::validate_book(dto).map_err(AppError::Validation)?;
        tracing::debug!("Updating book {}", id);
        self.repository.books.update(id, &data).await
    }

    /// Get a book (plain view)
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        tracing::debug!("Getting book {}", id);
        self.repository.books.get_by_id(id).await
    }

    /// Delete a book by id
    pub async fn delete_book(&self, id: &str) -> AppResult<Book> {
        tracing::debug!("Deleting book {}", id);
        self.repository.books.delete(id).await
    }

    /// Suggest new books for an author based on their existing catalog.
    /// The provider's answer is returned verbatim; no schema is enforced.
    pub async fn suggest_books(&self, author_id: &str, api_key: &str) -> AppResult<String> {
        tracing::debug!("Suggesting books for author {}", author_id);
        let author = self.repository.authors.get_detailed(author_id).await?;
        let messages = build_suggestion_prompt(&author);
        self.suggestions.get_suggestions(&messages, api_key).await
    }

    /// Create a new author from a name pair, then suggest books for it
    pub async fn create_and_suggest_books(
        &self,
        first_name: &str,
        last_name: &str,
        api_key: &str,
    ) -> AppResult<String> {
        let author = self
            .save_author(&AuthorDto {
                first_name: Some(first_name.to_string()),
                last_name: Some(last_name.to_string()),
                ..Default::default()
            })
            .await?;
        self.suggest_books(&author.id, api_key).await
    }
}
