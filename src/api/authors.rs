//! Authors API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{Author, AuthorDetail, AuthorDto},
    AppState,
};

/// List all authors
#[utoipa::path(
    get,
    path = "/library/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Authors list", body = Vec<Author>)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.library.list_authors().await?;
    Ok(Json(authors))
}

/// Create or save an author (upsert when an id is supplied)
#[utoipa::path(
    post,
    path = "/library/authors",
    tag = "authors",
    request_body = AuthorDto,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Validation failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    Json(dto): Json<AuthorDto>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let author = state.services.library.save_author(&dto).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// Get author by ID, with books and their genres
#[utoipa::path(
    get,
    path = "/library/authors/{id}",
    tag = "authors",
    params(("id" = String, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = AuthorDetail),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AuthorDetail>> {
    let author = state.services.library.get_author(&id).await?;
    Ok(Json(author))
}

/// Update an author
#[utoipa::path(
    put,
    path = "/library/authors/{id}",
    tag = "authors",
    params(("id" = String, Path, description = "Author ID")),
    request_body = AuthorDto,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<AuthorDto>,
) -> AppResult<Json<Author>> {
    let author = state.services.library.update_author(&id, &dto).await?;
    Ok(Json(author))
}

/// Delete an author (fails while the author still owns books)
#[utoipa::path(
    delete,
    path = "/library/authors/{id}",
    tag = "authors",
    params(("id" = String, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Author still owns books", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.library.delete_author(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
