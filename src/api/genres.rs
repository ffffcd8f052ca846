//! Genres API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{Genre, GenreDto},
    AppState,
};

/// Create or save a genre (upsert when an id is supplied)
#[utoipa::path(
    post,
    path = "/library/genres",
    tag = "genres",
    request_body = GenreDto,
    responses(
        (status = 201, description = "Genre created", body = Genre),
        (status = 400, description = "Validation failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_genre(
    State(state): State<AppState>,
    Json(dto): Json<GenreDto>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    let genre = state.services.library.save_genre(&dto).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}

/// Get genre by ID
#[utoipa::path(
    get,
    path = "/library/genres/{id}",
    tag = "genres",
    params(("id" = String, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre details", body = Genre),
        (status = 404, description = "Genre not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Genre>> {
    let genre = state.services.library.get_genre(&id).await?;
    Ok(Json(genre))
}

/// Update a genre
#[utoipa::path(
    put,
    path = "/library/genres/{id}",
    tag = "genres",
    params(("id" = String, Path, description = "Genre ID")),
    request_body = GenreDto,
    responses(
        (status = 200, description = "Genre updated", body = Genre),
        (status = 404, description = "Genre not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<GenreDto>,
) -> AppResult<Json<Genre>> {
    let genre = state.services.library.update_genre(&id, &dto).await?;
    Ok(Json(genre))
}

/// Delete a genre
#[utoipa::path(
    delete,
    path = "/library/genres/{id}",
    tag = "genres",
    params(("id" = String, Path, description = "Genre ID")),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 404, description = "Genre not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.library.delete_genre(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
