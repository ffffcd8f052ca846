//! Book suggestion API endpoints

use axum::extract::{Path, State};

use crate::{error::AppResult, AppState};

/// Suggest books for an existing author
#[utoipa::path(
    get,
    path = "/library/suggestions/{author_id}/{api_key}",
    tag = "suggestions",
    params(
        ("author_id" = String, Path, description = "Author ID"),
        ("api_key" = String, Path, description = "Completion provider API key")
    ),
    responses(
        (status = 200, description = "Suggested books as free text", body = String),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse),
        (status = 502, description = "Suggestion provider failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn suggest_books(
    State(state): State<AppState>,
    Path((author_id, api_key)): Path<(String, String)>,
) -> AppResult<String> {
    state
        .services
        .library
        .suggest_books(&author_id, &api_key)
        .await
}

/// Create an author from a name pair, then suggest books for it
#[utoipa::path(
    get,
    path = "/library/suggestions/{first_name}/{last_name}/{api_key}",
    tag = "suggestions",
    params(
        ("first_name" = String, Path, description = "Author first name"),
        ("last_name" = String, Path, description = "Author last name"),
        ("api_key" = String, Path, description = "Completion provider API key")
    ),
    responses(
        (status = 200, description = "Suggested books as free text", body = String),
        (status = 502, description = "Suggestion provider failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_and_suggest_books(
    State(state): State<AppState>,
    Path((first_name, last_name, api_key)): Path<(String, String, String)>,
) -> AppResult<String> {
    state
        .services
        .library
        .create_and_suggest_books(&first_name, &last_name, &api_key)
        .await
}
