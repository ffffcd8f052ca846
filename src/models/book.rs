//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::genre::Genre;

/// Book record as stored
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub author_id: String,
    pub genre_id: Option<String>,
    pub published: DateTime<Utc>,
    pub series: Option<String>,
    pub series_number: Option<i32>,
    pub edition: Option<String>,
}

/// Book with its genre attached, used in the author detailed view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookWithGenre {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub author_id: String,
    pub genre_id: Option<String>,
    pub genre: Option<Genre>,
    pub published: DateTime<Utc>,
    pub series: Option<String>,
    pub series_number: Option<i32>,
    pub edition: Option<String>,
}

/// Book create/update request
///
/// `published` is taken as a raw string so the validation layer can accept
/// either RFC 3339 date-times or bare `YYYY-MM-DD` dates.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    /// Optional id for upsert-style saves
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub author_id: Option<String>,
    pub genre_id: Option<String>,
    pub published: Option<String>,
    pub series: Option<String>,
    pub series_number: Option<i64>,
    pub edition: Option<String>,
}

/// Normalized book data that passed validation
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub description: Option<String>,
    pub author_id: String,
    pub genre_id: Option<String>,
    pub published: DateTime<Utc>,
    pub series: Option<String>,
    pub series_number: Option<i32>,
    pub edition: Option<String>,
}
