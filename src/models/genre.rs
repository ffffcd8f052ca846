//! Genre model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Genre record as stored
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    pub id: String,
    pub genre: String,
}

/// Genre create/update request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenreDto {
    /// Optional id for upsert-style saves
    pub id: Option<String>,
    pub genre: Option<String>,
}

/// Normalized genre data that passed validation
#[derive(Debug, Clone)]
pub struct NewGenre {
    pub genre: String,
}
