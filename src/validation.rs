//! Validation layer for catalog inputs
//!
//! Pure functions turning raw DTOs into normalized records, or the full set
//! of field-level violations. Every applicable rule is checked, so a caller
//! always sees all problems at once rather than the first one hit.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{
    author::NewAuthor, book::NewBook, genre::NewGenre, AuthorDto, BookDto, GenreDto,
};

/// Maximum length for short string fields (names, titles, series, edition)
pub const MAX_SHORT: usize = 191;
/// Maximum length for long text fields (bio, description)
pub const MAX_LONG: usize = 2000;

/// Kind of a single validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum ViolationKind {
    MissingRequiredField,
    FieldTooLong,
    InvalidNumber,
    InvalidDate,
}

/// One invalid field with its failure messages
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldViolation {
    pub property: String,
    pub kind: ViolationKind,
    pub messages: Vec<String>,
}

impl FieldViolation {
    fn new(property: &str, kind: ViolationKind, message: String) -> Self {
        Self {
            property: property.to_string(),
            kind,
            messages: vec![message],
        }
    }
}

fn check_len(
    violations: &mut Vec<FieldViolation>,
    property: &str,
    value: &Option<String>,
    max: usize,
) {
    if let Some(v) = value {
        if v.chars().count() > max {
            violations.push(FieldViolation::new(
                property,
                ViolationKind::FieldTooLong,
                format!("{} must be at most {} characters", property, max),
            ));
        }
    }
}

fn check_required(
    violations: &mut Vec<FieldViolation>,
    property: &str,
    value: &Option<String>,
) -> bool {
    match value {
        Some(v) if !v.is_empty() => true,
        _ => {
            violations.push(FieldViolation::new(
                property,
                ViolationKind::MissingRequiredField,
                format!("{} is required and must be non-empty", property),
            ));
            false
        }
    }
}

/// Parse a published value: RFC 3339 date-times as-is, bare `YYYY-MM-DD`
/// normalized to midnight UTC.
fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Validate an author payload
pub fn validate_author(dto: &AuthorDto) -> Result<NewAuthor, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    check_len(&mut violations, "firstName", &dto.first_name, MAX_SHORT);
    check_len(&mut violations, "lastName", &dto.last_name, MAX_SHORT);
    check_len(&mut violations, "bio", &dto.bio, MAX_LONG);

    if !violations.is_empty() {
        return Err(violations);
    }
    Ok(NewAuthor {
        first_name: dto.first_name.clone(),
        last_name: dto.last_name.clone(),
        bio: dto.bio.clone(),
    })
}

/// Validate a genre payload
pub fn validate_genre(dto: &GenreDto) -> Result<NewGenre, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    check_required(&mut violations, "genre", &dto.genre);
    check_len(&mut violations, "genre", &dto.genre, MAX_SHORT);

    if !violations.is_empty() {
        return Err(violations);
    }
    Ok(NewGenre {
        genre: dto.genre.clone().unwrap_or_default(),
    })
}

/// Validate a book payload
pub fn validate_book(dto: &BookDto) -> Result<NewBook, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    check_required(&mut violations, "title", &dto.title);
    check_required(&mut violations, "authorId", &dto.author_id);
    check_len(&mut violations, "title", &dto.title, MAX_SHORT);
    check_len(&mut violations, "description", &dto.description, MAX_LONG);
    check_len(&mut violations, "series", &dto.series, MAX_SHORT);
    check_len(&mut violations, "edition", &dto.edition, MAX_SHORT);

    let series_number = match dto.series_number {
        Some(n) if n >= 1 && n <= i32::MAX as i64 => Some(n as i32),
        Some(n) => {
            violations.push(FieldViolation::new(
                "seriesNumber",
                ViolationKind::InvalidNumber,
                format!("seriesNumber must be a positive integer, got {}", n),
            ));
            None
        }
        None => None,
    };

    let published = match &dto.published {
        Some(raw) => match parse_published(raw) {
            Some(dt) => Some(dt),
            None => {
                violations.push(FieldViolation::new(
                    "published",
                    ViolationKind::InvalidDate,
                    format!("published is not a valid date: {}", raw),
                ));
                None
            }
        },
        None => {
            violations.push(FieldViolation::new(
                "published",
                ViolationKind::MissingRequiredField,
                "published is required".to_string(),
            ));
            None
        }
    };

    if !violations.is_empty() {
        return Err(violations);
    }
    Ok(NewBook {
        title: dto.title.clone().unwrap_or_default(),
        description: dto.description.clone(),
        author_id: dto.author_id.clone().unwrap_or_default(),
        genre_id: dto.genre_id.clone(),
        published: published.unwrap_or_else(Utc::now),
        series: dto.series.clone(),
        series_number,
        edition: dto.edition.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn valid_book() -> BookDto {
        BookDto {
            title: Some("The Hobbit".to_string()),
            author_id: Some("author-1".to_string()),
            published: Some("1937-09-21".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn empty_title_is_missing_required_field() {
        let dto = BookDto {
            title: Some(String::new()),
            ..valid_book()
        };
        let violations = validate_book(&dto).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| v.property == "title" && v.kind == ViolationKind::MissingRequiredField));
    }

    #[test]
    fn absent_author_id_is_missing_required_field() {
        let dto = BookDto {
            author_id: None,
            ..valid_book()
        };
        let violations = validate_book(&dto).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| v.property == "authorId" && v.kind == ViolationKind::MissingRequiredField));
    }

    #[test]
    fn title_at_max_length_is_accepted() {
        let dto = BookDto {
            title: Some("x".repeat(MAX_SHORT)),
            ..valid_book()
        };
        assert!(validate_book(&dto).is_ok());
    }

    #[test]
    fn title_over_max_length_is_too_long() {
        let dto = BookDto {
            title: Some("x".repeat(MAX_SHORT + 1)),
            ..valid_book()
        };
        let violations = validate_book(&dto).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| v.property == "title" && v.kind == ViolationKind::FieldTooLong));
    }

    #[test]
    fn description_boundary_at_2000() {
        let ok = BookDto {
            description: Some("y".repeat(MAX_LONG)),
            ..valid_book()
        };
        assert!(validate_book(&ok).is_ok());

        let too_long = BookDto {
            description: Some("y".repeat(MAX_LONG + 1)),
            ..valid_book()
        };
        let violations = validate_book(&too_long).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| v.property == "description" && v.kind == ViolationKind::FieldTooLong));
    }

    #[test]
    fn bare_date_normalizes_to_midnight_utc() {
        let book = validate_book(&valid_book()).unwrap();
        assert_eq!(book.published.hour(), 0);
        assert_eq!(book.published.minute(), 0);
        assert_eq!(book.published.to_rfc3339(), "1937-09-21T00:00:00+00:00");
    }

    #[test]
    fn rfc3339_date_time_is_accepted() {
        let dto = BookDto {
            published: Some("1937-09-21T00:00:00.000Z".to_string()),
            ..valid_book()
        };
        let book = validate_book(&dto).unwrap();
        assert_eq!(book.published.to_rfc3339(), "1937-09-21T00:00:00+00:00");
    }

    #[test]
    fn garbage_date_is_invalid() {
        let dto = BookDto {
            published: Some("next tuesday".to_string()),
            ..valid_book()
        };
        let violations = validate_book(&dto).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| v.property == "published" && v.kind == ViolationKind::InvalidDate));
    }

    #[test]
    fn zero_series_number_is_invalid() {
        let dto = BookDto {
            series_number: Some(0),
            ..valid_book()
        };
        let violations = validate_book(&dto).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| v.property == "seriesNumber" && v.kind == ViolationKind::InvalidNumber));
    }

    #[test]
    fn all_violations_are_collected_together() {
        let dto = BookDto {
            title: None,
            author_id: None,
            published: Some("not-a-date".to_string()),
            series_number: Some(-3),
            ..Default::default()
        };
        let violations = validate_book(&dto).unwrap_err();
        let properties: Vec<_> = violations.iter().map(|v| v.property.as_str()).collect();
        assert!(properties.contains(&"title"));
        assert!(properties.contains(&"authorId"));
        assert!(properties.contains(&"published"));
        assert!(properties.contains(&"seriesNumber"));
    }

    #[test]
    fn genre_requires_non_empty_name() {
        let violations = validate_genre(&GenreDto::default()).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| v.property == "genre" && v.kind == ViolationKind::MissingRequiredField));

        let ok = GenreDto {
            genre: Some("Science Fiction".to_string()),
            ..Default::default()
        };
        assert_eq!(validate_genre(&ok).unwrap().genre, "Science Fiction");
    }

    #[test]
    fn author_with_no_fields_is_valid() {
        assert!(validate_author(&AuthorDto::default()).is_ok());
    }

    #[test]
    fn author_bio_over_limit_is_rejected() {
        let dto = AuthorDto {
            bio: Some("z".repeat(MAX_LONG + 1)),
            ..Default::default()
        };
        let violations = validate_author(&dto).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| v.property == "bio" && v.kind == ViolationKind::FieldTooLong));
    }
}
