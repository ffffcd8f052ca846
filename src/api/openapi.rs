//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, genres, health, suggestions};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "1.0.0",
        description = "A service to store authors, genres and books. Also, to get recommendations on new ones.",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Authors
        authors::list_authors,
        authors::create_author,
        authors::get_author,
        authors::update_author,
        authors::delete_author,
        // Genres
        genres::create_genre,
        genres::get_genre,
        genres::update_genre,
        genres::delete_genre,
        // Books
        books::create_book,
        books::get_book,
        books::update_book,
        books::delete_book,
        // Suggestions
        suggestions::suggest_books,
        suggestions::create_and_suggest_books,
    ),
    components(
        schemas(
            crate::models::author::Author,
            crate::models::author::AuthorDetail,
            crate::models::author::AuthorDto,
            crate::models::genre::Genre,
            crate::models::genre::GenreDto,
            crate::models::book::Book,
            crate::models::book::BookWithGenre,
            crate::models::book::BookDto,
            crate::validation::FieldViolation,
            crate::validation::ViolationKind,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "authors", description = "Author catalog management"),
        (name = "genres", description = "Genre catalog management"),
        (name = "books", description = "Book catalog management"),
        (name = "suggestions", description = "AI-powered book suggestions")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
