//! Data models for the library catalog

pub mod author;
pub mod book;
pub mod genre;

pub use author::{Author, AuthorDetail, AuthorDto, NewAuthor};
pub use book::{Book, BookDto, BookWithGenre, NewBook};
pub use genre::{Genre, GenreDto, NewGenre};
