//! API handlers for Libris REST endpoints

pub mod authors;
pub mod books;
pub mod genres;
pub mod health;
pub mod openapi;
pub mod suggestions;
