//! Libris Library Catalog Server
//!
//! A REST JSON API for managing a library catalog of authors, genres and
//! books, with AI-powered book suggestions backed by an external
//! chat-completion provider.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod validation;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
