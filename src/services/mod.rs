//! Business logic services

pub mod library;
pub mod suggestions;

use crate::{config::OpenAiConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub library: library::LibraryService,
    pub suggestions: suggestions::SuggestionService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, openai_config: OpenAiConfig) -> Self {
        let suggestions = suggestions::SuggestionService::new(openai_config);
        Self {
            library: library::LibraryService::new(repository.clone(), suggestions.clone()),
            suggestions,
            repository,
        }
    }
}
