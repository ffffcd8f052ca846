//! Suggestion client for the upstream chat-completion provider
//!
//! Keeps one live client per API key in a bounded cache, so repeated calls
//! with the same credential reuse the handle instead of rebuilding it.
//! A single failed upstream call is a single reported failure; there are no
//! retries and no backoff.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use serde::{Deserialize, Serialize};

use crate::{
    config::OpenAiConfig,
    error::{AppError, AppResult},
};

/// Fallback returned when the provider answers without any content
pub const NO_SUGGESTIONS: &str = "No suggestions available";

/// One message of a completion prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A handle to the completion provider, one per credential
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issue a single completion request. `Ok(None)` means the provider
    /// answered but produced no content.
    async fn complete(&self, messages: &[ChatMessage]) -> anyhow::Result<Option<String>>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// reqwest-backed client against the OpenAI chat-completions endpoint
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiClient {
    pub fn new(api_key: &str, config: &OpenAiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, messages: &[ChatMessage]) -> anyhow::Result<Option<String>> {
        let request = CompletionRequest {
            model: &self.model,
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let completion: CompletionResponse = response.json().await?;
        tracing::debug!("Provider returned {} choice(s)", completion.choices.len());

        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

/// Builds a client handle for a credential
pub type ClientFactory = Arc<dyn Fn(&str) -> Arc<dyn CompletionClient> + Send + Sync>;

/// Per-credential suggestion service
#[derive(Clone)]
pub struct SuggestionService {
    clients: Cache<String, Arc<dyn CompletionClient>>,
    factory: ClientFactory,
}

impl SuggestionService {
    /// Create the service with the real OpenAI client factory
    pub fn new(config: OpenAiConfig) -> Self {
        let factory_config = config.clone();
        Self::with_factory(
            &config,
            Arc::new(move |api_key| Arc::new(OpenAiClient::new(api_key, &factory_config))),
        )
    }

    /// Create the service with an injected client factory.
    /// The cache is bounded by capacity and TTL so distinct credentials
    /// cannot grow memory without limit.
    pub fn with_factory(config: &OpenAiConfig, factory: ClientFactory) -> Self {
        let clients = Cache::builder()
            .max_capacity(config.client_cache_capacity)
            .time_to_live(Duration::from_secs(config.client_cache_ttl_seconds))
            .build();
        Self { clients, factory }
    }

    /// Issue one completion request with the client for `api_key`,
    /// creating the client on first use of that credential.
    pub async fn get_suggestions(
        &self,
        messages: &[ChatMessage],
        api_key: &str,
    ) -> AppResult<String> {
        let factory = self.factory.clone();
        let key = api_key.to_string();
        let client = self
            .clients
            .get_with(key.clone(), async move { factory(&key) })
            .await;

        match client.complete(messages).await {
            Ok(Some(content)) => Ok(content),
            Ok(None) => Ok(NO_SUGGESTIONS.to_string()),
            Err(e) => {
                // Upstream detail stays in the logs; callers only see a
                // generic provider failure.
                tracing::error!("Completion request failed: {:?}", e);
                Err(AppError::Suggestion(
                    "Failed to get suggestions from OpenAI".to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn test_config() -> OpenAiConfig {
        OpenAiConfig::default()
    }

    fn counting_factory(
        constructed: Arc<AtomicUsize>,
        content: Option<String>,
    ) -> ClientFactory {
        Arc::new(move |_api_key| {
            constructed.fetch_add(1, Ordering::SeqCst);
            let content = content.clone();
            let mut mock = MockCompletionClient::new();
            mock.expect_complete()
                .returning(move |_| Ok(content.clone()));
            Arc::new(mock)
        })
    }

    #[tokio::test]
    async fn returns_first_choice_content() {
        let constructed = Arc::new(AtomicUsize::new(0));
        let service = SuggestionService::with_factory(
            &test_config(),
            counting_factory(constructed, Some("Test suggestion".to_string())),
        );

        let result = service
            .get_suggestions(&[ChatMessage::user("Test message")], "test-api-key")
            .await
            .unwrap();
        assert_eq!(result, "Test suggestion");
    }

    #[tokio::test]
    async fn empty_content_falls_back_to_literal() {
        let constructed = Arc::new(AtomicUsize::new(0));
        let service =
            SuggestionService::with_factory(&test_config(), counting_factory(constructed, None));

        let result = service
            .get_suggestions(&[ChatMessage::user("Test message")], "test-api-key")
            .await
            .unwrap();
        assert_eq!(result, NO_SUGGESTIONS);
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_generic_provider_error() {
        let factory: ClientFactory = Arc::new(|_| {
            let mut mock = MockCompletionClient::new();
            mock.expect_complete()
                .returning(|_| Err(anyhow::anyhow!("connection refused to 10.0.0.1:443")));
            Arc::new(mock)
        });
        let service = SuggestionService::with_factory(&test_config(), factory);

        let err = service
            .get_suggestions(&[ChatMessage::user("Test message")], "test-api-key")
            .await
            .unwrap_err();
        match err {
            AppError::Suggestion(msg) => {
                assert_eq!(msg, "Failed to get suggestions from OpenAI");
                // Raw upstream detail must not leak into the domain error
                assert!(!msg.contains("10.0.0.1"));
            }
            other => panic!("expected Suggestion error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn same_credential_reuses_client_handle() {
        let constructed = Arc::new(AtomicUsize::new(0));
        let service = SuggestionService::with_factory(
            &test_config(),
            counting_factory(constructed.clone(), Some("ok".to_string())),
        );

        for _ in 0..3 {
            service
                .get_suggestions(&[ChatMessage::user("hello")], "key-a")
                .await
                .unwrap();
        }
        assert_eq!(constructed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn distinct_credentials_get_distinct_handles() {
        let constructed = Arc::new(AtomicUsize::new(0));
        let service = SuggestionService::with_factory(
            &test_config(),
            counting_factory(constructed.clone(), Some("ok".to_string())),
        );

        service
            .get_suggestions(&[ChatMessage::user("hello")], "key-a")
            .await
            .unwrap();
        service
            .get_suggestions(&[ChatMessage::user("hello")], "key-b")
            .await
            .unwrap();
        assert_eq!(constructed.load(Ordering::SeqCst), 2);
    }
}
