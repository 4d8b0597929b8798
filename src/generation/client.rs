//! Gemini client that turns a topic into a deck of trivia cards.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;

use crate::config::GenerationConfig;
use crate::deck::Card;

use super::error::GenerationError;
use super::schema::{parse_deck, GenerateContentRequest, GenerateContentResponse};

/// Anything that can produce a deck for a topic.
///
/// Every call is independent: no retries, caching or cancellation.
#[async_trait]
pub trait DeckGenerator: Send + Sync {
    /// Generate a fresh batch of cards for `topic`.
    async fn generate(&self, topic: &str) -> Result<Vec<Card>, GenerationError>;
}

/// Client for the Gemini `generateContent` API.
pub struct GeminiClient {
    client: Client,
    config: GenerationConfig,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Create a client, resolving the API key from config and environment.
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        let api_key = config.resolve_api_key();
        Self::with_api_key(config, api_key)
    }

    /// Create a client with an explicit key (or none).
    pub fn with_api_key(
        config: GenerationConfig,
        api_key: Option<String>,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Whether a key will be sent with requests.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Full endpoint URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl DeckGenerator for GeminiClient {
    async fn generate(&self, topic: &str) -> Result<Vec<Card>, GenerationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(GenerationError::EmptyTopic);
        }

        let url = self.endpoint();
        let request_body = GenerateContentRequest::for_topic(topic, self.config.fact_count);

        tracing::debug!(
            url = %url,
            model = %self.config.model,
            topic = %topic,
            fact_count = self.config.fact_count,
            "Sending deck generation request"
        );

        let mut builder = self.client.post(&url).json(&request_body);
        if let Some(key) = &self.api_key {
            builder = builder.header("x-goog-api-key", key);
        }

        let start = Instant::now();
        let response = builder.send().await?;
        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::error!(
                status = %status,
                latency_ms,
                error = %error_text,
                "Deck generation API error"
            );

            return Err(GenerationError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let response_text = response.text().await?;
        let response_body: GenerateContentResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                GenerationError::Parse(format!("Failed to parse response JSON: {}", e))
            })?;

        let cards = parse_deck(
            response_body.text().as_deref(),
            topic,
            self.config.strict_payload,
        )?;

        tracing::debug!(
            latency_ms,
            card_count = cards.len(),
            "Deck generation completed"
        );

        Ok(cards)
    }
}
