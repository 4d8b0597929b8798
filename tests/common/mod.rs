//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use swipefacts::config::{GenerationConfig, UiConfig};
use swipefacts::deck::{build_deck, Card};
use swipefacts::generation::{DeckGenerator, GeminiClient, GenerationError};
use swipefacts::ui::app::{App, UiCommand};
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Write `content` to a fresh `config.toml` inside a temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// `count` numbered facts about `topic`.
pub fn sample_deck(topic: &str, count: usize) -> Vec<Card> {
    build_deck(
        topic,
        (0..count).map(|i| (format!("Question {}?", i), format!("Fact {}.", i))),
    )
}

/// Client pointed at a mock server with a fixed key.
pub fn client_for(base_url: &str, strict: bool) -> GeminiClient {
    let config = GenerationConfig {
        base_url: base_url.to_string(),
        strict_payload: strict,
        ..GenerationConfig::default()
    };
    GeminiClient::with_api_key(config, Some("test-key".to_string()))
        .expect("Failed to build client")
}

// -- App helpers --------------------------------------------------------------

/// App sized to a typical terminal, with its command channel exposed.
pub fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
    let mut app = App::new(UiConfig::default());
    let (tx, rx) = mpsc::channel(16);
    app.set_command_sender(tx);
    app.on_resize(100, 40);
    (app, rx)
}

/// Type a topic into the field and submit it.
pub fn submit(app: &mut App, topic: &str) -> bool {
    if let Some(input) = app.topic_mut() {
        input.set(topic);
    }
    app.submit_topic()
}

// -- Generator fakes ----------------------------------------------------------

/// Generator that returns a fixed number of cards and counts calls.
pub struct FakeGenerator {
    pub cards: usize,
    pub fail: bool,
    pub calls: Arc<AtomicUsize>,
}

impl FakeGenerator {
    pub fn ok(cards: usize) -> Self {
        Self {
            cards,
            fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            cards: 0,
            fail: true,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl DeckGenerator for FakeGenerator {
    async fn generate(&self, topic: &str) -> Result<Vec<Card>, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(GenerationError::Api {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        Ok(sample_deck(topic, self.cards))
    }
}
