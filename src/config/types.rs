use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Settings for the deck generation client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Base URL of the Gemini API (e.g., "https://generativelanguage.googleapis.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier used for `generateContent`.
    #[serde(default = "default_model")]
    pub model: String,
    /// Direct API key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is not set.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Number of facts requested per deck.
    #[serde(default = "default_fact_count")]
    pub fact_count: u32,
    /// Treat a payload without facts as an error instead of an empty deck.
    #[serde(default)]
    pub strict_payload: bool,
}

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Drag units represented by one terminal column.
    #[serde(default = "default_units_per_column")]
    pub units_per_column: i32,
}

/// Fallback variable checked when the configured one is unset.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_fact_count() -> u32 {
    10
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_units_per_column() -> i32 {
    10
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            api_key_env: default_api_key_env(),
            fact_count: default_fact_count(),
            strict_payload: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            units_per_column: default_units_per_column(),
        }
    }
}

impl GenerationConfig {
    /// Resolve the API key: explicit value, then `api_key_env`, then `API_KEY`.
    ///
    /// A missing key is not an error here; the remote service rejects the call.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Same as [`resolve_api_key`](Self::resolve_api_key) with an injectable lookup.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.is_empty()) {
            return Some(key.clone());
        }
        [self.api_key_env.as_str(), FALLBACK_API_KEY_ENV]
            .into_iter()
            .filter(|name| !name.is_empty())
            .find_map(|name| lookup(name).filter(|v| !v.is_empty()))
    }
}
