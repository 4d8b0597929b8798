//! Configuration loading for the generation client and terminal UI.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_FACT_COUNT};
pub use types::{Config, GenerationConfig, UiConfig, FALLBACK_API_KEY_ENV};
