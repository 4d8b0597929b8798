//! Command-line flags. Anything set here wins over the config file.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "swipefacts", about = "Swipe through AI-generated trivia cards", version)]
pub struct Cli {
    /// Generate a deck for this topic right after startup
    #[arg(long, short)]
    pub topic: Option<String>,

    /// Gemini model name (overrides the config file)
    #[arg(long)]
    pub model: Option<String>,

    /// API key (overrides config and environment)
    #[arg(long, env = "SWIPEFACTS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Path to the config file (default: <config dir>/swipefacts/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(model) = self.model.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
            config.generation.model = model.to_string();
        }
        if let Some(key) = self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
            config.generation.api_key = Some(key.to_string());
        }
    }

    /// Topic to submit on startup, if one was given and isn't blank.
    pub fn initial_topic(&self) -> Option<String> {
        self.topic
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }
}
