use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use swipefacts::cli::Cli;
use swipefacts::config::Config;
use swipefacts::generation::GeminiClient;
use swipefacts::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    cli.apply_overrides(&mut config);
    config.validate().context("invalid configuration")?;

    let client = GeminiClient::new(config.generation.clone())
        .context("building the HTTP client")?;
    if !client.has_api_key() {
        tracing::warn!(
            env = %config.generation.api_key_env,
            "No API key configured; requests will likely be rejected"
        );
    }
    tracing::info!(model = client.model(), "Using Gemini model");

    swipefacts::ui::run(config, Arc::new(client), cli.initial_topic())
        .context("terminal UI failed")?;
    Ok(())
}
