#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;
mod commands;

use args::{Args, Command};
use celeste_config::Config;
use celeste_tts::VoiceRegistry;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::load_or_default(&args.config)?;

    // Initialize logging
    celeste_telemetry::init(&config.logging)?;

    tracing::debug!(config_path = %args.config.display(), "starting celeste");

    let registry = VoiceRegistry::with_catalog();

    match args.command {
        Command::Providers { language } => {
            commands::providers(&registry, language);
            Ok(())
        }
        Command::Models { provider } => {
            commands::models(provider);
            Ok(())
        }
        Command::Voices {
            provider,
            language,
            json,
        } => commands::voices(&registry, provider, language, json),
        Command::Voice { provider, id } => commands::voice(&registry, provider, &id),
        Command::Speak(speak) => commands::speak(&config, &registry, speak).await,
    }
}
