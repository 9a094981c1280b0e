use std::path::PathBuf;

use celeste_core::Provider;
use celeste_tts::Language;
use clap::{Parser, Subcommand};

/// Celeste text-to-speech
#[derive(Debug, Parser)]
#[command(name = "celeste", about = "Discover voices and synthesize speech across TTS providers")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "celeste.toml", env = "CELESTE_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List providers that offer voices
    Providers {
        /// Only providers with a voice speaking this locale (e.g. "ja-JP")
        #[arg(long)]
        language: Option<Language>,
    },

    /// List text-to-speech models
    Models {
        #[arg(long)]
        provider: Option<Provider>,
    },

    /// List voices
    Voices {
        #[arg(long)]
        provider: Option<Provider>,

        /// Only voices speaking this locale (e.g. "en-US")
        #[arg(long)]
        language: Option<Language>,

        /// Print JSON instead of a numbered list
        #[arg(long)]
        json: bool,
    },

    /// Show one voice
    Voice { provider: Provider, id: String },

    /// Synthesize speech into a WAV file
    Speak(SpeakArgs),
}

#[derive(Debug, clap::Args)]
pub struct SpeakArgs {
    /// Provider identifier (e.g. "google")
    #[arg(short, long)]
    pub provider: Provider,

    /// Voice id as listed by `celeste voices`
    #[arg(short, long)]
    pub voice: String,

    /// Model override
    #[arg(short, long)]
    pub model: Option<String>,

    /// Require the voice to speak this locale
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Requested sample rate in Hz
    #[arg(long, value_parser = clap::value_parser!(u32).range(8_000..=48_000))]
    pub sample_rate: Option<u32>,

    /// Output file
    #[arg(short, long, default_value = "speech.wav")]
    pub output: PathBuf,

    /// Text to speak
    pub text: String,
}
