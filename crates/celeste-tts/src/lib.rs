#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

//! Text-to-speech for Celeste
//!
//! Voice discovery through [`VoiceRegistry`], backend selection through
//! [`ProviderMapping`], and synthesis through the [`TtsClient`] contract.

pub mod catalog;
mod error;
mod http_client;
mod language;
pub mod mapping;
mod provider;
mod registry;
mod types;
mod voice;
mod wav;

use celeste_config::Config;
use celeste_core::Provider;

pub use celeste_core::{AudioArtifact, Capability};
pub use error::{Result, SynthesisError, TtsError};
pub use language::Language;
pub use mapping::{CAPABILITY, ClientFactory, ClientOptions, ProviderMapping};
pub use provider::{
    TtsClient, generate_with_timeout,
    google::{DEFAULT_GOOGLE_API_URL, GoogleTtsClient},
    openai::{DEFAULT_OPENAI_API_URL, OpenAiTtsClient},
};
pub use registry::VoiceRegistry;
pub use types::{DEFAULT_SAMPLE_RATE, SpeechRequest};
pub use voice::Voice;

/// Build a client for `provider` from configuration
///
/// An explicit `model` overrides the configured one.
pub fn build_client(config: &Config, provider: Provider, model: Option<&str>) -> anyhow::Result<Box<dyn TtsClient>> {
    let mut options = ClientOptions::from_config(&config.tts, provider);
    if let Some(model) = model {
        options = options.with_model(model);
    }

    ProviderMapping::builtin()
        .create_client(provider, options)
        .map_err(|e| anyhow::anyhow!("Failed to initialize TTS client: {e}"))
}
