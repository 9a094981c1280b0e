#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod logging;
pub mod tts;

use serde::Deserialize;

pub use env::EnvError;
pub use logging::*;
pub use tts::*;

/// Top-level Celeste configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Text-to-speech provider configuration
    #[serde(default)]
    pub tts: TtsConfig,
    /// Log output configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
