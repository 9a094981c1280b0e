use std::time::Duration;

use celeste_core::Provider;
use indexmap::IndexMap;
use secrecy::SecretString;
use serde::Deserialize;

/// Timeout applied around a synthesis call when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Top-level TTS configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// Upper bound for a single synthesis call (e.g. "30s", "2m")
    #[serde(default)]
    pub timeout: Option<String>,
    /// Provider configurations keyed by provider identifier
    #[serde(default)]
    pub providers: IndexMap<Provider, TtsProviderConfig>,
}

impl TtsConfig {
    /// Parsed synthesis timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the configured value is not a valid duration
    pub fn timeout(&self) -> anyhow::Result<Duration> {
        self.timeout.as_deref().map_or(Ok(DEFAULT_TIMEOUT), |raw| {
            duration_str::parse(raw).map_err(|e| anyhow::anyhow!("invalid tts.timeout '{raw}': {e}"))
        })
    }

    /// Settings for one provider, if configured
    pub fn provider(&self, provider: Provider) -> Option<&TtsProviderConfig> {
        self.providers.get(&provider)
    }
}

/// Configuration for a single TTS provider
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsProviderConfig {
    /// API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Model used when the caller does not pick one
    #[serde(default)]
    pub model: Option<String>,
}
