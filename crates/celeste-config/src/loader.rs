use std::path::Path;

use celeste_core::{Capability, get_model};

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Load configuration from a file, falling back to defaults when it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is malformed or a provider names a
    /// model it does not offer
    pub fn validate(&self) -> anyhow::Result<()> {
        self.tts.timeout()?;
        self.validate_tts_models()?;
        Ok(())
    }

    /// Ensure configured default models belong to their provider
    fn validate_tts_models(&self) -> anyhow::Result<()> {
        for (provider, provider_config) in &self.tts.providers {
            let Some(model) = provider_config.model.as_deref() else {
                continue;
            };

            match get_model(*provider, model) {
                Some(entry) if entry.capability == Capability::TextToSpeech => {}
                _ => anyhow::bail!("model '{model}' is not a text-to-speech model of provider '{provider}'"),
            }
        }

        Ok(())
    }
}
