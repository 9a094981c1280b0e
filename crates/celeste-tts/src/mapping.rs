//! Provider to client wiring
//!
//! Adding a backend means one [`TtsClient`] implementation plus one entry in
//! [`ProviderMapping::builtin`]; callers resolve clients through the table.

use std::{collections::BTreeMap, str::FromStr};

use celeste_config::TtsConfig;
use celeste_core::{Capability, Provider, default_model};
use secrecy::SecretString;

use crate::{
    error::{Result, TtsError},
    provider::{TtsClient, google::GoogleTtsClient, openai::OpenAiTtsClient},
};

/// Capability offered by this package
pub const CAPABILITY: Capability = Capability::TextToSpeech;

/// Settings used to construct a client
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Model identifier, the provider default when unset
    pub model: Option<String>,
    /// Backend credential, checked when the client is first used
    pub api_key: Option<SecretString>,
    /// Base URL override
    pub base_url: Option<String>,
}

impl ClientOptions {
    /// Options for `provider` taken from configuration
    pub fn from_config(config: &TtsConfig, provider: Provider) -> Self {
        config
            .provider(provider)
            .map(|p| Self {
                model: p.model.clone(),
                api_key: p.api_key.clone(),
                base_url: p.base_url.clone(),
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn resolve_model(&self, provider: Provider) -> Result<String> {
        if let Some(model) = &self.model {
            return Ok(model.clone());
        }

        default_model(provider, CAPABILITY)
            .map(|m| m.id.to_string())
            .ok_or_else(|| TtsError::ConfigError(format!("No default text-to-speech model for provider '{provider}'")))
    }
}

/// Constructor registered for a provider
pub type ClientFactory = fn(ClientOptions) -> Result<Box<dyn TtsClient>>;

/// Table from provider to client constructor
#[derive(Debug, Clone)]
pub struct ProviderMapping {
    factories: BTreeMap<Provider, ClientFactory>,
}

impl Default for ProviderMapping {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProviderMapping {
    /// Table with no providers
    pub const fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Table with every backend shipped in this crate
    pub fn builtin() -> Self {
        let mut mapping = Self::empty();
        mapping.register(Provider::Google, google_client);
        mapping.register(Provider::OpenAi, openai_client);
        mapping
    }

    /// Add or replace the constructor for `provider`
    pub fn register(&mut self, provider: Provider, factory: ClientFactory) {
        self.factories.insert(provider, factory);
    }

    pub fn contains(&self, provider: Provider) -> bool {
        self.factories.contains_key(&provider)
    }

    /// Mapped providers, sorted by identifier
    pub fn providers(&self) -> Vec<Provider> {
        self.factories.keys().copied().collect()
    }

    /// Construct the client registered for `provider`
    ///
    /// # Errors
    ///
    /// Returns `TtsError::ConfigError` if no constructor is registered for
    /// the provider. A missing credential is not checked here, it surfaces
    /// as a synthesis failure on the first call.
    pub fn create_client(&self, provider: Provider, options: ClientOptions) -> Result<Box<dyn TtsClient>> {
        let factory = self
            .factories
            .get(&provider)
            .ok_or_else(|| TtsError::ConfigError(format!("No text-to-speech client registered for provider '{provider}'")))?;

        tracing::debug!("Initializing TTS client for provider: {provider}");

        factory(options)
    }

    /// Construct a client from a provider identifier string
    ///
    /// # Errors
    ///
    /// Returns `TtsError::ConfigError` if the identifier is unknown or unmapped
    pub fn create_client_by_id(&self, provider_id: &str, options: ClientOptions) -> Result<Box<dyn TtsClient>> {
        let provider = Provider::from_str(provider_id)
            .map_err(|_| TtsError::ConfigError(format!("Unknown provider '{provider_id}'")))?;

        self.create_client(provider, options)
    }
}

fn google_client(options: ClientOptions) -> Result<Box<dyn TtsClient>> {
    let model = options.resolve_model(Provider::Google)?;

    Ok(Box::new(GoogleTtsClient::new(model, options.api_key, options.base_url)))
}

fn openai_client(options: ClientOptions) -> Result<Box<dyn TtsClient>> {
    let model = options.resolve_model(Provider::OpenAi)?;

    Ok(Box::new(OpenAiTtsClient::new(model, options.api_key, options.base_url)))
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{SpeechRequest, SynthesisError};

    fn keyed() -> ClientOptions {
        ClientOptions::default().with_api_key(SecretString::from("test-key"))
    }

    #[test]
    fn builtin_maps_every_provider() {
        let mapping = ProviderMapping::builtin();

        for provider in Provider::iter() {
            let client = mapping.create_client(provider, keyed()).unwrap();
            assert_eq!(client.provider(), provider);
        }
    }

    #[test]
    fn unmapped_provider_is_a_config_error() {
        let mapping = ProviderMapping::empty();
        let err = mapping.create_client(Provider::Google, keyed()).err().unwrap();

        assert!(matches!(err, TtsError::ConfigError(_)));
        assert!(mapping.providers().is_empty());
    }

    #[test]
    fn unknown_identifier_is_a_config_error() {
        let err = ProviderMapping::builtin()
            .create_client_by_id("azure", keyed())
            .err()
            .unwrap();

        assert!(matches!(err, TtsError::ConfigError(ref m) if m.contains("azure")));
    }

    #[tokio::test]
    async fn missing_api_key_fails_at_first_use() {
        for provider in Provider::iter() {
            let client = ProviderMapping::builtin()
                .create_client(provider, ClientOptions::default().with_base_url("http://127.0.0.1:9"))
                .unwrap();

            let err = client
                .generate_speech(SpeechRequest::new("Hello", "any"))
                .await
                .unwrap_err();

            assert!(err.is_synthesis_failure());
            assert!(matches!(
                err.synthesis_cause(),
                Some(SynthesisError::AuthenticationFailed(m)) if m == "API key not configured"
            ));
        }
    }

    #[test]
    fn default_model_applies() {
        let client = ProviderMapping::builtin().create_client(Provider::Google, keyed()).unwrap();
        assert_eq!(client.model(), "gemini-2.5-flash-preview-tts");

        let client = ProviderMapping::builtin()
            .create_client_by_id("openai", keyed().with_model("tts-1-hd"))
            .unwrap();
        assert_eq!(client.model(), "tts-1-hd");
    }

    #[test]
    fn options_from_config() {
        let config: TtsConfig = toml::from_str(
            r#"
            [providers.google]
            api_key = "g-key"
            model = "gemini-2.5-pro-preview-tts"
            "#,
        )
        .unwrap();

        let options = ClientOptions::from_config(&config, Provider::Google);
        assert_eq!(options.model.as_deref(), Some("gemini-2.5-pro-preview-tts"));
        assert!(options.api_key.is_some());

        let missing = ClientOptions::from_config(&config, Provider::OpenAi);
        assert!(missing.api_key.is_none());
    }

    #[test]
    fn providers_sorted() {
        let providers = ProviderMapping::builtin().providers();
        assert_eq!(providers, [Provider::Google, Provider::OpenAi]);
    }
}
