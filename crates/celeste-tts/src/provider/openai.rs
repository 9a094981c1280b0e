use async_trait::async_trait;
use celeste_core::{AudioArtifact, Provider};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use super::{TtsClient, connection_error, ensure_success, require_api_key};
use crate::{error::SynthesisError, http_client::http_client, types::SpeechRequest, wav};

/// Default `OpenAI` API base URL
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// `OpenAI` audio speech client
///
/// Always asks for WAV output and reads the real format from its header.
pub struct OpenAiTtsClient {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    model: String,
}

impl OpenAiTtsClient {
    /// A client without `api_key` fails every call with an authentication error
    pub fn new(model: impl Into<String>, api_key: Option<SecretString>, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string());

        Self {
            client: http_client(),
            base_url,
            api_key,
            model: model.into(),
        }
    }
}

#[derive(serde::Serialize)]
struct OpenAiSpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
}

#[async_trait]
impl TtsClient for OpenAiTtsClient {
    async fn generate_speech(&self, request: SpeechRequest) -> crate::error::Result<AudioArtifact> {
        let api_key = require_api_key(Provider::OpenAi, self.api_key.as_ref())?;
        let url = format!("{}/audio/speech", self.base_url.trim_end_matches('/'));

        tracing::debug!(
            "OpenAI TTS request: model={}, voice={}, input_len={}",
            self.model,
            request.voice_name,
            request.text.len(),
        );

        let body = OpenAiSpeechRequest {
            model: &self.model,
            input: &request.text,
            voice: &request.voice_name,
            response_format: "wav",
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key.expose_secret()))
            .json(&body)
            .send()
            .await
            .map_err(|e| connection_error(Provider::OpenAi, &e))?;

        let response = ensure_success(Provider::OpenAi, response).await?;

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read OpenAI TTS response body: {e}");
            SynthesisError::ConnectionError(format!("Failed to read response body: {e}"))
        })?;

        if audio.is_empty() {
            return Err(SynthesisError::MalformedResponse("Audio payload is empty".to_string()).into());
        }

        let info = wav::probe(&audio);
        if info.is_none() {
            tracing::warn!("OpenAI TTS returned audio without a readable WAV header");
        }

        let artifact = AudioArtifact {
            data: audio.to_vec(),
            format: Some("wav".to_string()),
            sample_rate: info.map(|i| i.sample_rate),
            channels: info.map(|i| i.channels),
        };

        tracing::debug!("OpenAI TTS synthesis complete, {} bytes", artifact.len());

        Ok(artifact)
    }

    fn provider(&self) -> Provider {
        Provider::OpenAi
    }

    fn model(&self) -> &str {
        &self.model
    }
}
