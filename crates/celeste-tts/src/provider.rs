pub mod google;
pub mod openai;

use std::time::Duration;

use async_trait::async_trait;
use celeste_core::{AudioArtifact, Provider};
use secrecy::SecretString;

use crate::{
    error::{Result, SynthesisError},
    types::SpeechRequest,
};

/// A speech backend bound to one model and credential
///
/// Implementations are stateless between calls and take `&self`, so a single
/// instance may serve concurrent requests.
#[async_trait]
pub trait TtsClient: Send + Sync {
    /// Synthesize `request.text` with the backend voice `request.voice_name`
    ///
    /// Any backend failure is reported as `TtsError::SynthesisFailed`.
    async fn generate_speech(&self, request: SpeechRequest) -> Result<AudioArtifact>;

    /// Backend this client talks to
    fn provider(&self) -> Provider;

    /// Model identifier sent with every request
    fn model(&self) -> &str;
}

/// Run a synthesis call under a deadline
///
/// Expiry is reported as a synthesis failure like any other backend error.
pub async fn generate_with_timeout(
    client: &dyn TtsClient,
    request: SpeechRequest,
    timeout: Duration,
) -> Result<AudioArtifact> {
    match tokio::time::timeout(timeout, client.generate_speech(request)).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(provider = %client.provider(), ?timeout, "speech synthesis timed out");
            Err(SynthesisError::Timeout(timeout).into())
        }
    }
}

/// Turn a non-success response into a classified synthesis error
pub(crate) async fn ensure_success(
    provider: Provider,
    response: reqwest::Response,
) -> std::result::Result<reqwest::Response, SynthesisError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

    tracing::error!(provider = %provider, status = %status, "speech API error: {error_text}");

    Err(SynthesisError::from_status(status.as_u16(), error_text))
}

/// Credential for a call, or an authentication failure when none is configured
pub(crate) fn require_api_key(
    provider: Provider,
    api_key: Option<&SecretString>,
) -> std::result::Result<&SecretString, SynthesisError> {
    api_key.ok_or_else(|| {
        tracing::error!(provider = %provider, "no API key configured");
        SynthesisError::AuthenticationFailed("API key not configured".to_string())
    })
}

/// Map a transport failure to a synthesis error
pub(crate) fn connection_error(provider: Provider, error: &reqwest::Error) -> SynthesisError {
    tracing::error!(provider = %provider, "speech request failed: {error}");
    SynthesisError::ConnectionError(format!("Failed to send request to {provider}: {error}"))
}
