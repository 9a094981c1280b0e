//! Google Gemini speech generation

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use celeste_core::{AudioArtifact, DEFAULT_CHANNELS, Provider};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::{TtsClient, connection_error, ensure_success, require_api_key};
use crate::{error::SynthesisError, http_client::http_client, types::SpeechRequest, wav};

/// Default Generative Language API base URL
pub const DEFAULT_GOOGLE_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini text-to-speech client
///
/// Gemini returns raw 16-bit PCM; the client wraps it in a mono WAV
/// container so the artifact metadata describes the bytes it carries.
pub struct GoogleTtsClient {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    model: String,
}

impl GoogleTtsClient {
    /// A client without `api_key` fails every call with an authentication error
    pub fn new(model: impl Into<String>, api_key: Option<SecretString>, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_GOOGLE_API_URL.to_string());

        Self {
            client: http_client(),
            base_url,
            api_key,
            model: model.into(),
        }
    }

    /// `generateContent` endpoint for the configured model
    fn generate_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/models/{}:generateContent", self.model)
    }
}

// -- Wire types --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_modalities: [&'static str; 1],
    speech_config: SpeechConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig<'a> {
    voice_config: VoiceConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig<'a> {
    prebuilt_voice_config: PrebuiltVoiceConfig<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig<'a> {
    voice_name: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn speech(text: &'a str, voice_name: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![TextPart { text }],
            }],
            generation_config: GenerationConfig {
                response_modalities: ["AUDIO"],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig { voice_name },
                    },
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default, alias = "inline_data")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default, alias = "mime_type")]
    mime_type: Option<String>,
    /// Base64-encoded audio
    data: String,
}

impl GenerateContentResponse {
    /// Audio payload of the first candidate
    fn into_audio(self) -> Option<InlineData> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|part| part.inline_data)
    }
}

/// Build the artifact from decoded backend audio
///
/// A rate named in the mime type wins over the requested one. WAV passes
/// through with its own header as the only source of metadata.
fn to_artifact(audio: Vec<u8>, mime_type: Option<&str>, requested_rate: u32) -> Result<AudioArtifact, SynthesisError> {
    if wav::is_wav(&audio) {
        let info = wav::probe(&audio);
        let mut artifact = AudioArtifact::new(audio).with_format("wav");
        artifact.sample_rate = info.map(|i| i.sample_rate);
        artifact.channels = info.map(|i| i.channels);
        return Ok(artifact);
    }

    let sample_rate = mime_type.and_then(wav::mime_sample_rate).unwrap_or(requested_rate);

    let wav = wav::pcm16_to_wav(&audio, sample_rate, DEFAULT_CHANNELS)
        .map_err(|e| SynthesisError::MalformedResponse(format!("Failed to wrap PCM audio: {e}")))?;

    Ok(AudioArtifact::new(wav)
        .with_format("wav")
        .with_sample_rate(sample_rate)
        .with_channels(DEFAULT_CHANNELS))
}

#[async_trait]
impl TtsClient for GoogleTtsClient {
    async fn generate_speech(&self, request: SpeechRequest) -> crate::error::Result<AudioArtifact> {
        let api_key = require_api_key(Provider::Google, self.api_key.as_ref())?;
        let url = self.generate_url();
        let requested_rate = request.sample_rate_or_default();

        tracing::debug!(
            "Gemini TTS request: model={}, voice={}, input_len={}",
            self.model,
            request.voice_name,
            request.text.len(),
        );

        let body = GenerateContentRequest::speech(&request.text, &request.voice_name);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| connection_error(Provider::Google, &e))?;

        let response = ensure_success(Provider::Google, response).await?;

        let wire: GenerateContentResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini TTS response: {e}");
            SynthesisError::MalformedResponse(format!("Failed to parse response: {e}"))
        })?;

        let inline = wire
            .into_audio()
            .ok_or_else(|| SynthesisError::MalformedResponse("Response contained no audio payload".to_string()))?;

        let audio = STANDARD
            .decode(inline.data.trim())
            .map_err(|e| SynthesisError::MalformedResponse(format!("Audio payload is not valid base64: {e}")))?;

        if audio.is_empty() {
            return Err(SynthesisError::MalformedResponse("Audio payload is empty".to_string()).into());
        }

        let artifact = to_artifact(audio, inline.mime_type.as_deref(), requested_rate)?;

        tracing::debug!(
            "Gemini TTS synthesis complete, {} bytes at {:?} Hz",
            artifact.len(),
            artifact.sample_rate
        );

        Ok(artifact)
    }

    fn provider(&self) -> Provider {
        Provider::Google
    }

    fn model(&self) -> &str {
        &self.model
    }
}
