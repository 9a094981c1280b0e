//! Mock speech backends for integration tests
//!
//! Serves a minimal Gemini `generateContent` endpoint and an OpenAI
//! `audio/speech` endpoint from one listener

use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tokio_util::sync::CancellationToken;

/// Credential the mock accepts
pub const API_KEY: &str = "test-key";

/// Rate of the audio the mock returns
pub const MOCK_SAMPLE_RATE: u32 = 24_000;

/// Length of the silence the mock returns
pub const SILENCE_SECONDS: u32 = 2;

/// Voices the mock Gemini endpoint accepts
const GOOGLE_VOICES: &[&str] = &[
    "Achernar", "Achird", "Algenib", "Algieba", "Alnilam", "Aoede", "Autonoe", "Callirrhoe", "Charon", "Despina",
    "Enceladus", "Erinome", "Fenrir", "Gacrux", "Iapetus", "Kore", "Laomedeia", "Leda", "Orus", "Puck",
    "Pulcherrima", "Rasalgethi", "Sadachbia", "Sadaltager", "Schedar", "Sulafat", "Umbriel", "Vindemiatrix",
    "Zephyr", "Zubenelgenubi",
];

/// Size of the PCM payload for one response
pub const fn silence_len() -> usize {
    (MOCK_SAMPLE_RATE * SILENCE_SECONDS * 2) as usize
}

/// How the mock answers a well-formed, authenticated request
#[derive(Debug, Clone, Copy, Default)]
pub enum Behavior {
    /// Return two seconds of silence
    #[default]
    Silence,
    /// Return two seconds of silence as streamed WAV, whose RIFF and
    /// `data` sizes are the `0xFFFFFFFF` placeholder
    StreamedSilence,
    /// Return a response with no audio part
    NoAudio,
    /// Fail every request with the given status
    Status(u16),
}

/// Mock speech backend
pub struct MockSpeech {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockSpeechState>,
}

struct MockSpeechState {
    behavior: Behavior,
    google_count: AtomicU32,
    openai_count: AtomicU32,
    last_request: Mutex<Option<serde_json::Value>>,
}

impl MockSpeech {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with(Behavior::Silence).await
    }

    /// Start a mock server that answers with `behavior`
    pub async fn start_with(behavior: Behavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockSpeechState {
            behavior,
            google_count: AtomicU32::new(0),
            openai_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1beta/models/{model_action}", routing::post(handle_generate_content))
            .route("/v1/audio/speech", routing::post(handle_audio_speech))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for the Gemini client
    pub fn google_base_url(&self) -> String {
        format!("http://{}/v1beta", self.addr)
    }

    /// Base URL for the OpenAI client
    pub fn openai_base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of Gemini requests received
    pub fn google_count(&self) -> u32 {
        self.state.google_count.load(Ordering::Relaxed)
    }

    /// Number of OpenAI requests received
    pub fn openai_count(&self) -> u32 {
        self.state.openai_count.load(Ordering::Relaxed)
    }

    /// Body of the most recent request
    pub fn last_request(&self) -> Option<serde_json::Value> {
        self.state.last_request.lock().ok()?.clone()
    }
}

impl Drop for MockSpeech {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

// -- Helpers --

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": message,
            }
        })),
    )
        .into_response()
}

fn record(state: &MockSpeechState, body: &serde_json::Value) {
    if let Ok(mut last) = state.last_request.lock() {
        *last = Some(body.clone());
    }
}

fn silence_wav() -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: MOCK_SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
    for _ in 0..MOCK_SAMPLE_RATE * SILENCE_SECONDS {
        writer.write_sample(0i16).unwrap();
    }
    writer.finalize().unwrap();

    cursor.into_inner()
}

// -- Handlers --

async fn handle_generate_content(
    State(state): State<Arc<MockSpeechState>>,
    Path(model_action): Path<String>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    state.google_count.fetch_add(1, Ordering::Relaxed);
    record(&state, &body);

    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some(API_KEY) {
        return error_response(
            StatusCode::BAD_REQUEST,
            "API key not valid. Please pass a valid API key.",
        );
    }

    if !model_action.ends_with(":generateContent") {
        return error_response(StatusCode::NOT_FOUND, "unknown method");
    }

    let voice = body["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]["voiceName"]
        .as_str()
        .unwrap_or_default();
    if !GOOGLE_VOICES.contains(&voice) {
        return error_response(
            StatusCode::BAD_REQUEST,
            &format!("Voice name {voice} is not supported"),
        );
    }

    match state.behavior {
        Behavior::Status(code) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            error_response(status, "mock server intentional failure")
        }
        Behavior::NoAudio => Json(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "no audio today" }], "role": "model" },
                "finishReason": "OTHER"
            }]
        }))
        .into_response(),
        Behavior::Silence | Behavior::StreamedSilence => {
            let pcm = vec![0u8; silence_len()];
            Json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{
                            "inlineData": {
                                "mimeType": format!("audio/L16;codec=pcm;rate={MOCK_SAMPLE_RATE}"),
                                "data": STANDARD.encode(pcm),
                            }
                        }],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }]
            }))
            .into_response()
        }
    }
}

async fn handle_audio_speech(
    State(state): State<Arc<MockSpeechState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    state.openai_count.fetch_add(1, Ordering::Relaxed);
    record(&state, &body);

    let expected = format!("Bearer {API_KEY}");
    if headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) != Some(expected.as_str()) {
        return error_response(StatusCode::UNAUTHORIZED, "Incorrect API key provided");
    }

    match state.behavior {
        Behavior::Status(code) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            error_response(status, "mock server intentional failure")
        }
        Behavior::NoAudio => StatusCode::OK.into_response(),
        Behavior::Silence => ([(header::CONTENT_TYPE, "audio/wav")], silence_wav()).into_response(),
        Behavior::StreamedSilence => {
            let mut wav = silence_wav();
            wav[4..8].copy_from_slice(&u32::MAX.to_le_bytes());
            wav[40..44].copy_from_slice(&u32::MAX.to_le_bytes());
            ([(header::CONTENT_TYPE, "audio/wav")], wav).into_response()
        }
    }
}
