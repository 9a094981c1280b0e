/// Sample rate backends fall back to when the caller does not ask for one
pub const DEFAULT_SAMPLE_RATE: u32 = 24_000;

/// Speech synthesis request
///
/// Blank text is rejected by callers before a request is built; backends
/// do not check it again, nor do they check `voice_name` against the
/// registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    /// Text to synthesize into speech
    pub text: String,
    /// Backend voice identifier (e.g. "Kore" or "alloy")
    pub voice_name: String,
    /// Requested output sample rate in Hz
    pub sample_rate: Option<u32>,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>, voice_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_name: voice_name.into(),
            sample_rate: None,
        }
    }

    #[must_use]
    pub const fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = Some(sample_rate);
        self
    }

    /// Requested sample rate or the backend default
    pub fn sample_rate_or_default(&self) -> u32 {
        self.sample_rate.unwrap_or(DEFAULT_SAMPLE_RATE)
    }
}
