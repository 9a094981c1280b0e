use serde::Serialize;

/// Format assumed when a backend does not report one
pub const DEFAULT_FORMAT: &str = "wav";

/// Channel count assumed when a backend does not report one
pub const DEFAULT_CHANNELS: u16 = 1;

/// Normalized audio returned by a synthesis call
///
/// Metadata fields left as `None` are unknown; callers fill them with their
/// own defaults through the `*_or` accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioArtifact {
    /// Raw audio bytes
    #[serde(skip)]
    pub data: Vec<u8>,
    /// Container or encoding (e.g. "wav")
    pub format: Option<String>,
    /// Samples per second
    pub sample_rate: Option<u32>,
    /// Number of interleaved channels
    pub channels: Option<u16>,
}

impl AudioArtifact {
    /// Artifact with no metadata
    pub const fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            format: None,
            sample_rate: None,
            channels: None,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub const fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = Some(sample_rate);
        self
    }

    #[must_use]
    pub const fn with_channels(mut self, channels: u16) -> Self {
        self.channels = Some(channels);
        self
    }

    /// Reported sample rate, or `requested` when the backend was silent
    pub fn sample_rate_or(&self, requested: u32) -> u32 {
        self.sample_rate.unwrap_or(requested)
    }

    /// Reported channel count, or mono
    pub fn channels_or_mono(&self) -> u16 {
        self.channels.unwrap_or(DEFAULT_CHANNELS)
    }

    /// Reported format, or "wav"
    pub fn format_or_wav(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_FORMAT)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
