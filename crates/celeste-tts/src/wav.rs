//! WAV container helpers for backend payloads

use std::io::Cursor;

/// Format metadata read from a WAV header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WavInfo {
    pub sample_rate: u32,
    pub channels: u16,
}

/// Whether the payload starts with a RIFF/WAVE header
pub(crate) fn is_wav(bytes: &[u8]) -> bool {
    bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WAVE"
}

/// Read sample rate and channel count from a WAV payload
///
/// Only the `fmt ` chunk is consulted. Streamed WAV carries placeholder
/// RIFF and `data` sizes (`0xFFFFFFFF`), which a full reader rejects but
/// which say nothing about the format.
pub(crate) fn probe(bytes: &[u8]) -> Option<WavInfo> {
    if !is_wav(bytes) {
        return None;
    }

    let mut offset = 12;
    while let Some(header) = bytes.get(offset..offset + 8) {
        let id = &header[0..4];
        let size = usize::try_from(u32::from_le_bytes([header[4], header[5], header[6], header[7]])).ok()?;
        let body = offset + 8;

        if id == b"fmt " {
            let fmt = bytes.get(body..body + 16)?;
            return Some(WavInfo {
                channels: u16::from_le_bytes([fmt[2], fmt[3]]),
                sample_rate: u32::from_le_bytes([fmt[4], fmt[5], fmt[6], fmt[7]]),
            });
        }

        // Chunks are word aligned
        offset = body.checked_add(size)?.checked_add(size % 2)?;
    }

    None
}

/// Wrap raw 16-bit little-endian PCM in a WAV container
///
/// A trailing odd byte cannot form a sample and is dropped.
pub(crate) fn pcm16_to_wav(pcm: &[u8], sample_rate: u32, channels: u16) -> Result<Vec<u8>, hound::Error> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::with_capacity(pcm.len() + 44));

    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
        for sample in pcm.chunks_exact(2) {
            writer.write_sample(i16::from_le_bytes([sample[0], sample[1]]))?;
        }
        writer.finalize()?;
    }

    Ok(cursor.into_inner())
}

/// Parse the `rate=` parameter of a PCM mime type
///
/// e.g. `audio/L16;codec=pcm;rate=24000` yields 24000.
pub(crate) fn mime_sample_rate(mime_type: &str) -> Option<u32> {
    mime_type
        .split(';')
        .filter_map(|param| param.trim().split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("rate"))
        .and_then(|(_, value)| value.trim().parse().ok())
}
