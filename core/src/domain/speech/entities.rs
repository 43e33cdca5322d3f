use bytes::Bytes;

use crate::domain::speech::pcm::widen_pcm16;

pub const DEFAULT_SAMPLE_RATE: u32 = 24_000;
pub const DEFAULT_CHANNELS: u16 = 1;

/// Synthesized speech as raw little-endian signed 16-bit PCM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechClip {
    pub pcm: Bytes,
    pub sample_rate: u32,
    pub channels: u16,
}

impl SpeechClip {
    pub fn new(pcm: Bytes) -> Self {
        Self {
            pcm,
            sample_rate: DEFAULT_SAMPLE_RATE,
            channels: DEFAULT_CHANNELS,
        }
    }

    /// Planar floating point channels ready for an audio sink
    pub fn channel_data(&self) -> Vec<Vec<f32>> {
        widen_pcm16(&self.pcm, self.channels)
    }

    pub fn frame_count(&self) -> usize {
        let frame_bytes = 2 * usize::from(self.channels.max(1));
        self.pcm.len() / frame_bytes
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f64 / f64::from(self.sample_rate)
    }
}
