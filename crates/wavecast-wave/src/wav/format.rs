//! WAVE format descriptor.

use crate::error::{WaveError, WaveResult};

/// Audio format tag carried in the `fmt ` chunk.
///
/// Only [`Pcm`](SampleFormat::Pcm) and [`Float`](SampleFormat::Float) are
/// ever produced by the writer; the companded tags are representable for
/// completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// Linear PCM integer samples.
    Pcm,
    /// IEEE float samples.
    Float,
    /// A-law companded samples.
    Alaw,
    /// mu-law companded samples.
    Mulaw,
}

impl SampleFormat {
    /// The format tag value as stored in the header.
    pub fn tag(self) -> u16 {
        match self {
            SampleFormat::Pcm => 0x0001,
            SampleFormat::Float => 0x0003,
            SampleFormat::Alaw => 0x0006,
            SampleFormat::Mulaw => 0x0007,
        }
    }
}

/// WAVE format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (8, 16, or 32).
    pub bits_per_sample: u16,
    /// Audio format tag.
    pub sample_format: SampleFormat,
}

impl WavFormat {
    /// Creates an 8-bit unsigned PCM format.
    pub fn pcm8(channels: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample: 8,
            sample_format: SampleFormat::Pcm,
        }
    }

    /// Creates a 16-bit signed PCM format.
    pub fn pcm16(channels: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Pcm,
        }
    }

    /// Creates a 32-bit IEEE float format.
    pub fn float32(channels: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        }
    }

    /// Creates a mono 16-bit PCM format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::pcm16(1, sample_rate)
    }

    /// Creates a stereo 16-bit PCM format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::pcm16(2, sample_rate)
    }

    /// Rejects descriptors the header arithmetic would silently corrupt.
    pub(crate) fn validate(&self) -> WaveResult<()> {
        if self.channels == 0 {
            return Err(WaveError::InvalidChannelCount {
                channels: self.channels,
            });
        }
        if self.sample_rate == 0 {
            return Err(WaveError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        Ok(())
    }

    /// Calculates bytes per sample (per channel).
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}
