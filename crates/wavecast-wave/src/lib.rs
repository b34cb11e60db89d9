//! Wavecast WAVE container writer
//!
//! This crate serializes raw audio sample buffers into minimal
//! `fmt `/`data` RIFF/WAVE files. The on-disk byte layout is identical on
//! every host: each header field is held in an endian-tagged integer that
//! stores its bytes in the order the RIFF format mandates, so emission is a
//! plain byte copy with no reliance on host byte order or struct layout.
//!
//! # Overview
//!
//! Three sample encodings are supported:
//!
//! - **PCM 8-bit unsigned** - `write_pcm8`
//! - **PCM 16-bit signed** - `write_pcm16`
//! - **IEEE float 32-bit** - `write_float32`
//!
//! Each entry point assembles the fixed 44-byte header from the format
//! descriptor and sample count, then emits the header followed by the raw
//! little-endian payload. A write either completes or fails with a
//! [`WaveError`]; there is no partial-success signaling and no rollback of
//! partially written output.
//!
//! # Example
//!
//! ```ignore
//! use wavecast_wave::wav::write_pcm16;
//!
//! let samples: Vec<i16> = vec![0, 16384, -16384, 32767];
//! write_pcm16("beep.wav", 1, 44100, &samples)?;
//! ```
//!
//! # Crate Structure
//!
//! - [`endian`] - host-order probe, byte-swap primitives, endian-tagged integers
//! - [`sample`] - amplitude conversion and payload byte encoding
//! - [`wav`] - format descriptor, header assembly, file serialization
//! - [`error`] - error types

pub mod endian;
pub mod error;
pub mod sample;
pub mod wav;

// Re-export main types at crate root
pub use error::{WaveError, WaveResult};
pub use wav::{SampleFormat, WavFormat, WavHeader};
