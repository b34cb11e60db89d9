//! Byte-exact RIFF/WAVE container serialization.
//!
//! This module assembles the fixed 44-byte `fmt `/`data` header and writes
//! it followed by the raw sample payload. Every header field is emitted
//! field by field in its mandated byte order, so the output is identical on
//! big- and little-endian hosts.

mod format;
mod header;
mod writer;


// Re-export public API
pub use format::{SampleFormat, WavFormat};
pub use header::{WAV_HEADER_LEN, WavHeader};
pub use writer::{
    encode_float32, encode_pcm16, encode_pcm8, pcm_hash, write_float32, write_pcm16, write_pcm8,
    write_wav,
};
