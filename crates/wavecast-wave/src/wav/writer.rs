//! Serializer entry points: header bytes followed by the raw payload.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::WaveResult;
use crate::sample::{float32_to_bytes, pcm16_to_bytes};

use super::format::WavFormat;
use super::header::{WAV_HEADER_LEN, WavHeader};

/// Writes a complete WAVE stream to a writer.
///
/// Emits the assembled header followed immediately by the payload bytes,
/// with no separators and no trailing padding. The header and payload must
/// have been built from the same sample count; nothing is reconciled here.
pub fn write_wav<W: Write>(writer: &mut W, header: &WavHeader, payload: &[u8]) -> io::Result<()> {
    header.write_to(writer)?;
    writer.write_all(payload)?;
    Ok(())
}

/// Writes 8-bit unsigned PCM samples to a WAVE file at `path`.
///
/// An empty sample buffer produces a valid header-only 44-byte file. On
/// failure the destination is left as-is; a partially written file is not
/// removed.
pub fn write_pcm8(
    path: impl AsRef<Path>,
    channels: u16,
    sample_rate: u32,
    samples: &[u8],
) -> WaveResult<()> {
    let format = WavFormat::pcm8(channels, sample_rate);
    write_file(path.as_ref(), &format, samples.len() as u32, samples)
}

/// Writes 16-bit signed PCM samples to a WAVE file at `path`.
pub fn write_pcm16(
    path: impl AsRef<Path>,
    channels: u16,
    sample_rate: u32,
    samples: &[i16],
) -> WaveResult<()> {
    let format = WavFormat::pcm16(channels, sample_rate);
    let payload = pcm16_to_bytes(samples);
    write_file(path.as_ref(), &format, samples.len() as u32, &payload)
}

/// Writes 32-bit IEEE float samples to a WAVE file at `path`.
pub fn write_float32(
    path: impl AsRef<Path>,
    channels: u16,
    sample_rate: u32,
    samples: &[f32],
) -> WaveResult<()> {
    let format = WavFormat::float32(channels, sample_rate);
    let payload = float32_to_bytes(samples);
    write_file(path.as_ref(), &format, samples.len() as u32, &payload)
}

/// Encodes 8-bit unsigned PCM samples as a complete WAVE file in memory.
pub fn encode_pcm8(channels: u16, sample_rate: u32, samples: &[u8]) -> WaveResult<Vec<u8>> {
    let format = WavFormat::pcm8(channels, sample_rate);
    encode(&format, samples.len() as u32, samples)
}

/// Encodes 16-bit signed PCM samples as a complete WAVE file in memory.
pub fn encode_pcm16(channels: u16, sample_rate: u32, samples: &[i16]) -> WaveResult<Vec<u8>> {
    let format = WavFormat::pcm16(channels, sample_rate);
    encode(&format, samples.len() as u32, &pcm16_to_bytes(samples))
}

/// Encodes 32-bit IEEE float samples as a complete WAVE file in memory.
pub fn encode_float32(channels: u16, sample_rate: u32, samples: &[f32]) -> WaveResult<Vec<u8>> {
    let format = WavFormat::float32(channels, sample_rate);
    encode(&format, samples.len() as u32, &float32_to_bytes(samples))
}

/// Computes the BLAKE3 hex digest of a raw payload.
///
/// Hashes the `data` chunk bytes only, so byte-exactness of the audio can
/// be checked independently of the header.
pub fn pcm_hash(payload: &[u8]) -> String {
    blake3::hash(payload).to_hex().to_string()
}

/// One uninterrupted open / header / payload / flush sequence.
///
/// The destination handle is scoped to this call and closed on every exit
/// path. There is no rollback: a failure partway leaves whatever bytes were
/// already flushed.
fn write_file(
    path: &Path,
    format: &WavFormat,
    sample_count: u32,
    payload: &[u8],
) -> WaveResult<()> {
    format.validate()?;
    let header = WavHeader::new(format, sample_count);

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_wav(&mut writer, &header, payload)?;
    writer.flush()?;
    Ok(())
}

fn encode(format: &WavFormat, sample_count: u32, payload: &[u8]) -> WaveResult<Vec<u8>> {
    format.validate()?;
    let header = WavHeader::new(format, sample_count);

    let mut out = Vec::with_capacity(WAV_HEADER_LEN + payload.len());
    write_wav(&mut out, &header, payload)?;
    Ok(out)
}
