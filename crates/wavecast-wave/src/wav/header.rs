//! Assembly of the fixed 44-byte RIFF/WAVE header.

use std::io::{self, Write};

use crate::endian::{BigEndian, ByteOrder, LittleEndian, host_order};

use super::format::WavFormat;

/// Size of the assembled header in bytes.
pub const WAV_HEADER_LEN: usize = 44;

/// Four-character chunk identifiers are stored big-endian so their bytes
/// read in literal ASCII order; every numeric field is little-endian per
/// the RIFF convention.
type FourCc = BigEndian<u32>;
type FieldU16 = LittleEndian<u16>;
type FieldU32 = LittleEndian<u32>;

const RIFF: u32 = u32::from_be_bytes(*b"RIFF");
const WAVE: u32 = u32::from_be_bytes(*b"WAVE");
const FMT: u32 = u32::from_be_bytes(*b"fmt ");
const DATA: u32 = u32::from_be_bytes(*b"data");

/// Size of the `fmt ` chunk body for uncompressed formats.
const FMT_CHUNK_SIZE: u32 = 16;

/// The fully populated header record, built once per write and immutable
/// afterwards.
///
/// Construction computes the derived fields from the format descriptor and
/// scalar sample count; the header is never reconciled against the payload
/// at write time, so both must come from the same inputs. Degenerate
/// descriptors are rejected by the serializer entry points before a header
/// is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    riff_id: FourCc,
    riff_chunk_size: FieldU32,
    wave_id: FourCc,
    fmt_id: FourCc,
    fmt_size: FieldU32,
    audio_format: FieldU16,
    num_channels: FieldU16,
    sample_rate: FieldU32,
    byte_rate: FieldU32,
    block_align: FieldU16,
    bits_per_sample: FieldU16,
    data_id: FourCc,
    data_chunk_size: FieldU32,
}

impl WavHeader {
    /// Assembles the header for `sample_count` scalar samples of the given
    /// format, probing the host byte order.
    pub fn new(format: &WavFormat, sample_count: u32) -> Self {
        Self::with_host_order(format, sample_count, host_order())
    }

    /// Assembles the header as a host of the given byte order would.
    ///
    /// The emitted bytes are identical for both orders; the parameter
    /// exists so that property is testable on a single machine.
    pub fn with_host_order(format: &WavFormat, sample_count: u32, host: ByteOrder) -> Self {
        let bytes_per_sample = format.bytes_per_sample();
        let block_align = format.block_align();
        let byte_rate = format.byte_rate();
        let data_chunk_size = sample_count * bytes_per_sample as u32;
        let riff_chunk_size = WAV_HEADER_LEN as u32 + data_chunk_size - 8;

        Self {
            riff_id: FourCc::with_host(RIFF, host),
            riff_chunk_size: FieldU32::with_host(riff_chunk_size, host),
            wave_id: FourCc::with_host(WAVE, host),
            fmt_id: FourCc::with_host(FMT, host),
            fmt_size: FieldU32::with_host(FMT_CHUNK_SIZE, host),
            audio_format: FieldU16::with_host(format.sample_format.tag(), host),
            num_channels: FieldU16::with_host(format.channels, host),
            sample_rate: FieldU32::with_host(format.sample_rate, host),
            byte_rate: FieldU32::with_host(byte_rate, host),
            block_align: FieldU16::with_host(block_align, host),
            bits_per_sample: FieldU16::with_host(format.bits_per_sample, host),
            data_id: FourCc::with_host(DATA, host),
            data_chunk_size: FieldU32::with_host(data_chunk_size, host),
        }
    }

    /// Size of the `data` chunk payload in bytes.
    pub fn data_chunk_size(&self) -> u32 {
        self.data_chunk_size.to_native()
    }

    /// Size of the RIFF chunk: everything after the first 8 bytes.
    pub fn riff_chunk_size(&self) -> u32 {
        self.riff_chunk_size.to_native()
    }

    /// Total size of the serialized file: header plus payload.
    pub fn file_len(&self) -> u64 {
        WAV_HEADER_LEN as u64 + self.data_chunk_size() as u64
    }

    /// Lays the header out byte for byte in on-disk field order.
    ///
    /// Each field contributes its stored bytes directly; no struct memory
    /// is reinterpreted and no byte-order decision is made here.
    pub fn to_bytes(&self) -> [u8; WAV_HEADER_LEN] {
        fn put(out: &mut [u8; WAV_HEADER_LEN], at: &mut usize, bytes: &[u8]) {
            out[*at..*at + bytes.len()].copy_from_slice(bytes);
            *at += bytes.len();
        }

        let mut out = [0u8; WAV_HEADER_LEN];
        let mut at = 0;
        put(&mut out, &mut at, &self.riff_id.bytes());
        put(&mut out, &mut at, &self.riff_chunk_size.bytes());
        put(&mut out, &mut at, &self.wave_id.bytes());
        put(&mut out, &mut at, &self.fmt_id.bytes());
        put(&mut out, &mut at, &self.fmt_size.bytes());
        put(&mut out, &mut at, &self.audio_format.bytes());
        put(&mut out, &mut at, &self.num_channels.bytes());
        put(&mut out, &mut at, &self.sample_rate.bytes());
        put(&mut out, &mut at, &self.byte_rate.bytes());
        put(&mut out, &mut at, &self.block_align.bytes());
        put(&mut out, &mut at, &self.bits_per_sample.bytes());
        put(&mut out, &mut at, &self.data_id.bytes());
        put(&mut out, &mut at, &self.data_chunk_size.bytes());
        debug_assert_eq!(at, WAV_HEADER_LEN);
        out
    }

    /// Writes the header bytes to a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())
    }
}
