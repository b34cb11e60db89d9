//! Shared rendering plumbing: encoding selection, file output, reports.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use wavecast_wave::sample::{f32_to_pcm16, f32_to_pcm8, float32_to_bytes, pcm16_to_bytes};
use wavecast_wave::wav::{pcm_hash, write_float32, write_pcm16, write_pcm8};

/// Sample encoding selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    /// 8-bit unsigned PCM.
    Pcm8,
    /// 16-bit signed PCM.
    Pcm16,
    /// 32-bit IEEE float.
    Float32,
}

impl Encoding {
    fn bits_per_sample(self) -> u16 {
        match self {
            Encoding::Pcm8 => 8,
            Encoding::Pcm16 => 16,
            Encoding::Float32 => 32,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Encoding::Pcm8 => "pcm8",
            Encoding::Pcm16 => "pcm16",
            Encoding::Float32 => "float32",
        }
    }
}

/// Summary of one rendered WAV file.
#[derive(Debug, Serialize)]
pub struct RenderReport {
    /// Destination path.
    pub path: String,
    /// Sample encoding name.
    pub encoding: String,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Rendered audio length in seconds.
    pub duration_seconds: f64,
    /// Size of the `data` chunk payload.
    pub data_bytes: usize,
    /// BLAKE3 hex digest of the payload bytes.
    pub pcm_hash: String,
}

impl RenderReport {
    /// Prints the colored human-readable summary.
    pub fn print_human(&self) {
        println!("{} {}", "Wrote:".cyan().bold(), self.path);
        println!(
            "{} {} Hz, {} channel(s), {}-bit {}",
            "Format:".cyan().bold(),
            self.sample_rate,
            self.channels,
            self.bits_per_sample,
            self.encoding
        );
        println!(
            "{} {:.3} s, {} payload bytes",
            "Audio:".cyan().bold(),
            self.duration_seconds,
            self.data_bytes
        );
        println!("{} {}", "PCM hash:".dimmed(), self.pcm_hash);
    }

    /// Prints the machine-readable JSON report.
    pub fn print_json(&self) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }

    /// Prints in the format the `--json` switch selects.
    pub fn print(&self, json: bool) -> Result<()> {
        if json {
            self.print_json()
        } else {
            self.print_human();
            Ok(())
        }
    }
}

/// Converts interleaved normalized float samples to the requested encoding
/// and writes them as a WAV file.
pub fn render_to_file(
    path: &Path,
    channels: u16,
    sample_rate: u32,
    samples: &[f32],
    encoding: Encoding,
) -> Result<RenderReport> {
    let (data_bytes, digest) = match encoding {
        Encoding::Pcm8 => {
            let converted: Vec<u8> = samples.iter().map(|&s| f32_to_pcm8(s)).collect();
            write_pcm8(path, channels, sample_rate, &converted)?;
            (converted.len(), pcm_hash(&converted))
        }
        Encoding::Pcm16 => {
            let converted: Vec<i16> = samples.iter().map(|&s| f32_to_pcm16(s)).collect();
            write_pcm16(path, channels, sample_rate, &converted)?;
            let payload = pcm16_to_bytes(&converted);
            (payload.len(), pcm_hash(&payload))
        }
        Encoding::Float32 => {
            write_float32(path, channels, sample_rate, samples)?;
            let payload = float32_to_bytes(samples);
            (payload.len(), pcm_hash(&payload))
        }
    };

    let frames = samples.len() / channels.max(1) as usize;
    Ok(RenderReport {
        path: path.display().to_string(),
        encoding: encoding.label().to_string(),
        channels,
        sample_rate,
        bits_per_sample: encoding.bits_per_sample(),
        duration_seconds: frames as f64 / sample_rate.max(1) as f64,
        data_bytes,
        pcm_hash: digest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_report_json_keys() {
        let report = RenderReport {
            path: "out.wav".to_string(),
            encoding: "pcm16".to_string(),
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
            duration_seconds: 1.0,
            data_bytes: 88200,
            pcm_hash: "00".repeat(32),
        };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["encoding"], "pcm16");
        assert_eq!(json["sample_rate"], 44100);
        assert_eq!(json["data_bytes"], 88200);
        assert_eq!(json["pcm_hash"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn test_render_to_file_each_encoding() {
        let dir = tempfile::tempdir().unwrap();
        let samples = vec![0.0f32, 0.5, -0.5, 0.25];

        for (encoding, bytes_per_sample) in [
            (Encoding::Pcm8, 1usize),
            (Encoding::Pcm16, 2),
            (Encoding::Float32, 4),
        ] {
            let path = dir.path().join(format!("{}.wav", encoding.label()));
            let report = render_to_file(&path, 1, 44100, &samples, encoding).unwrap();

            assert_eq!(report.data_bytes, samples.len() * bytes_per_sample);
            assert_eq!(
                std::fs::metadata(&path).unwrap().len(),
                44 + report.data_bytes as u64
            );
            assert_eq!(report.pcm_hash.len(), 64);
        }
    }
}
