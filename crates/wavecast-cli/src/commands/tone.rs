//! Tone command implementation
//!
//! Renders a fixed-frequency sine tone and writes it as a WAV file.

use anyhow::{bail, Result};
use std::f64::consts::TAU;
use std::path::Path;
use std::process::ExitCode;

use super::render::{render_to_file, Encoding};

/// Run the tone command.
#[allow(clippy::too_many_arguments)]
pub fn run(
    out: &Path,
    freq: f64,
    duration: f64,
    rate: u32,
    channels: u16,
    gain: f64,
    encoding: Encoding,
    json: bool,
) -> Result<ExitCode> {
    if freq <= 0.0 {
        bail!("tone frequency must be positive, got {freq}");
    }
    if duration < 0.0 {
        bail!("duration must not be negative, got {duration}");
    }

    let samples = synthesize(freq, duration, rate, channels, gain);
    let report = render_to_file(out, channels, rate, &samples, encoding)?;
    report.print(json)?;
    Ok(ExitCode::SUCCESS)
}

/// Renders an interleaved sine tone, identical in every channel.
fn synthesize(freq: f64, duration: f64, rate: u32, channels: u16, gain: f64) -> Vec<f32> {
    let frames = (duration * rate as f64).round() as usize;
    let mut samples = Vec::with_capacity(frames * channels as usize);

    for frame in 0..frames {
        let t = frame as f64 / rate as f64;
        let value = ((TAU * freq * t).sin() * gain) as f32;
        for _ in 0..channels {
            samples.push(value);
        }
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_sample_count() {
        let samples = synthesize(440.0, 0.5, 44100, 2, 0.8);
        assert_eq!(samples.len(), 22050 * 2);
    }

    #[test]
    fn test_synthesize_starts_at_zero_and_stays_in_range() {
        let samples = synthesize(440.0, 0.1, 44100, 1, 0.8);
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|s| s.abs() <= 0.8 + f32::EPSILON));
    }

    #[test]
    fn test_channels_carry_the_same_signal() {
        let samples = synthesize(220.0, 0.01, 48000, 2, 0.5);
        for frame in samples.chunks_exact(2) {
            assert_eq!(frame[0], frame[1]);
        }
    }
}
